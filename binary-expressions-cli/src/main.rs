#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod arithmetic;
mod lexer;

use crate::arithmetic::Arithmetic;
use anyhow::{Context, Result};
use binary_expressions::notation::token::Token;
use binary_expressions::notation::{
    evaluate, render_tree, tokens_to_string, valid_infix, valid_postfix,
};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, info};

/// Converts and evaluates integer expressions in infix or postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,
    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the expression in postfix notation
    Postfix {
        /// The expression, in infix or postfix notation
        #[clap(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Prints the expression in infix notation, with as few brackets as possible
    Infix {
        /// The expression, in infix or postfix notation
        #[clap(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Evaluates the expression
    Evaluate {
        /// Print 0 instead of failing when an operator fails
        #[clap(long)]
        swallow_errors: bool,
        /// The expression, in infix or postfix notation
        #[clap(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Prints the expression as a tree of operators
    Tree {
        /// The expression, in infix or postfix notation
        #[clap(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let output = run(&args.command)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn parse_expression(words: &[String]) -> Result<Vec<Token<Arithmetic>>> {
    let expression = words.join(" ");
    let tokens = lexer::tokenize(&expression)
        .with_context(|| format!("Could not read expression '{}'", expression))?;
    debug!("Read {} tokens from '{}'", tokens.len(), expression);
    Ok(tokens)
}

fn run(command: &Command) -> Result<String> {
    match command {
        Command::Postfix { expression } => {
            let tokens = parse_expression(expression)?;
            let postfix = valid_postfix(&tokens).context("Could not convert to postfix")?;
            tokens_to_string(&postfix)
        }
        Command::Infix { expression } => {
            let tokens = parse_expression(expression)?;
            let infix = valid_infix(&tokens).context("Could not convert to infix")?;
            tokens_to_string(&infix)
        }
        Command::Evaluate {
            swallow_errors,
            expression,
        } => {
            let tokens = parse_expression(expression)?;
            if *swallow_errors {
                info!("Operator failures evaluate to 0");
            }
            let value = evaluate(&tokens, !*swallow_errors)
                .context("Could not evaluate expression")?;
            Ok(value.to_string())
        }
        Command::Tree { expression } => {
            let tokens = parse_expression(expression)?;
            render_tree(&tokens)
        }
    }
}
