use crate::notation::error::{EvaluationError, StructuralError};
use crate::notation::evaluator::evaluate_by_mapping;
use crate::notation::operator::BinaryOperator;
use crate::notation::token::Token;
use crate::notation::valid_postfix;
use anyhow::{bail, Context, Result};
use ptree::item::StringItem;
use ptree::write_tree;
use std::convert::Infallible;
use std::fmt::Display;

/// Deepest operator nesting `render_tree` accepts. Writing and dropping a
/// `StringItem` both recurse once per level.
pub const MAX_TREE_DEPTH: usize = 256;

fn tree_depth<Op: BinaryOperator>(postfix: &[Token<Op>]) -> Result<usize, StructuralError> {
    let depth = evaluate_by_mapping(
        postfix,
        |_| Ok::<usize, Infallible>(0),
        |_| Ok(|lhs: usize, rhs: usize| Ok(lhs.max(rhs) + 1)),
    )
    .map_err(EvaluationError::into_structural)?;
    Ok(depth.unwrap_or(0))
}

fn leaf(text: String) -> StringItem {
    StringItem {
        text,
        children: vec![],
    }
}

/// Renders an expression in either notation as an indented tree, one node per operator
/// with its left and right operands as children.
///
/// The root is labelled `expression` and has no children for the empty expression.
/// Expressions nesting operators deeper than [`MAX_TREE_DEPTH`] are rejected.
pub fn render_tree<Op>(tokens: &[Token<Op>]) -> Result<String>
where
    Op: BinaryOperator + Clone + Display,
    Op::Operand: Clone + Display,
{
    let postfix = valid_postfix(tokens).context("Could not build a tree from the expression")?;
    let depth = tree_depth(&postfix)?;
    if depth > MAX_TREE_DEPTH {
        bail!(
            "Expression nests {} operators deep, trees are limited to {}",
            depth,
            MAX_TREE_DEPTH
        );
    }
    let root = evaluate_by_mapping(
        &postfix,
        |operand| Ok::<_, Infallible>(leaf(operand.to_string())),
        |operator| {
            Ok(move |lhs: StringItem, rhs: StringItem| {
                Ok(StringItem {
                    text: operator.to_string(),
                    children: vec![lhs, rhs],
                })
            })
        },
    )
    .map_err(EvaluationError::into_structural)?;

    let tree = StringItem {
        text: "expression".to_string(),
        children: root.into_iter().collect(),
    };

    let mut buffer: Vec<u8> = Vec::new();
    write_tree(&tree, &mut buffer).context("Could not write the expression tree")?;
    String::from_utf8(buffer).context("Expression tree is not valid UTF-8")
}
