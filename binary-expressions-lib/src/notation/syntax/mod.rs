pub mod expression_tree;
mod sub_infix;

pub(crate) use crate::notation::syntax::sub_infix::postfix_to_infix;
