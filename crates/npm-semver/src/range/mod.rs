//! Ranges, the operator algebra that builds them, and matcher trees

mod interval;
mod matcher;
mod operator;

pub use interval::Range;
pub use matcher::Matcher;
pub use operator::{Operator, rewrite_caret, rewrite_tilde};
