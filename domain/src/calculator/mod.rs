//! Calculator: restricted expression evaluation and calculator-mode replies.

pub mod expression;
pub mod quick_math;

pub use expression::{Evaluation, evaluate};
pub use quick_math::quick_math;
