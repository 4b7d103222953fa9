//! Category handlers, one per [`HandlerCategory`](crate::classifier::HandlerCategory).
//!
//! Each handler runs its own ordered keyword cascade and always returns a
//! [`Solution`](crate::solution::Solution).

pub mod conversion;
pub mod extract;
pub mod logic;
pub mod math;
pub mod physics;
pub mod programming;
pub mod time_date;
pub mod traits;

pub use conversion::ConversionHandler;
pub use logic::LogicHandler;
pub use math::MathHandler;
pub use physics::PhysicsHandler;
pub use programming::ProgrammingHandler;
pub use time_date::TimeDateHandler;
pub use traits::ProblemHandler;
