pub(crate) mod comment;
pub mod health_checks;

pub use health_checks::*;
