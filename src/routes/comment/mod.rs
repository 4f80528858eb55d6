pub mod add;
pub mod get;

pub use add::*;
pub use get::*;
