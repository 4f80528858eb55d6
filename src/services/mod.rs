pub mod store;
pub mod submit_flow;

pub use store::{CommentStore, PgCommentStore};
pub use submit_flow::{SubmitError, SubmitFlow, SubmitOutcome, SubmitState};
