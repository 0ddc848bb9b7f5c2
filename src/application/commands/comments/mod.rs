mod create;
mod delete;
mod service;

pub use create::{CreateCommentCommand, CreateCommentCommandBuilder};
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
