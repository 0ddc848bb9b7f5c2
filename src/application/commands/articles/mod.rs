mod service;
mod vote;

pub use service::ArticleCommandService;
pub use vote::VoteOnArticleCommand;
