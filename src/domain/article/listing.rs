// src/domain/article/listing.rs
//! Sort and filter tokens for article listings.
//!
//! Raw query strings are only ever matched against fixed literals here; the
//! storage layer renders each token to a fragment of its own choosing, so no
//! caller-supplied text reaches the SQL statement.
use crate::domain::topic::TopicSlug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortKey {
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl ArticleSortKey {
    pub const ALL: [Self; 3] = [Self::CreatedAt, Self::Votes, Self::CommentCount];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
            Self::CommentCount => "comment_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A validated article listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListing {
    pub sort_by: ArticleSortKey,
    pub order: SortOrder,
    pub topic: Option<TopicSlug>,
}

impl ArticleListing {
    #[must_use]
    pub const fn new(sort_by: ArticleSortKey, order: SortOrder) -> Self {
        Self {
            sort_by,
            order,
            topic: None,
        }
    }

    #[must_use]
    pub fn with_topic(mut self, topic: TopicSlug) -> Self {
        self.topic = Some(topic);
        self
    }
}
