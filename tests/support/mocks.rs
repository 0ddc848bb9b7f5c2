// tests/support/mocks.rs
use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use nc_news::application::ports::time::Clock;
use nc_news::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSortKey, ArticleSummary,
    ArticleWriteRepository, SortOrder,
};
use nc_news::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use nc_news::domain::errors::{DomainError, DomainResult};
use nc_news::domain::topic::{Topic, TopicRepository, TopicSlug};
use nc_news::domain::user::{User, UserRepository, Username};

use super::fixtures;

/* -------------------------------- In-memory store -------------------------------- */

/// Every repository backed by plain vectors seeded from the fixture.
/// Comment counts are derived on each listing, like the SQL join does.
pub struct InMemoryStore {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryStore {
    pub fn seeded() -> Self {
        Self {
            topics: fixtures::topics(),
            users: fixtures::users(),
            articles: Mutex::new(fixtures::articles()),
            comments: Mutex::new(fixtures::comments()),
        }
    }

    pub fn comment_count(&self, article_id: i32) -> usize {
        let comments = self.comments.lock().unwrap();
        comments
            .iter()
            .filter(|c| i32::from(c.article_id) == article_id)
            .count()
    }

    pub fn has_comment(&self, comment_id: i32) -> bool {
        let comments = self.comments.lock().unwrap();
        comments.iter().any(|c| i32::from(c.id) == comment_id)
    }

    pub fn total_comments(&self) -> usize {
        self.comments.lock().unwrap().len()
    }
}

fn compare(a: &ArticleSummary, b: &ArticleSummary, key: ArticleSortKey) -> Ordering {
    let primary = match key {
        ArticleSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        ArticleSortKey::Votes => a.votes.cmp(&b.votes),
        ArticleSortKey::CommentCount => a.comment_count.cmp(&b.comment_count),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list_summaries(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let articles = self.articles.lock().unwrap();
        let comments = self.comments.lock().unwrap();

        let mut summaries: Vec<ArticleSummary> = articles
            .iter()
            .filter(|a| listing.topic.as_ref().is_none_or(|topic| &a.topic == topic))
            .map(|a| {
                let count = comments.iter().filter(|c| c.article_id == a.id).count();
                ArticleSummary::from_article(a, i64::try_from(count).unwrap())
            })
            .collect();

        summaries.sort_by(|a, b| {
            let ordering = compare(a, b, listing.sort_by);
            match listing.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        Ok(summaries)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn increment_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>> {
        let mut articles = self.articles.lock().unwrap();
        let Some(article) = articles.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        article.votes = article
            .votes
            .checked_add(delta)
            .ok_or_else(|| DomainError::Validation("numeric value out of range".into()))?;
        Ok(Some(article.clone()))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let comments = self.comments.lock().unwrap();
        let mut found: Vec<Comment> = comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(found)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let next_id = comments.iter().map(|c| i32::from(c.id)).max().unwrap_or(0) + 1;
        let created = Comment {
            id: CommentId::new(next_id),
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            votes: 0,
            created_at: comment.created_at,
        };
        comments.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        Ok(self.topics.clone())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        Ok(self.topics.iter().any(|t| &t.slug == slug))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self.users.iter().find(|u| &u.username == username).cloned())
    }
}

/* -------------------------------- Failing repository -------------------------------- */

/// Article repository whose every call fails like a dropped connection.
pub struct BrokenArticleRepo;

#[async_trait]
impl ArticleReadRepository for BrokenArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection reset by peer".into()))
    }

    async fn list_summaries(&self, _listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        Err(DomainError::Persistence("connection reset by peer".into()))
    }
}

/* -------------------------------- Clock -------------------------------- */

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
