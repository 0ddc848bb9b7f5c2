// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSortKey, ArticleSummary,
    ArticleWriteRepository, SortOrder,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "article_id, title, topic, author, body, created_at, votes, article_img_url";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id),
            title: row.title,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.article_id),
            title: row.title,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        })
    }
}

// The only text that ever follows ORDER BY. Each token maps to a fixed
// fragment; nothing from the request is spliced into the statement.
const fn sort_column(key: ArticleSortKey) -> &'static str {
    match key {
        ArticleSortKey::CreatedAt => "articles.created_at",
        ArticleSortKey::Votes => "articles.votes",
        ArticleSortKey::CommentCount => "comment_count",
    }
}

const fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

fn summary_query(listing: &ArticleListing) -> QueryBuilder<'_, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
         articles.created_at, articles.votes, articles.article_img_url, \
         COUNT(comments.comment_id) AS comment_count \
         FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id",
    );

    if let Some(topic) = &listing.topic {
        builder.push(" WHERE articles.topic = ");
        builder.push_bind(topic.as_str());
    }

    let direction = sort_direction(listing.order);
    builder.push(" GROUP BY articles.article_id ORDER BY ");
    builder.push(sort_column(listing.sort_by));
    builder.push(" ");
    builder.push(direction);
    builder.push(", articles.article_id ");
    builder.push(direction);

    builder
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = $1"
        ))
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_summaries(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let rows = summary_query(listing)
            .build_query_as::<ArticleSummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn increment_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(delta)
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
