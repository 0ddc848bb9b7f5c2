use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListing, ArticleSortKey, SortOrder},
        topic::TopicSlug,
    },
};

/// Raw listing parameters as received from the client. `None` selects the
/// default for that parameter.
#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let listing = self.validate_listing(query).await?;
        tracing::debug!(
            sort_by = listing.sort_by.as_str(),
            order = listing.order.as_str(),
            topic = listing.topic.as_ref().map(|t| t.as_str()),
            "listing articles"
        );

        let summaries = self.read_repo.list_summaries(&listing).await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }

    /// Checks run in a fixed order and the first failure wins: sort column,
    /// then direction, then topic.
    pub(super) async fn validate_listing(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListing> {
        let sort_by = match query.sort_by.as_deref() {
            None => ArticleSortKey::default(),
            Some(raw) => ArticleSortKey::parse(raw)
                .ok_or_else(|| ApplicationError::invalid_query("invalid sort query"))?,
        };

        let order = match query.order.as_deref() {
            None => SortOrder::default(),
            Some(raw) => SortOrder::parse(raw)
                .ok_or_else(|| ApplicationError::invalid_query("invalid order query"))?,
        };

        let listing = ArticleListing::new(sort_by, order);
        match query.topic {
            None => Ok(listing),
            Some(raw) => {
                let slug =
                    TopicSlug::new(raw).map_err(|_| ApplicationError::invalid_query("invalid topic"))?;
                if !self.topic_repo.exists(&slug).await? {
                    return Err(ApplicationError::invalid_query("invalid topic"));
                }
                Ok(listing.with_topic(slug))
            }
        }
    }
}
