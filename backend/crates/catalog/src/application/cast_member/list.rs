//! List Cast Members Use Case

use std::sync::Arc;

use kernel::pagination::Pagination;

use crate::application::config::CatalogConfig;
use crate::application::query::{ListInput, build_query};
use crate::domain::CastMemberRepository;
use crate::error::CatalogResult;

use super::CastMemberOutput;

pub const CAST_MEMBER_SORTABLE_FIELDS: &[&str] = &["name", "createdAt"];

pub struct ListCastMembersUseCase<R>
where
    R: CastMemberRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> ListCastMembersUseCase<R>
where
    R: CastMemberRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListInput) -> CatalogResult<Pagination<CastMemberOutput>> {
        let query = build_query(&self.config, input, "name", CAST_MEMBER_SORTABLE_FIELDS)?;
        let page = self.repo.find_all(&query).await?;
        Ok(page.map(CastMemberOutput::from))
    }
}
