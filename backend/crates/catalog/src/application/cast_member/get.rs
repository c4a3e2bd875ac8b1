//! Get Cast Member Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{CastMemberRepository, value_object::CastMemberId};
use crate::error::{CatalogError, CatalogResult};

use super::{AGGREGATE, CastMemberOutput};

pub struct GetCastMemberByIdUseCase<R>
where
    R: CastMemberRepository,
{
    repo: Arc<R>,
}

impl<R> GetCastMemberByIdUseCase<R>
where
    R: CastMemberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<CastMemberOutput> {
        let id: CastMemberId = parse_id(AGGREGATE, id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .map(CastMemberOutput::from)
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))
    }
}
