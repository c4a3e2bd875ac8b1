//! Delete Cast Member Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{CastMemberRepository, value_object::CastMemberId};
use crate::error::{CatalogError, CatalogResult};

use super::AGGREGATE;

pub struct DeleteCastMemberUseCase<R>
where
    R: CastMemberRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCastMemberUseCase<R>
where
    R: CastMemberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<()> {
        let id: CastMemberId = parse_id(AGGREGATE, id)?;
        if !self.repo.delete_by_id(&id).await? {
            return Err(CatalogError::not_found(AGGREGATE, id.to_string()));
        }

        tracing::info!(cast_member_id = %id, "Cast member deleted");

        Ok(())
    }
}
