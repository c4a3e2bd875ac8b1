//! Update Cast Member Use Case

use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::application::parse_id;
use crate::domain::{
    CastMemberRepository,
    value_object::{CastMemberId, cast_member_type::CastMemberType},
};
use crate::error::{CatalogError, CatalogResult, Step};

use super::AGGREGATE;

pub struct UpdateCastMemberInput {
    pub id: String,
    pub name: String,
    pub member_type: Option<CastMemberType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCastMemberOutput {
    pub id: CastMemberId,
}

pub struct UpdateCastMemberUseCase<R>
where
    R: CastMemberRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCastMemberUseCase<R>
where
    R: CastMemberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: UpdateCastMemberInput,
    ) -> CatalogResult<UpdateCastMemberOutput> {
        let id: CastMemberId = parse_id(AGGREGATE, &input.id)?;
        let mut member = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))?;

        let mut notification = Notification::create();
        notification.validate(|| -> Step<()> {
            member.update(input.name, input.member_type)?;
            Ok(())
        })?;

        if notification.has_error() {
            return Err(CatalogError::validation(
                format!("Could not update Aggregate CastMember {id}"),
                notification,
            ));
        }

        self.repo.update(&member).await?;

        tracing::info!(cast_member_id = %id, "Cast member updated");

        Ok(UpdateCastMemberOutput { id })
    }
}
