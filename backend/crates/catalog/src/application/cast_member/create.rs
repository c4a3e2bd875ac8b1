//! Create Cast Member Use Case

use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::domain::{
    CastMember, CastMemberRepository,
    value_object::{CastMemberId, cast_member_type::CastMemberType},
};
use crate::error::{CatalogError, CatalogResult, Step};

pub struct CreateCastMemberInput {
    pub name: String,
    pub member_type: Option<CastMemberType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCastMemberOutput {
    pub id: CastMemberId,
}

pub struct CreateCastMemberUseCase<R>
where
    R: CastMemberRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCastMemberUseCase<R>
where
    R: CastMemberRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: CreateCastMemberInput,
    ) -> CatalogResult<CreateCastMemberOutput> {
        let mut notification = Notification::create();
        let member = notification.validate(|| -> Step<CastMember> {
            Ok(CastMember::new_member(input.name, input.member_type)?)
        })?;

        let member = match member {
            Some(member) if !notification.has_error() => member,
            _ => {
                return Err(CatalogError::validation(
                    "Could not create Aggregate CastMember",
                    notification,
                ));
            }
        };

        self.repo.create(&member).await?;

        tracing::info!(cast_member_id = %member.id, name = %member.name, "Cast member created");

        Ok(CreateCastMemberOutput { id: member.id })
    }
}
