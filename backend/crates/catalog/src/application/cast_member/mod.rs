//! Cast member use cases

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    CastMember,
    value_object::{CastMemberId, cast_member_type::CastMemberType},
};

pub use create::{CreateCastMemberInput, CreateCastMemberOutput, CreateCastMemberUseCase};
pub use delete::DeleteCastMemberUseCase;
pub use get::GetCastMemberByIdUseCase;
pub use list::{CAST_MEMBER_SORTABLE_FIELDS, ListCastMembersUseCase};
pub use update::{UpdateCastMemberInput, UpdateCastMemberOutput, UpdateCastMemberUseCase};

pub(crate) const AGGREGATE: &str = "CastMember";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMemberOutput {
    pub id: CastMemberId,
    pub name: String,
    #[serde(rename = "type")]
    pub member_type: Option<CastMemberType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CastMember> for CastMemberOutput {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            member_type: member.member_type,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}
