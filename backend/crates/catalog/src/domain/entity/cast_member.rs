//! Cast Member Entity

use chrono::{DateTime, Utc};
use kernel::validation::{DomainError, Notification, ValidationHandler};

use crate::domain::rules;
use crate::domain::value_object::{CastMemberId, cast_member_type::CastMemberType};

/// Actor or director who can be attached to videos
#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    pub id: CastMemberId,
    pub name: String,
    /// `None` only while an invalid member is being validated
    pub member_type: Option<CastMemberType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CastMember {
    pub const NAME_MIN_LENGTH: usize = 3;
    pub const NAME_MAX_LENGTH: usize = 255;

    /// Build and validate a new cast member
    ///
    /// # Errors
    /// Returns a [`DomainError`] carrying every violated rule.
    pub fn new_member(
        name: impl Into<String>,
        member_type: Option<CastMemberType>,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        let member = Self {
            id: CastMemberId::new(),
            name: name.into(),
            member_type,
            created_at: now,
            updated_at: now,
        };
        member.self_validate("Failed to create Aggregate CastMember")?;
        Ok(member)
    }

    /// Replace name and type, then validate
    ///
    /// The member is left untouched when validation fails.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        member_type: Option<CastMemberType>,
    ) -> Result<&mut Self, DomainError> {
        let mut candidate = self.clone();
        candidate.name = name.into();
        candidate.member_type = member_type;
        candidate.self_validate("Failed to update Aggregate CastMember")?;

        candidate.updated_at = Utc::now();
        *self = candidate;
        Ok(self)
    }

    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) {
        rules::required_text(
            handler,
            "name",
            &self.name,
            Self::NAME_MIN_LENGTH,
            Self::NAME_MAX_LENGTH,
        );
        rules::required(handler, "type", self.member_type.as_ref());
    }

    fn self_validate(&self, message: &str) -> Result<(), DomainError> {
        let mut notification = Notification::create();
        self.validate(&mut notification);
        notification.into_result(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = CastMember::new_member("Keanu Reeves", Some(CastMemberType::Actor)).unwrap();
        assert_eq!(member.name, "Keanu Reeves");
        assert_eq!(member.member_type, Some(CastMemberType::Actor));
    }

    #[test]
    fn test_new_member_collects_every_error() {
        let err = CastMember::new_member("", None).unwrap_err();
        let messages: Vec<&str> = err.errors().iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            vec!["'name' should not be empty", "'type' should not be null"]
        );
        assert_eq!(err.message(), "Failed to create Aggregate CastMember");
    }

    #[test]
    fn test_update() {
        let mut member = CastMember::new_member("Lana", Some(CastMemberType::Actor)).unwrap();
        let id = member.id;

        member
            .update("Lana Wachowski", Some(CastMemberType::Director))
            .unwrap();

        assert_eq!(member.id, id);
        assert_eq!(member.name, "Lana Wachowski");
        assert_eq!(member.member_type, Some(CastMemberType::Director));
        assert!(member.updated_at >= member.created_at);
    }

    #[test]
    fn test_invalid_update_leaves_member_untouched() {
        let mut member = CastMember::new_member("Lana", Some(CastMemberType::Actor)).unwrap();
        let before = member.clone();

        let err = member.update("La", None).unwrap_err();

        assert_eq!(err.errors().len(), 2);
        assert_eq!(member, before);
    }
}
