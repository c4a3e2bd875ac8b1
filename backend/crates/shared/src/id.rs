//! Catalog ID Types
//!
//! Type-safe UUID wrappers for the catalog aggregates.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type CategoryId = Id<markers::Category>;
///
/// let id = CategoryId::new();
/// assert_eq!(CategoryId::parse_str(&id.to_string()).unwrap(), id);
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse a raw identifier (hyphenated or simple UUID form)
    pub fn parse_str(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw.trim()).map(Self::from_uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Serialized as the hyphenated UUID string
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.value)
    }
}

/// Marker types for the catalog aggregates
pub mod markers {
    /// Marker for Category IDs
    pub struct Category;

    /// Marker for CastMember IDs
    pub struct CastMember;

    /// Marker for Genre IDs
    pub struct Genre;

    /// Marker for Video IDs
    pub struct Video;
}

/// Type aliases for the catalog IDs
pub type CategoryId = Id<markers::Category>;
pub type CastMemberId = Id<markers::CastMember>;
pub type GenreId = Id<markers::Genre>;
pub type VideoId = Id<markers::Video>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_id_type_safety() {
        let category_id: CategoryId = Id::new();
        let genre_id: GenreId = Id::new();

        // These are different types, cannot be mixed
        let _c: Uuid = category_id.into_uuid();
        let _g: Uuid = genre_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: VideoId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_parse_round_trips_display() {
        let id = CastMemberId::new();
        let parsed: CastMemberId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id = CategoryId::new();
        let parsed = CategoryId::parse_str(&format!("  {id} ")).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CategoryId::parse_str("not-a-uuid").is_err());
        assert!(CategoryId::parse_str("").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let id = VideoId::from_uuid(Uuid::from_u128(1));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
    }

    #[test]
    fn test_ordered_set_is_deterministic() {
        let a = GenreId::from_uuid(Uuid::from_u128(2));
        let b = GenreId::from_uuid(Uuid::from_u128(1));
        let set: BTreeSet<GenreId> = [a, b, a].into_iter().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![b, a]);
    }
}
