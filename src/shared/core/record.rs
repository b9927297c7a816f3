// The record abstraction shared by every CRUD resource.
//
// Responsibilities
// - Name the resource so routes and messages can be derived from the type.
// - Expose the numeric id used by update and delete, and the lookup key used by reads.
// - Define full replacement and partial update for the concrete shape.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Body accepted by a partial update.
    type Patch: RecordPatch + DeserializeOwned + Send + 'static;

    /// URL segment, e.g. `customers`.
    const RESOURCE: &'static str;

    /// Singular noun used in response messages, e.g. `Customer`.
    const NOUN: &'static str;

    fn id(&self) -> i64;

    /// Lookup used by `GET /<resource>/{key}`. String keys compare case-insensitively.
    fn matches_key(&self, key: &str) -> bool;

    /// Overwrites every attribute with the one in `other`, including cleared ones.
    fn replace_with(&mut self, other: Self);

    /// Overwrites only the attributes present in `patch`.
    fn apply_patch(&mut self, patch: Self::Patch);
}

pub trait RecordPatch {
    fn id(&self) -> i64;
}

/// Case-insensitive comparison of a stored key against a requested one.
pub fn key_eq(stored: Option<&str>, requested: &str) -> bool {
    stored.is_some_and(|s| s.to_lowercase() == requested.to_lowercase())
}
