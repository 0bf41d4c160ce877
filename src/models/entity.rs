use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppResult;

/// A flat record exchanged between clients and the store.
///
/// The request pipeline is written once against this trait and instantiated
/// per resource.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Lowercase resource name, used as the route segment and in log fields.
    const RESOURCE: &'static str;

    /// Capitalized name used in client-facing messages.
    const LABEL: &'static str;

    /// Message returned when a lookup key is blank.
    const EMPTY_KEY_MESSAGE: &'static str;

    /// The value this entity is looked up by.
    fn key(&self) -> &str;

    /// Checks field constraints, returning the first violated rule.
    fn validate(&self) -> AppResult<()>;
}
