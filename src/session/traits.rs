use crate::models::User;
use crate::session::provider::{AuthError, Credentials};
use anyhow::Result;
use async_trait::async_trait;

/// Durable string slots surviving restarts (browser local storage)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot; clearing a missing key is not an error
    fn clear(&self, key: &str) -> Result<()>;
}

/// Common trait for sign-in backends.
/// The marketplace only ships a mock, but the session does not care.
#[async_trait]
pub trait LoginProvider: Send + Sync {
    /// Exchange credentials for a freshly fabricated user record
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError>;

    fn provider_name(&self) -> &'static str;
}
