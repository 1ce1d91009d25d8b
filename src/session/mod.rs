pub mod provider;
pub mod storage;
pub mod traits;

pub use provider::{AuthError, Credentials, MockLoginProvider};
pub use storage::{FileStore, MemoryStore};
pub use traits::{KeyValueStore, LoginProvider};

use crate::models::User;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Storage slot holding the serialized user
pub const USER_KEY: &str = "makan_user";

/// Route shown after logging out
pub const LOGOUT_ROUTE: &str = "/";

fn write_user<S: KeyValueStore>(store: &S, user: &User) -> Result<()> {
    let json = serde_json::to_string(user).context("Failed to serialize user")?;
    store.set(USER_KEY, &json)
}

/// Outcome of pressing the save (heart) button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveToggle {
    Saved,
    Unsaved,
    /// Nobody is logged in; the login prompt was opened instead
    LoginRequired,
}

/// The one logged-in user plus login prompt state, backed by durable storage
pub struct Session<S: KeyValueStore> {
    store: S,
    user: Option<User>,
    login_prompt_open: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the session persisted in `store`. An unreadable record is
    /// discarded and the session starts logged out.
    pub fn load(store: S) -> Result<Self> {
        let user = match store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!("Restored session for {}", user.id);
                    Some(user)
                }
                Err(e) => {
                    warn!("Discarding unreadable session record: {}", e);
                    store.clear(USER_KEY)?;
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            store,
            user,
            login_prompt_open: false,
        })
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_login_prompt_open(&self) -> bool {
        self.login_prompt_open
    }

    pub fn open_login_prompt(&mut self) {
        self.login_prompt_open = true;
    }

    pub fn close_login_prompt(&mut self) {
        self.login_prompt_open = false;
    }

    pub fn is_saved(&self, property_id: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_saved(property_id))
    }

    /// Install `user` as the logged-in user and persist it.
    pub fn login(&mut self, mut user: User) -> Result<&User> {
        let mut seen = Vec::with_capacity(user.saved_property_ids.len());
        user.saved_property_ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });

        write_user(&self.store, &user)?;
        info!("Logged in as {} ({})", user.name, user.id);
        self.close_login_prompt();
        let user: &User = self.user.insert(user);
        Ok(user)
    }

    /// Authenticate through `provider`, then log the result in.
    pub async fn login_with<P: LoginProvider + ?Sized>(
        &mut self,
        provider: &P,
        credentials: &Credentials,
    ) -> Result<&User> {
        let user = provider.authenticate(credentials).await?;
        self.login(user)
    }

    /// Forget the user. Returns the route to navigate to.
    pub fn logout(&mut self) -> Result<&'static str> {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.id);
        }
        self.store.clear(USER_KEY)?;
        Ok(LOGOUT_ROUTE)
    }

    /// Flip `property_id` in the saved set. Logged-out sessions only get the
    /// login prompt.
    pub fn toggle_save(&mut self, property_id: &str) -> Result<SaveToggle> {
        let Some(user) = self.user.as_mut() else {
            debug!("Save of {} needs a login", property_id);
            self.open_login_prompt();
            return Ok(SaveToggle::LoginRequired);
        };

        let outcome = if user.has_saved(property_id) {
            user.saved_property_ids.retain(|id| id != property_id);
            SaveToggle::Unsaved
        } else {
            user.saved_property_ids.push(property_id.to_string());
            SaveToggle::Saved
        };

        write_user(&self.store, user)?;
        debug!("Property {} is now {:?}", property_id, outcome);
        Ok(outcome)
    }
}
