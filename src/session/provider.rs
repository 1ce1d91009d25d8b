use crate::models::User;
use crate::session::traits::LoginProvider;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Characters of the random suffix in fabricated user ids (base36)
const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const ID_SUFFIX_LEN: usize = 9;

/// How the user asked to sign in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Email { email: String, password: String },
    Google,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter your email and password.")]
    MissingCredentials,
}

/// Sign-in that always succeeds after a fixed artificial delay
#[derive(Debug, Clone)]
pub struct MockLoginProvider {
    delay: Duration,
}

impl MockLoginProvider {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockLoginProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

fn fabricated_id(prefix: &str) -> String {
    format!("{}_{}", prefix, nanoid::nanoid!(ID_SUFFIX_LEN, &ID_ALPHABET))
}

fn avatar_url(name: &str, background: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!(
        "https://ui-avatars.com/api/?name={}&background={}&color=fff",
        encoded, background
    )
}

#[async_trait]
impl LoginProvider for MockLoginProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        if let Credentials::Email { email, password } = credentials {
            if email.trim().is_empty() || password.is_empty() {
                return Err(AuthError::MissingCredentials);
            }
        }

        tokio::time::sleep(self.delay).await;

        let user = match credentials {
            Credentials::Email { email, .. } => {
                let email = email.trim();
                let name = email.split('@').next().unwrap_or(email).to_string();
                User {
                    id: fabricated_id("user"),
                    avatar: Some(avatar_url(&name, "0D8ABC")),
                    name,
                    email: Some(email.to_string()),
                    phone: None,
                    saved_property_ids: Vec::new(),
                }
            }
            Credentials::Google => User {
                id: fabricated_id("google"),
                name: "Google User".to_string(),
                email: Some("googleuser@gmail.com".to_string()),
                phone: None,
                avatar: Some(avatar_url("Google User", "DB4437")),
                saved_property_ids: Vec::new(),
            },
        };

        info!("Authenticated {} via {}", user.id, self.provider_name());
        Ok(user)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
