use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPayload {
    pub username: String,
    pub password: String,
}
