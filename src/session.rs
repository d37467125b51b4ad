//! Authenticated session passed explicitly to the client and the views.

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{GavelError, Result};

/// Dashboard role. Selects which resources are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Seller,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Seller => write!(f, "seller"),
        }
    }
}

impl FromStr for Role {
    type Err = GavelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "seller" => Ok(Role::Seller),
            other => Err(GavelError::InvalidInput(format!(
                "unknown role '{other}', expected admin or seller"
            ))),
        }
    }
}

/// Credentials and identity of the current user.
#[derive(Clone, Default)]
pub struct Session {
    token: Option<SecretString>,
    email: Option<String>,
    role: Role,
}

impl Session {
    pub fn new(token: Option<String>, email: Option<String>, role: Role) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(SecretString::from),
            email: email.filter(|e| !e.is_empty()),
            role,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// `Authorization` header value, if a token is present.
    pub(crate) fn bearer(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|t| format!("Bearer {}", t.expose_secret()))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}
