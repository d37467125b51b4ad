//! Profile changes for `PATCH /api/auth/user/updateUserProfile/:email`.

use serde::Serialize;

use crate::error::{GavelError, Result};

/// Fields a user may change on their own profile. Unset fields are left
/// untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_phone_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone_no.is_none()
            && self.alternative_phone_no.is_none()
            && self.gender.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.pin_code.is_none()
    }

    /// Reject empty updates and malformed phone or pin code values.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(GavelError::InvalidInput(
                "no profile fields given; pass at least one of --name, --phone, ...".to_string(),
            ));
        }
        for (label, value) in [
            ("phone", &self.phone_no),
            ("alternative phone", &self.alternative_phone_no),
            ("pin code", &self.pin_code),
        ] {
            if let Some(value) = value
                && !value
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '))
            {
                return Err(GavelError::InvalidInput(format!(
                    "{label} '{value}' may only contain digits, spaces, '+' and '-'"
                )));
            }
        }
        Ok(())
    }
}
