//! User domain types.
//!
//! Accounts live in an in-memory registry with no persistence; this is a
//! mock of a real identity service, not a security boundary. Password
//! hashes still never leave this module's types via serialization.

use serde::{Deserialize, Serialize};

use organi_live_core::{Email, UserId};

/// Profile fields attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// City of residence.
    pub city: Option<String>,
    /// Birth date as entered (`YYYY-MM-DD`).
    pub birth_date: Option<String>,
    /// Free-form bio shown on the profile page.
    pub bio: Option<String>,
}

impl Profile {
    /// Display name, e.g. "Ana María Rojas".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Merge the provided fields into this profile. Absent fields are
    /// left untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(city) = update.city {
            self.city = Some(city);
        }
        if let Some(birth_date) = update.birth_date {
            self.birth_date = Some(birth_date);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
    }
}

/// Partial profile update; only present fields are merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub birth_date: Option<String>,
    pub bio: Option<String>,
}

/// A registered account (registry-internal representation).
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// Unique account ID.
    pub id: UserId,
    /// Email address, unique (case-insensitive) within the registry.
    pub email: Email,
    /// Profile fields.
    pub profile: Profile,
    /// Argon2 password hash.
    pub(crate) password_hash: String,
}

/// Registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Account view safe to return to the client (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub email: Email,
    pub profile: Profile,
}

impl From<&UserAccount> for PublicUser {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            profile: account.profile.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let profile = Profile {
            first_name: "Ana".to_owned(),
            last_name: "Rojas".to_owned(),
            ..Profile::default()
        };
        assert_eq!(profile.full_name(), "Ana Rojas");
        assert_eq!(Profile::default().full_name(), "");
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut profile = Profile {
            first_name: "Ana".to_owned(),
            last_name: "Rojas".to_owned(),
            phone: Some("3001112233".to_owned()),
            ..Profile::default()
        };

        profile.apply(ProfileUpdate {
            city: Some("Medellín".to_owned()),
            phone: Some("3009998877".to_owned()),
            ..ProfileUpdate::default()
        });

        assert_eq!(profile.first_name, "Ana");
        assert_eq!(profile.city.as_deref(), Some("Medellín"));
        assert_eq!(profile.phone.as_deref(), Some("3009998877"));
    }
}
