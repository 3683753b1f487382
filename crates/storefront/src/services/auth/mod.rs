//! Authentication service.
//!
//! Mock email/password authentication over the in-memory registry.
//! Passwords are argon2-hashed even though the registry is a mock, so the
//! plaintext never sits in memory longer than the request that carried it.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Serialize;

use organi_live_core::Email;

use crate::models::user::{NewUser, Profile, ProfileUpdate, PublicUser};
use crate::users::{RegistryError, UserRegistry};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Password strength score shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    /// 0-5: one point each for length, uppercase, lowercase, digit,
    /// special character.
    pub score: u8,
}

impl PasswordStrength {
    /// Display label for the strength meter.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.score {
            0 | 1 => "Débil",
            2 | 3 => "Media",
            _ => "Fuerte",
        }
    }
}

/// Score a password for the strength meter.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.len() >= MIN_PASSWORD_LENGTH,
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)),
    ];
    PasswordStrength {
        score: checks.iter().filter(|&&passed| passed).count() as u8,
    }
}

/// Authentication service over the mock registry.
///
/// Handles registration, login, session state, and profile updates.
pub struct AuthService<'a> {
    registry: &'a mut UserRegistry,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(registry: &'a mut UserRegistry) -> Self {
        Self { registry }
    }

    /// Register a new account.
    ///
    /// Registration does not log the user in; the original flow sends
    /// them to the login page.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid,
    /// `AuthError::WeakPassword` if the password doesn't meet requirements,
    /// and `AuthError::DuplicateEmail` if the email is already registered.
    pub fn register(&mut self, new_user: NewUser) -> Result<PublicUser, AuthError> {
        let email = Email::parse(&new_user.email)?;
        validate_password(&new_user.password)?;

        let password_hash = hash_password(&new_user.password)?;
        let profile = Profile {
            first_name: new_user.first_name.trim().to_owned(),
            last_name: new_user.last_name.trim().to_owned(),
            phone: new_user.phone.filter(|p| !p.trim().is_empty()),
            ..Profile::default()
        };

        let account = self
            .registry
            .insert(email, password_hash, profile)
            .map_err(|e| match e {
                RegistryError::DuplicateEmail => AuthError::DuplicateEmail,
            })?;

        Ok(PublicUser::from(account))
    }

    /// Login with email and password, starting a session on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email, a
    /// malformed email, or a wrong password.
    pub fn login(&mut self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        // a malformed email can't match an account, so it's the same failure
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .registry
            .find_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;

        let id = account.id;
        let user = PublicUser::from(account);
        self.registry.set_current(Some(id));
        Ok(user)
    }

    /// Clear the current session. Always succeeds, session or not.
    pub fn logout(&mut self) {
        self.registry.set_current(None);
    }

    /// The currently logged-in user, if any.
    #[must_use]
    pub fn current(&self) -> Option<PublicUser> {
        self.registry.current().map(PublicUser::from)
    }

    /// Merge profile fields into the current account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without an active session.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<PublicUser, AuthError> {
        let id = self
            .registry
            .current_id()
            .ok_or(AuthError::NotAuthenticated)?;
        let account = self
            .registry
            .get_mut(id)
            .ok_or(AuthError::NotAuthenticated)?;

        account.profile.apply(update);
        Ok(PublicUser::from(&*account))
    }

    /// Change the current account's password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a session,
    /// `AuthError::InvalidCredentials` if the current password is wrong,
    /// and `AuthError::WeakPassword` if the new one doesn't qualify.
    pub fn change_password(&mut self, current: &str, new: &str) -> Result<(), AuthError> {
        let id = self
            .registry
            .current_id()
            .ok_or(AuthError::NotAuthenticated)?;

        let account = self.registry.get(id).ok_or(AuthError::NotAuthenticated)?;
        verify_password(current, &account.password_hash)?;
        validate_password(new)?;

        let password_hash = hash_password(new)?;
        if let Some(account) = self.registry.get_mut(id) {
            account.password_hash = password_hash;
        }
        Ok(())
    }
}

/// Check password requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "La contraseña debe tener al menos {MIN_PASSWORD_LENGTH} caracteres"
        )));
    }
    Ok(())
}

/// Hash a password with argon2 and a fresh salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hash(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
