//! In-memory user registry.
//!
//! A mock stand-in for a backend identity service: accounts and the
//! current session live in process memory and vanish on restart. Nothing
//! here is a security guarantee; a real rewrite replaces this module with
//! an external identity collaborator.

use thiserror::Error;

use organi_live_core::{Email, UserId};

use crate::models::user::{Profile, UserAccount};

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The (case-insensitive) email is already registered.
    #[error("an account with this email already exists")]
    DuplicateEmail,
}

/// The mock account registry plus the current session.
#[derive(Debug, Default)]
pub struct UserRegistry {
    accounts: Vec<UserAccount>,
    current: Option<UserId>,
    next_id: i64,
}

impl UserRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accounts: Vec::new(),
            current: None,
            next_id: 1,
        }
    }

    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateEmail` if the normalized email is
    /// already registered; the registry is left unchanged.
    pub fn insert(
        &mut self,
        email: Email,
        password_hash: String,
        profile: Profile,
    ) -> Result<&UserAccount, RegistryError> {
        if self.find_by_email(&email).is_some() {
            return Err(RegistryError::DuplicateEmail);
        }

        let id = UserId::new(self.next_id);
        self.next_id += 1;
        self.accounts.push(UserAccount {
            id,
            email,
            profile,
            password_hash,
        });
        // just pushed, so last() is the new account
        Ok(self.accounts.last().unwrap_or_else(|| unreachable!()))
    }

    /// Look up an account by email, case-insensitively.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<&UserAccount> {
        let key = email.normalized();
        self.accounts.iter().find(|a| a.email.normalized() == key)
    }

    /// Look up an account by ID.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&UserAccount> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: UserId) -> Option<&mut UserAccount> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// The account behind the active session, if any.
    #[must_use]
    pub fn current(&self) -> Option<&UserAccount> {
        self.current.and_then(|id| self.get(id))
    }

    pub(crate) const fn current_id(&self) -> Option<UserId> {
        self.current
    }

    pub(crate) const fn set_current(&mut self, id: Option<UserId>) {
        self.current = id;
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = UserRegistry::new();
        let id = registry
            .insert(email("ana@example.com"), "hash".to_owned(), Profile::default())
            .unwrap()
            .id;

        assert_eq!(registry.len(), 1);
        assert!(registry.get(id).is_some());
        assert!(registry.find_by_email(&email("ana@example.com")).is_some());
    }

    #[test]
    fn test_duplicate_email_is_rejected_case_insensitively() {
        let mut registry = UserRegistry::new();
        registry
            .insert(email("ana@example.com"), "hash".to_owned(), Profile::default())
            .unwrap();

        let result = registry.insert(
            email("Ana@Example.COM"),
            "hash2".to_owned(),
            Profile::default(),
        );
        assert_eq!(result.unwrap_err(), RegistryError::DuplicateEmail);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_current_session() {
        let mut registry = UserRegistry::new();
        let id = registry
            .insert(email("ana@example.com"), "hash".to_owned(), Profile::default())
            .unwrap()
            .id;

        assert!(registry.current().is_none());
        registry.set_current(Some(id));
        assert_eq!(registry.current().unwrap().id, id);
        registry.set_current(None);
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = UserRegistry::new();
        let a = registry
            .insert(email("a@example.com"), "h".to_owned(), Profile::default())
            .unwrap()
            .id;
        let b = registry
            .insert(email("b@example.com"), "h".to_owned(), Profile::default())
            .unwrap()
            .id;
        assert_ne!(a, b);
    }
}
