//! Fixed demo user table. Passwords are plaintext and no session is issued.

use serde::Serialize;
use tracing::warn;

use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    #[serde(skip)]
    pub password: String,
    pub display_name: String,
}

impl User {
    fn new(username: &str, password: &str, display_name: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    pub fn demo() -> Self {
        Self {
            users: vec![
                User::new("admin", "admin123", "Administrator"),
                User::new("etudiant", "etu123", "Test Student"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<&User, AuthError> {
        match self.find(username) {
            Some(user) if user.password == password => Ok(user),
            _ => {
                warn!(username, "Rejected login");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_table_has_two_users() {
        let table = UserTable::demo();
        assert_eq!(table.len(), 2);
        assert_eq!(table.find("admin").unwrap().display_name, "Administrator");
    }

    #[test]
    fn test_authenticate() {
        let table = UserTable::demo();
        assert_eq!(
            table.authenticate("etudiant", "etu123").unwrap().display_name,
            "Test Student"
        );
        assert_eq!(
            table.authenticate("admin", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            table.authenticate("nobody", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(table.authenticate("", "").is_err());
    }
}
