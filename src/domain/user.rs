/// User entity and email validation
/// 
/// Users are the only entity callers can create. Every user carries a
/// store-assigned id and an email that must look like `local@domain.tld`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Role, UserId};

/// Permissive `local@domain.tld` shape; deliberately not RFC 5322
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid email regex")
});

/// A member of the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,
    /// Full display name
    pub name: String,
    /// Contact address, unique across the directory
    pub email: String,
    /// Access level
    pub role: Role,
}

impl User {
    /// Create a new user with validation
    /// 
    /// Only the email shape is checked here. Uniqueness depends on the
    /// rest of the collection and is the store's concern.
    pub fn new(id: UserId, name: String, email: String, role: Role) -> Result<Self, DomainError> {
        validate_email(&email)?;
        
        Ok(Self {
            id,
            name,
            email,
            role,
        })
    }
}

/// Check that an email address has the `local@domain.tld` shape
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail(email.to_string()))
    }
}
