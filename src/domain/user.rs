//! The `User` entity evaluated by specifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

// ============================================================================
// UserType - Account category
// ============================================================================

/// Category of a user account.
///
/// Parses case-insensitively from `personal`, `admin`, `super-admin`,
/// `super_admin` or `SUPER ADMIN`; displays in the upper-case form used by
/// status lines.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum UserType {
    #[default]
    #[strum(to_string = "PERSONAL", serialize = "personal")]
    Personal,
    #[strum(to_string = "ADMIN", serialize = "admin")]
    Admin,
    #[strum(
        to_string = "SUPER ADMIN",
        serialize = "super-admin",
        serialize = "super_admin",
        serialize = "superadmin"
    )]
    SuperAdmin,
}

// ============================================================================
// User - Entity under evaluation
// ============================================================================

/// A user account. Immutable once built.
///
/// # Example
/// ```
/// use spec_gate::domain::{User, UserType};
///
/// let user = User::new(UserType::Admin, "Alex");
/// assert_eq!(user.to_string(), "Alex (Type:ADMIN Locked:false)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    kind: UserType,
    name: String,
    #[serde(default)]
    locked: bool,
}

impl User {
    /// Creates an unlocked user.
    pub fn new(kind: UserType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            locked: false,
        }
    }

    /// Returns a copy of this user with the locked flag set to `locked`.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn kind(&self) -> UserType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Type:{} Locked:{})",
            self.name, self.kind, self.locked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_display() {
        let user = User::new(UserType::SuperAdmin, "SuperAlex");
        assert_eq!(user.to_string(), "SuperAlex (Type:SUPER ADMIN Locked:false)");

        let locked = User::new(UserType::Personal, "BooFooLocked").with_locked(true);
        assert_eq!(
            locked.to_string(),
            "BooFooLocked (Type:PERSONAL Locked:true)"
        );
    }

    #[test]
    fn test_user_type_parse() {
        assert_eq!(UserType::from_str("admin").unwrap(), UserType::Admin);
        assert_eq!(UserType::from_str("ADMIN").unwrap(), UserType::Admin);
        assert_eq!(
            UserType::from_str("super-admin").unwrap(),
            UserType::SuperAdmin
        );
        assert_eq!(
            UserType::from_str("Super_Admin").unwrap(),
            UserType::SuperAdmin
        );
        assert_eq!(
            UserType::from_str("SUPER ADMIN").unwrap(),
            UserType::SuperAdmin
        );
        assert_eq!(UserType::from_str("Personal").unwrap(), UserType::Personal);
        assert!(UserType::from_str("root").is_err());
    }

    #[test]
    fn test_new_user_is_unlocked() {
        let user = User::new(UserType::Admin, "Alex");
        assert!(!user.is_locked());
        assert_eq!(user.kind(), UserType::Admin);
        assert_eq!(user.name(), "Alex");
    }

    #[test]
    fn test_user_serializes_to_json() {
        let user = User::new(UserType::SuperAdmin, "SuperAlex");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["kind"], "super_admin");
        assert_eq!(json["name"], "SuperAlex");
        assert_eq!(json["locked"], false);
    }
}
