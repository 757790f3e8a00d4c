//! User domain model
//!
//! This module provides the user record as seen by the access-control layer:
//! the role keys assigned to the user and any permissions granted to the user
//! directly, outside of a role.

use serde::{Deserialize, Serialize};

/// A user's access-control profile.
///
/// Only the fields relevant to permission resolution are modeled here. Both
/// fields are optional: records loaded from storage may omit either, and an
/// absent field behaves exactly like an empty list. No uniqueness constraint
/// is enforced on either field.
///
/// # Examples
///
/// ```
/// use access_model::User;
///
/// let user = User::new()
///     .with_roles(["editor", "viewer"])
///     .with_permissions(["billing:view"]);
///
/// assert_eq!(user.role_keys(), ["editor", "viewer"]);
/// assert_eq!(user.direct_permissions(), ["billing:view"]);
///
/// // Absent fields read as empty.
/// let blank = User::default();
/// assert!(blank.role_keys().is_empty());
/// assert!(blank.direct_permissions().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Keys of the roles assigned to this user, in assignment order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Permissions granted directly to this user, beyond any role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl User {
    /// Create a user with no roles and no direct permissions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user's role keys.
    ///
    /// # Arguments
    ///
    /// * `roles` - Role keys, in assignment order
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Set the permissions granted directly to the user.
    ///
    /// # Arguments
    ///
    /// * `permissions` - Permission identifiers, in grant order
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    /// Role keys assigned to this user.
    ///
    /// # Returns
    ///
    /// The keys in assignment order, or an empty slice when the field is
    /// absent.
    pub fn role_keys(&self) -> &[String] {
        self.roles.as_deref().unwrap_or_default()
    }

    /// Permissions granted directly to this user.
    ///
    /// # Returns
    ///
    /// The identifiers in grant order, or an empty slice when the field is
    /// absent.
    pub fn direct_permissions(&self) -> &[String] {
        self.permissions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_builder() {
        let user = User::new()
            .with_roles(["admin"])
            .with_permissions(["audit:read", "audit:export"]);

        assert_eq!(user.role_keys(), ["admin"]);
        assert_eq!(user.direct_permissions(), ["audit:read", "audit:export"]);
    }

    #[test]
    fn test_absent_fields_read_as_empty() {
        let user = User::default();
        assert_eq!(user.roles, None);
        assert_eq!(user.permissions, None);
        assert!(user.role_keys().is_empty());
        assert!(user.direct_permissions().is_empty());
    }

    #[test]
    fn test_empty_and_absent_are_equivalent_at_accessors() {
        let absent = User::default();
        let empty = User::new().with_roles(Vec::<String>::new());

        assert_eq!(absent.role_keys(), empty.role_keys());
    }

    #[test]
    fn test_duplicate_entries_are_kept() {
        let user = User::new().with_roles(["viewer", "viewer"]);
        assert_eq!(user.role_keys(), ["viewer", "viewer"]);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let user: User = serde_json::from_str(r#"{"roles": ["editor"]}"#).unwrap();
        assert_eq!(user.role_keys(), ["editor"]);
        assert_eq!(user.permissions, None);
        assert!(user.direct_permissions().is_empty());

        let bare: User = serde_json::from_str("{}").unwrap();
        assert_eq!(bare, User::default());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&User::default()).unwrap();
        assert_eq!(json, "{}");

        let json = serde_json::to_string(&User::new().with_roles(["admin"])).unwrap();
        assert_eq!(json, r#"{"roles":["admin"]}"#);
    }
}
