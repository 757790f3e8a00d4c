//! Role domain model
//!
//! A role is a named bundle of permission identifiers. Roles carry no
//! hierarchy or implication rules; they are plain grant lists looked up by
//! key.

use serde::{Deserialize, Serialize};

/// A named bundle of permission identifiers.
///
/// The `key` identifies the role when resolving a user's role assignments.
/// The permission list is optional: a role loaded from storage may omit it,
/// and an absent list behaves exactly like an empty one.
///
/// # Examples
///
/// ```
/// use access_model::Role;
///
/// let role = Role::new("editor").with_permissions(["post:edit", "post:publish"]);
/// assert_eq!(role.key, "editor");
/// assert_eq!(role.permission_keys(), ["post:edit", "post:publish"]);
///
/// let bare = Role::new("guest");
/// assert!(bare.permission_keys().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// The role identifier.
    pub key: String,

    /// Permissions granted by this role, in stored order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Role {
    /// Create a role with the given key and no permissions.
    ///
    /// # Arguments
    ///
    /// * `key` - The role identifier
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            permissions: None,
        }
    }

    /// Set the permissions granted by this role.
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

    /// Permissions granted by this role.
    ///
    /// # Returns
    ///
    /// The identifiers in stored order, or an empty slice when the field is
    /// absent.
    pub fn permission_keys(&self) -> &[String] {
        self.permissions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_builder() {
        let role = Role::new("auditor").with_permissions(["audit:read"]);
        assert_eq!(role.key, "auditor");
        assert_eq!(role.permission_keys(), ["audit:read"]);
    }

    #[test]
    fn test_absent_permissions_read_as_empty() {
        let role = Role::new("guest");
        assert_eq!(role.permissions, None);
        assert!(role.permission_keys().is_empty());
    }

    #[test]
    fn test_deserialize_role_without_permissions() {
        let role: Role = serde_json::from_str(r#"{"key": "guest"}"#).unwrap();
        assert_eq!(role.key, "guest");
        assert!(role.permission_keys().is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let role = Role::new("editor").with_permissions(["post:edit"]);
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, r#"{"key":"editor","permissions":["post:edit"]}"#);
        assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
    }
}
