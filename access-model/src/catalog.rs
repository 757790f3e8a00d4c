//! Role catalog
//!
//! The full collection of roles known to the application, supplied fresh on
//! every query by the embedding application.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The set of roles available for lookup during permission resolution.
///
/// The catalog keeps its roles in insertion order and does not enforce key
/// uniqueness. Lookup uses first-match semantics: the first role whose key
/// equals the requested identifier wins, and later duplicates are never
/// consulted.
///
/// Serializes transparently as a bare role array, matching how catalogs are
/// stored.
///
/// # Examples
///
/// ```
/// use access_model::{Role, RoleCatalog};
///
/// let catalog: RoleCatalog = vec![
///     Role::new("editor").with_permissions(["post:edit"]),
///     Role::new("viewer").with_permissions(["post:view"]),
/// ]
/// .into();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.find("viewer").unwrap().permission_keys(), ["post:view"]);
/// assert!(catalog.find("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a role to the catalog.
    ///
    /// # Arguments
    ///
    /// * `role` - The role to append
    pub fn push(&mut self, role: Role) {
        self.roles.push(role);
    }

    /// Look up a role by key.
    ///
    /// # Arguments
    ///
    /// * `key` - The role identifier to look up
    ///
    /// # Returns
    ///
    /// The first role whose key matches, or `None`. With duplicate keys the
    /// first role in catalog order wins.
    pub fn find(&self, key: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.key == key)
    }

    /// All roles in the catalog, in insertion order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Iterate over the roles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Role> {
        self.roles.iter()
    }

    /// Get the number of roles in the catalog.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl From<Vec<Role>> for RoleCatalog {
    fn from(roles: Vec<Role>) -> Self {
        Self { roles }
    }
}

impl FromIterator<Role> for RoleCatalog {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RoleCatalog {
    type Item = &'a Role;
    type IntoIter = std::slice::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}
