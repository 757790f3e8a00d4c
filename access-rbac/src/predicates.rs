//! Authorization predicates
//!
//! Boolean queries over a user's resolved permissions. Each predicate
//! resolves with no filter and treats the resolved list as a set, so
//! duplicate grants never change an answer.

use std::collections::HashSet;

use access_model::{RoleCatalog, User};

use crate::resolve::resolve;

/// Check if a user holds a single permission.
///
/// # Arguments
///
/// * `user` - The user to check
/// * `permission_key` - The permission identifier to look for
/// * `catalog` - All roles known to the application
///
/// # Returns
///
/// `true` iff the key appears at least once in the user's resolved
/// permissions.
///
/// # Example
///
/// ```
/// use access_rbac::{has_permission, Role, RoleCatalog, User};
///
/// let catalog: RoleCatalog =
///     vec![Role::new("admin").with_permissions(["read", "write"])].into();
/// let user = User::new().with_roles(["admin"]);
///
/// assert!(has_permission(&user, "write", &catalog));
/// assert!(!has_permission(&user, "delete", &catalog));
/// ```
pub fn has_permission(user: &User, permission_key: &str, catalog: &RoleCatalog) -> bool {
    resolve(user, catalog)
        .iter()
        .any(|granted| granted == permission_key)
}

/// Check if a user holds every queried permission.
///
/// # Arguments
///
/// * `user` - The user to check
/// * `permission_keys` - The permission identifiers that must all be held
/// * `catalog` - All roles known to the application
///
/// # Returns
///
/// `true` iff every queried key appears in the user's resolved permissions.
/// Vacuously `true` when the query is empty.
///
/// # Example
///
/// ```
/// use access_rbac::{has_all, Role, RoleCatalog, User};
///
/// let catalog: RoleCatalog =
///     vec![Role::new("admin").with_permissions(["read", "write", "delete"])].into();
/// let user = User::new().with_roles(["admin"]);
///
/// assert!(has_all(&user, &["read", "delete"], &catalog));
/// assert!(!has_all(&user, &["read", "execute"], &catalog));
/// assert!(has_all(&user, &[] as &[&str], &catalog));
/// ```
pub fn has_all<S: AsRef<str>>(user: &User, permission_keys: &[S], catalog: &RoleCatalog) -> bool {
    let resolved = resolve(user, catalog);
    let granted: HashSet<&str> = resolved.iter().map(String::as_str).collect();

    permission_keys
        .iter()
        .all(|key| granted.contains(key.as_ref()))
}

/// Check if a user holds at least one of the queried permissions.
///
/// # Arguments
///
/// * `user` - The user to check
/// * `permission_keys` - The permission identifiers, any of which suffices
/// * `catalog` - All roles known to the application
///
/// # Returns
///
/// `true` iff at least one queried key appears in the user's resolved
/// permissions. `false` when the query is empty.
///
/// # Example
///
/// ```
/// use access_rbac::{has_any, Role, RoleCatalog, User};
///
/// let catalog: RoleCatalog =
///     vec![Role::new("admin").with_permissions(["read", "delete"])].into();
/// let user = User::new().with_roles(["admin"]);
///
/// assert!(has_any(&user, &["execute", "delete"], &catalog));
/// assert!(!has_any(&user, &["execute", "import"], &catalog));
/// assert!(!has_any(&user, &[] as &[&str], &catalog));
/// ```
pub fn has_any<S: AsRef<str>>(user: &User, permission_keys: &[S], catalog: &RoleCatalog) -> bool {
    let resolved = resolve(user, catalog);
    let granted: HashSet<&str> = resolved.iter().map(String::as_str).collect();

    permission_keys
        .iter()
        .any(|key| granted.contains(key.as_ref()))
}
