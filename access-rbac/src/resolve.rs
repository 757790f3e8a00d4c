//! Permission resolution
//!
//! Merges a user's role-derived and direct permissions into one flat list.

use access_model::{RoleCatalog, User};

/// Resolve the effective permissions for a user.
///
/// Walks the user's role keys in order and appends each matched role's
/// permissions, preserving each role's stored order, then appends the user's
/// direct permissions. The result is flat, order-preserving, and NOT
/// deduplicated: a permission granted by two roles appears twice.
///
/// Unknown role keys contribute nothing (this is not an error), and absent
/// `roles` / `permissions` fields read as empty, so malformed or partially
/// populated records resolve instead of failing. Identical inputs always
/// produce an identical sequence.
///
/// # Arguments
///
/// * `user` - The user to resolve permissions for
/// * `catalog` - All roles known to the application
///
/// # Returns
///
/// The user's effective permission identifiers, in resolution order.
///
/// # Example
///
/// ```
/// use access_rbac::{resolve, Role, RoleCatalog, User};
///
/// let catalog: RoleCatalog = vec![
///     Role::new("editor").with_permissions(["post:edit", "post:publish"]),
///     Role::new("viewer").with_permissions(["post:view"]),
/// ]
/// .into();
///
/// let user = User::new()
///     .with_roles(["editor", "viewer"])
///     .with_permissions(["billing:view"]);
///
/// assert_eq!(
///     resolve(&user, &catalog),
///     ["post:edit", "post:publish", "post:view", "billing:view"],
/// );
/// ```
pub fn resolve(user: &User, catalog: &RoleCatalog) -> Vec<String> {
    let mut resolved = Vec::new();

    for key in user.role_keys() {
        if let Some(role) = catalog.find(key) {
            resolved.extend_from_slice(role.permission_keys());
        }
    }

    resolved.extend_from_slice(user.direct_permissions());
    resolved
}

/// Resolve and post-process through a caller-supplied filter.
///
/// The filter receives the full resolved list and its output is returned
/// unmodified; it may narrow, reorder, or deduplicate as it sees fit. A
/// panicking filter propagates to the caller.
///
/// # Arguments
///
/// * `user` - The user to resolve permissions for
/// * `catalog` - All roles known to the application
/// * `filter` - Post-processing applied to the resolved list
///
/// # Example
///
/// ```
/// use access_rbac::{filters, resolve_with, Role, RoleCatalog, User};
///
/// let catalog: RoleCatalog = vec![
///     Role::new("writer").with_permissions(["post:view", "post:edit"]),
///     Role::new("reader").with_permissions(["post:view"]),
/// ]
/// .into();
///
/// let user = User::new().with_roles(["writer", "reader"]);
///
/// assert_eq!(
///     resolve_with(&user, &catalog, filters::dedup),
///     ["post:view", "post:edit"],
/// );
/// ```
pub fn resolve_with<F>(user: &User, catalog: &RoleCatalog, filter: F) -> Vec<String>
where
    F: FnOnce(Vec<String>) -> Vec<String>,
{
    filter(resolve(user, catalog))
}
