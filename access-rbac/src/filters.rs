//! Ready-made filters for [`resolve_with`](crate::resolve_with)
//!
//! A filter takes the full resolved permission list and returns the list the
//! caller actually wants. Any `FnOnce(Vec<String>) -> Vec<String>` works;
//! this module carries the common case.

use std::collections::HashSet;

/// Drop duplicate permission identifiers, keeping the first occurrence of
/// each and otherwise preserving order.
///
/// # Example
///
/// ```
/// use access_rbac::filters::dedup;
///
/// let perms = vec!["read".to_string(), "write".to_string(), "read".to_string()];
/// assert_eq!(dedup(perms), ["read", "write"]);
/// ```
pub fn dedup(mut permissions: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    permissions.retain(|perm| seen.insert(perm.clone()));
    permissions
}
