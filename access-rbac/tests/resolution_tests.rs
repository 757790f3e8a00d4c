//! End-to-end tests for permission resolution and authorization checks.
//!
//! These tests deserialize users and role catalogs from the JSON shapes the
//! embedding application stores, then drive the full resolve-and-check path.
//!
//! Scenarios:
//! 1. admin role grants cover single, all-of, and any-of queries
//! 2. merge order: role grants in user-role order, direct grants last
//! 3. duplicate grants survive resolution but never change an answer
//! 4. dedup filter pass-through
//! 5. partially populated records degrade to empty instead of failing

use access_rbac::{filters, has_all, has_any, has_permission, resolve, resolve_with};
use access_rbac::{RoleCatalog, User};

/// Parse a user record from its stored JSON shape.
fn user(json: &str) -> User {
    serde_json::from_str(json).expect("user fixture should parse")
}

/// Parse a role catalog from its stored JSON shape (a bare role array).
fn catalog(json: &str) -> RoleCatalog {
    serde_json::from_str(json).expect("catalog fixture should parse")
}

#[test]
fn test_admin_scenario() {
    let user = user(r#"{"roles": ["admin"]}"#);
    let catalog = catalog(
        r#"[{"key": "admin", "permissions": ["read", "write", "delete"]}]"#,
    );

    assert!(has_permission(&user, "write", &catalog));
    assert!(has_all(&user, &["read", "delete"], &catalog));
    assert!(!has_all(&user, &["read", "execute"], &catalog));
    assert!(has_any(&user, &["execute", "delete"], &catalog));
}

#[test]
fn test_merge_order_roles_then_direct() {
    let user = user(r#"{"roles": ["editor", "viewer"], "permissions": ["p:direct"]}"#);
    let catalog = catalog(
        r#"[
            {"key": "editor", "permissions": ["p:edit", "p:publish"]},
            {"key": "viewer", "permissions": ["p:view"]}
        ]"#,
    );

    assert_eq!(
        resolve(&user, &catalog),
        ["p:edit", "p:publish", "p:view", "p:direct"],
    );
}

#[test]
fn test_duplicate_grants_resolve_twice_but_check_once() {
    let catalog = catalog(
        r#"[
            {"key": "support", "permissions": ["ticket:view", "ticket:reply"]},
            {"key": "qa", "permissions": ["ticket:view"]}
        ]"#,
    );
    let user = user(r#"{"roles": ["support", "qa"]}"#);

    let resolved = resolve(&user, &catalog);
    assert_eq!(
        resolved.iter().filter(|p| *p == "ticket:view").count(),
        2,
    );
    assert!(has_permission(&user, "ticket:view", &catalog));
}

#[test]
fn test_dedup_filter() {
    let catalog = catalog(
        r#"[
            {"key": "support", "permissions": ["ticket:view", "ticket:reply"]},
            {"key": "qa", "permissions": ["ticket:view"]}
        ]"#,
    );
    let user = user(r#"{"roles": ["support", "qa"]}"#);

    assert_eq!(
        resolve_with(&user, &catalog, filters::dedup),
        ["ticket:view", "ticket:reply"],
    );
}

#[test]
fn test_partially_populated_records_degrade_to_empty() {
    // User missing both fields, catalog role missing its permission list,
    // and a role assignment the catalog has never heard of.
    let bare = user("{}");
    let catalog = catalog(r#"[{"key": "guest"}]"#);

    assert!(resolve(&bare, &catalog).is_empty());
    assert!(!has_permission(&bare, "read", &catalog));

    let user = user(r#"{"roles": ["guest", "unknown"], "permissions": ["p:direct"]}"#);
    assert_eq!(resolve(&user, &catalog), ["p:direct"]);
    assert!(has_all(&user, &[] as &[&str], &catalog));
    assert!(!has_any(&user, &[] as &[&str], &catalog));
}
