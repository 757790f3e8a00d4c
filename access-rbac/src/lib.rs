//! # Access RBAC (Role-Based Access Control)
//!
//! This crate computes a user's effective permissions and answers boolean
//! authorization queries against them.
//!
//! ## Overview
//!
//! The access-rbac crate handles:
//! - **Resolution**: merging role-derived and user-direct permissions into
//!   one flat, order-preserving list
//! - **Predicates**: single-key, all-of, and any-of checks over the resolved
//!   list
//! - **Filters**: ready-made post-processing for the resolution output
//!
//! ## Architecture
//!
//! ```text
//! User { roles, permissions }          RoleCatalog
//!          │                                │
//!          └──────────► resolve ◄───────────┘
//!                          │
//!               flat permission list
//!                          │
//!        has_permission / has_all / has_any ──► bool
//! ```
//!
//! Every operation is a pure function over its arguments: no I/O, no shared
//! state, no caching. Malformed or partially populated input never fails —
//! absent fields read as empty lists and unknown role keys contribute
//! nothing, so the worst case is an empty resolution and a `false` answer.
//!
//! ## Usage
//!
//! ```rust
//! use access_rbac::{has_all, has_any, has_permission, resolve, Role, RoleCatalog, User};
//!
//! let catalog: RoleCatalog = vec![
//!     Role::new("admin").with_permissions(["read", "write", "delete"]),
//! ]
//! .into();
//!
//! let user = User::new().with_roles(["admin"]);
//!
//! assert_eq!(resolve(&user, &catalog), ["read", "write", "delete"]);
//! assert!(has_permission(&user, "write", &catalog));
//! assert!(has_all(&user, &["read", "delete"], &catalog));
//! assert!(!has_all(&user, &["read", "execute"], &catalog));
//! assert!(has_any(&user, &["execute", "delete"], &catalog));
//! ```
//!
//! ## Resolution order
//!
//! The resolved list is not deduplicated and not sorted. It contains the
//! permissions of each of the user's roles, in the order the roles appear on
//! the user and in each role's own stored order, followed by the user's
//! direct permissions. Callers that want a narrowed or deduplicated view pass
//! a filter to [`resolve_with`].
//!
//! ## Integration with access-model
//!
//! The [`User`], [`Role`], and [`RoleCatalog`] records come from the
//! `access-model` crate and are re-exported here for convenience.

pub mod filters;
pub mod predicates;
pub mod resolve;

// Re-export main entry points for convenience
pub use predicates::{has_all, has_any, has_permission};
pub use resolve::{resolve, resolve_with};

// Domain records from access-model
pub use access_model::{Role, RoleCatalog, User};
