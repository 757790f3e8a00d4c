//! # Access Model
//!
//! Domain records for role-based access control, shared by every crate that
//! resolves or checks permissions.
//!
//! ## Overview
//!
//! The access-model crate defines:
//! - **Users**: role assignments plus permissions granted directly
//! - **Roles**: named bundles of permission identifiers
//! - **Role catalogs**: the full set of roles known to the application
//!
//! Permission identifiers are opaque strings; this crate assigns them no
//! meaning beyond equality. Role and permission fields are optional on the
//! records, and every accessor reads an absent field as an empty list, so
//! partially populated data loaded from storage never needs normalizing
//! before use.
//!
//! ## Usage
//!
//! ```rust
//! use access_model::{Role, RoleCatalog, User};
//!
//! let catalog: RoleCatalog = vec![
//!     Role::new("editor").with_permissions(["post:edit", "post:publish"]),
//!     Role::new("viewer").with_permissions(["post:view"]),
//! ]
//! .into();
//!
//! let user = User::new()
//!     .with_roles(["editor"])
//!     .with_permissions(["billing:view"]);
//!
//! assert_eq!(user.role_keys(), ["editor"]);
//! assert_eq!(catalog.find("editor").unwrap().permission_keys().len(), 2);
//! ```
//!
//! ## Integration with access-rbac
//!
//! The `access-rbac` crate consumes these records to produce a user's
//! effective permission list and to answer authorization queries.

pub mod catalog;
pub mod role;
pub mod user;

// Re-export main types for convenience
pub use catalog::RoleCatalog;
pub use role::Role;
pub use user::User;
