//! Permission matrix - which mutating capabilities a role holds.

use serde::Serialize;

use crate::domain::Role;

/// The four capabilities a role may hold. Everything defaults to `false`;
/// roles outside the matrix (including unrecognized ones) are read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_view_all: bool,
}

/// Resolve the capability set for a role. Total and pure: never fails,
/// unrecognized roles (`None`) get the empty set.
pub fn capabilities(role: Option<Role>) -> Capabilities {
    match role {
        Some(Role::Admin) => Capabilities {
            can_create: true,
            can_edit: true,
            can_delete: true,
            can_view_all: true,
        },
        Some(Role::Hr) => Capabilities {
            can_create: true,
            can_edit: true,
            can_delete: false,
            can_view_all: true,
        },
        Some(Role::Lead) | Some(Role::Volunteer) | None => Capabilities::default(),
    }
}
