use std::fmt;

use serde::{Deserialize, Serialize};

/// The acting user's organizational capacity. A closed set: the session
/// collaborator hands us an arbitrary string, and everything outside this
/// set is "unrecognized", modeled as `None` wherever a role flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Lead,
    Volunteer,
}

impl Role {
    /// Parse the external role string. Unrecognized values map to `None`,
    /// never an error - an unknown role is simply the most restricted viewer.
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "hr" => Some(Role::Hr),
            "lead" => Some(Role::Lead),
            "volunteer" => Some(Role::Volunteer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Lead => "lead",
            Role::Volunteer => "volunteer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_closed_set() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("HR"), Some(Role::Hr));
        assert_eq!(Role::parse(" lead "), Some(Role::Lead));
        assert_eq!(Role::parse("volunteer"), Some(Role::Volunteer));
    }

    #[test]
    fn parse_maps_anything_else_to_none() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("vol unteer"), None);
    }
}
