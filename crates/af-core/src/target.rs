use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The person a prank message is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    name: String,
    role: Role,
}

impl Target {
    /// Create a target from a name and a role.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Create a target from a free-text role label.
    ///
    /// Unrecognized labels become [`Role::Other`].
    pub fn with_label(name: impl Into<String>, role: &str) -> Self {
        Self::new(name, Role::from_label(role))
    }

    /// The target's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The target's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The prank message for this target.
    pub fn prank(&self) -> String {
        self.role.prank(&self.name)
    }
}
