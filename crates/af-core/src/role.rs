use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrankError;

/// The role of a prank target. Each role selects exactly one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular employee.
    Employee,
    /// A software developer.
    Developer,
    /// A manager.
    Manager,
    /// Anyone else, including unrecognized roles.
    Other,
}

impl Role {
    /// Parse one of the known role labels.
    ///
    /// Labels match exactly: `employee`, `developer`, `manager`, `other`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "employee" => Some(Self::Employee),
            "developer" => Some(Self::Developer),
            "manager" => Some(Self::Manager),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Resolve a free-text role, routing anything unrecognized to [`Role::Other`].
    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::Other)
    }

    /// All roles in declaration order.
    pub fn all() -> &'static [Self] {
        &[Self::Employee, Self::Developer, Self::Manager, Self::Other]
    }

    /// The lowercase label for this role.
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Developer => "developer",
            Self::Manager => "manager",
            Self::Other => "other",
        }
    }

    /// Whether this role's message mentions the target by name.
    pub fn personalizes(self) -> bool {
        matches!(self, Self::Employee | Self::Other)
    }

    /// The prank message for a target with this role and the given name.
    pub fn prank(self, name: &str) -> String {
        match self {
            Self::Employee => {
                format!("Congratulations {name}! You have been promoted to Chief Joke Officer!")
            }
            Self::Developer => {
                "[CRITICAL ALERT] A fatal error has been detected in your IDE! Error code: APR-001."
                    .to_string()
            }
            Self::Manager => {
                "URGENT: Surprise meeting with the CEO in 5 minutes. Prepare a presentation!"
                    .to_string()
            }
            Self::Other => format!("April Fools, {name}!"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = PrankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PrankError::UnknownRole(s.to_string()))
    }
}
