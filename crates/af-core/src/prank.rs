//! Prank message generation.
//!
//! Dispatch is a single `match` on [`Role`]. Employee and Other messages
//! interpolate the target's name; Developer and Manager messages are
//! constant.

use crate::role::Role;
use crate::target::Target;

/// A generated prank message.
pub type PrankMessage = String;

/// Generate the prank message for a target.
pub fn generate_prank(target: &Target) -> PrankMessage {
    target.prank()
}

/// Generate a prank from a name and a free-text role label.
///
/// Labels other than `employee`, `developer` and `manager` get the default
/// message.
pub fn generate_prank_for(name: &str, role: &str) -> PrankMessage {
    Role::from_label(role).prank(name)
}
