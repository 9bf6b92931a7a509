pub mod prank;
pub mod roles;
