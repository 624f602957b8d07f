// Common utilities shared between the user-facing macros
//
// This module contains:
// - policy_model: member parsing, validation and PolicyProbe generation

pub mod policy_model;

pub use policy_model::*;
