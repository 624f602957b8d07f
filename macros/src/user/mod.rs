//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Policies)]` | on struct/enum | Policy description from `#[policies(...)]` |
//! | `policies!` | function macro | Declare policy descriptions as blocks |

mod derive_policies;
mod policies_block;

pub use derive_policies::expand_derive_policies;
pub use policies_block::{expand_policies_block, PoliciesBlock};
