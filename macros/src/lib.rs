//! Procedural macros for tola-accessor policy descriptions
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Policies)]` | struct/enum | Declare points with `#[policies(...)]` |
//! | `policies!{}` | - | Define unit policy structs in block syntax |
//!
//! Both emit a `PolicyProbe` impl answering, for each of `Storage`,
//! `OnChanging`, `OnChanged` and `Context`, whether it is declared and as
//! which type.
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Policies)]
//! #[policies(Storage = External, OnChanged = Callback<i32>)]
//! struct Watched;
//!
//! policies! {
//!     pub struct Logged {
//!         type OnChanging = CallbackList<String, &'static str>;
//!         type Context = &'static str;
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-Facing Macros (user/)
// =============================================================================

/// Derive a policy description.
///
/// Members go in one or more `#[policies(...)]` attributes as
/// `Point = Type`. Undeclared points keep their defaults; unknown or
/// repeated points are compile errors.
///
/// # Usage
/// ```ignore
/// #[derive(Policies)]
/// #[policies(OnChanging = Callback<i32, Sender>, Context = Sender)]
/// struct Announced;
/// ```
#[proc_macro_derive(Policies, attributes(policies))]
pub fn derive_policies(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_policies(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Define policy descriptions with block syntax.
///
/// Every `struct Name { type Point = Type; }` becomes a unit struct deriving
/// `Debug`, `Clone`, `Copy` and `Default`, plus its `PolicyProbe` impl.
/// Attributes and visibility are kept.
///
/// # Usage
/// ```ignore
/// policies! {
///     pub struct Outside {
///         type Storage = External;
///     }
/// }
/// ```
#[proc_macro]
pub fn policies(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::PoliciesBlock);
    user::expand_policies_block(input).into()
}
