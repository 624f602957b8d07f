//! `policies! { }` block syntax.
//!
//! ```ignore
//! policies! {
//!     /// Shared with the view layer.
//!     pub struct Bound {
//!         type Storage = External;
//!         type OnChanged = CallbackList<String, ViewId>;
//!         type Context = ViewId;
//!     }
//! }
//! ```
//!
//! Each definition expands to a unit struct plus its `PolicyProbe` impl.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    braced,
    parse::{Parse, ParseStream},
    Attribute, Generics, Ident, Token, Visibility,
};

use crate::common::{PolicyAssign, PolicyModel};

/// One `struct Name { type Point = Type; ... }` definition.
pub struct PolicyDefinition {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    model: PolicyModel,
}

impl Parse for PolicyDefinition {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;

        let content;
        braced!(content in input);

        let mut model = PolicyModel::new();
        while !content.is_empty() {
            content.parse::<Token![type]>()?;
            let member: PolicyAssign = content.parse()?;
            content.parse::<Token![;]>()?;
            model.insert(member.name, member.ty)?;
        }

        Ok(PolicyDefinition {
            attrs,
            vis,
            ident,
            model,
        })
    }
}

/// The whole block: zero or more definitions.
pub struct PoliciesBlock {
    definitions: Vec<PolicyDefinition>,
}

impl Parse for PoliciesBlock {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut definitions = Vec::new();
        while !input.is_empty() {
            definitions.push(input.parse()?);
        }
        Ok(PoliciesBlock { definitions })
    }
}

pub fn expand_policies_block(block: PoliciesBlock) -> TokenStream2 {
    let items = block.definitions.iter().map(|def| {
        let PolicyDefinition {
            attrs,
            vis,
            ident,
            model,
        } = def;
        let probe = model.expand_probe_impl(ident, &Generics::default());
        quote! {
            #(#attrs)*
            #[derive(Debug, Clone, Copy, Default)]
            #vis struct #ident;

            #probe
        }
    });

    quote! { #(#items)* }
}
