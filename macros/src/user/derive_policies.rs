use proc_macro2::TokenStream as TokenStream2;
use syn::{punctuated::Punctuated, DeriveInput, Token};

use crate::common::{PolicyAssign, PolicyModel};

/// #[derive(Policies)] reads every `#[policies(...)]` attribute on the item
/// and implements `PolicyProbe` for it.
pub fn expand_derive_policies(input: DeriveInput) -> syn::Result<TokenStream2> {
    let mut model = PolicyModel::new();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("policies")) {
        let members =
            attr.parse_args_with(Punctuated::<PolicyAssign, Token![,]>::parse_terminated)?;
        for member in members {
            model.insert(member.name, member.ty)?;
        }
    }

    Ok(model.expand_probe_impl(&input.ident, &input.generics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_attributes_are_merged() {
        let input: DeriveInput = parse_quote! {
            #[policies(Storage = External)]
            #[policies(Context = &'static str)]
            struct Split;
        };
        let tokens = expand_derive_policies(input).unwrap().to_string();
        assert!(tokens.contains("type DeclaredStorage = External"));
        assert!(tokens.contains("type DeclaredContext = & 'static str"));
    }

    #[test]
    fn test_no_attribute_declares_nothing() {
        let input: DeriveInput = parse_quote!(struct Plain;);
        let tokens = expand_derive_policies(input).unwrap().to_string();
        assert!(!tokens.contains("Present"));
    }

    #[test]
    fn test_duplicate_across_attributes() {
        let input: DeriveInput = parse_quote! {
            #[policies(OnChanged = A)]
            #[policies(OnChanged = B)]
            struct Twice;
        };
        assert!(expand_derive_policies(input).is_err());
    }

    #[test]
    fn test_generics_are_forwarded() {
        let input: DeriveInput = parse_quote! {
            #[policies(Context = T)]
            struct Tagged<T: Default>(core::marker::PhantomData<T>);
        };
        let tokens = expand_derive_policies(input).unwrap().to_string();
        assert!(
            tokens.contains("impl < T : Default > :: tola_accessor :: PolicyProbe for Tagged < T >")
        );
    }
}
