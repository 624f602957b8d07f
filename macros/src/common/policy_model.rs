//! Policy description model
//!
//! Both user-facing macros collect `Point = Type` members into a
//! [`PolicyModel`] and emit the same `PolicyProbe` impl from it.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Generics, Ident, Token, Type,
};

// =============================================================================
// Customization Points
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Point {
    Storage,
    OnChanging,
    OnChanged,
    Context,
}

impl Point {
    pub const ALL: [Point; 4] = [
        Point::Storage,
        Point::OnChanging,
        Point::OnChanged,
        Point::Context,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Point::Storage => "Storage",
            Point::OnChanging => "OnChanging",
            Point::OnChanged => "OnChanged",
            Point::Context => "Context",
        }
    }

    pub fn from_ident(ident: &Ident) -> Option<Point> {
        Point::ALL.into_iter().find(|point| ident == point.name())
    }

    fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// Member Parsing: `Point = Type`
// =============================================================================

/// A single member as written in `#[policies(...)]`.
pub struct PolicyAssign {
    pub name: Ident,
    pub ty: Type,
}

impl Parse for PolicyAssign {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let ty: Type = input.parse()?;
        Ok(PolicyAssign { name, ty })
    }
}

// =============================================================================
// Model
// =============================================================================

/// Declared members, one slot per point.
#[derive(Default)]
pub struct PolicyModel {
    members: [Option<(Ident, Type)>; 4],
}

impl PolicyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name = ty`, rejecting unknown and repeated names.
    pub fn insert(&mut self, name: Ident, ty: Type) -> syn::Result<()> {
        let Some(point) = Point::from_ident(&name) else {
            let expected: Vec<&str> = Point::ALL.iter().map(|p| p.name()).collect();
            return Err(syn::Error::new(
                name.span(),
                format!(
                    "unknown policy member `{}`, expected one of: {}",
                    name,
                    expected.join(", ")
                ),
            ));
        };

        let slot = &mut self.members[point.index()];
        if slot.is_some() {
            return Err(syn::Error::new(
                name.span(),
                format!("duplicate policy member `{}`", name),
            ));
        }
        *slot = Some((name, ty));
        Ok(())
    }

    pub fn declared(&self, point: Point) -> Option<&Type> {
        self.members[point.index()].as_ref().map(|(_, ty)| ty)
    }

    /// `impl PolicyProbe for #ident`.
    pub fn expand_probe_impl(&self, ident: &Ident, generics: &Generics) -> TokenStream2 {
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let answers = Point::ALL.iter().map(|&point| {
            let has = format_ident!("Has{}", point.name());
            let declared = format_ident!("Declared{}", point.name());
            match self.declared(point) {
                Some(ty) => quote! {
                    type #has = ::tola_accessor::Present;
                    type #declared = #ty;
                },
                None => quote! {
                    type #has = ::tola_accessor::Absent;
                    type #declared = ::tola_accessor::Undeclared;
                },
            }
        });

        quote! {
            impl #impl_generics ::tola_accessor::PolicyProbe for #ident #ty_generics #where_clause {
                #(#answers)*
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_point_lookup() {
        let ident: Ident = parse_quote!(OnChanged);
        assert_eq!(Point::from_ident(&ident), Some(Point::OnChanged));
        let ident: Ident = parse_quote!(OnSet);
        assert_eq!(Point::from_ident(&ident), None);
    }

    #[test]
    fn test_unknown_member_rejected() {
        let mut model = PolicyModel::new();
        let err = model
            .insert(parse_quote!(Storge), parse_quote!(External))
            .unwrap_err();
        assert!(err.to_string().contains("unknown policy member `Storge`"));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let mut model = PolicyModel::new();
        model.insert(parse_quote!(Context), parse_quote!(u8)).unwrap();
        let err = model
            .insert(parse_quote!(Context), parse_quote!(u16))
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate policy member `Context`");
    }

    #[test]
    fn test_probe_impl_answers_every_point() {
        let mut model = PolicyModel::new();
        model
            .insert(parse_quote!(OnChanged), parse_quote!(Callback<i32>))
            .unwrap();

        let ident: Ident = parse_quote!(Watched);
        let tokens = model
            .expand_probe_impl(&ident, &Generics::default())
            .to_string();

        assert!(tokens.contains("type HasOnChanged = :: tola_accessor :: Present"));
        assert!(tokens.contains("type DeclaredOnChanged = Callback < i32 >"));
        assert!(tokens.contains("type HasStorage = :: tola_accessor :: Absent"));
        assert!(tokens.contains("type DeclaredContext = :: tola_accessor :: Undeclared"));
    }
}
