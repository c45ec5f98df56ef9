use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Generics, Ident, Item, Result,
    parse::{Parse, ParseStream},
};

#[derive(Debug)]
pub(crate) struct Parsed {
    ident: Ident,
    generics: Generics,
}

impl Parse for Parsed {
    /// Parses a struct or enum definition.
    fn parse(input: ParseStream) -> Result<Self> {
        let item: Item = input.parse()?;

        let (ident, generics) = match item {
            Item::Struct(item_struct) => (item_struct.ident, item_struct.generics),
            Item::Enum(item_enum) => (item_enum.ident, item_enum.generics),
            _ => {
                return Err(syn::Error::new_spanned(
                    item,
                    "Presence can only be derived for structs and enums",
                ));
            }
        };

        Ok(Parsed { ident, generics })
    }
}

impl Parsed {
    /// Generates the `Presence` implementation.
    pub(crate) fn expand(self) -> TokenStream {
        let ident = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics ::invariant_core::Presence for #ident #ty_generics #where_clause {}
        }
    }
}
