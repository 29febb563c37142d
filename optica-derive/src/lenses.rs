//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Member, Type, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Names the accessor for a field: `{field}_lens` for named fields and
/// `field{index}_lens` for tuple fields.
pub fn lens_method_name(member: &Member) -> Ident {
    match member {
        Member::Named(ident) => format_ident!("{}_lens", ident.unraw()),
        Member::Unnamed(index) => format_ident!("field{}_lens", index.index),
    }
}

fn members(fields: &Fields) -> Vec<(Member, &Type)> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = field
                .ident
                .clone()
                .map_or_else(|| Member::from(index), Member::Named);
            (member, &field.ty)
        })
        .collect()
}

/// Generates lens methods for a struct's fields.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    if matches!(fields, Fields::Unit) {
        return syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error();
    }

    let lens_methods = members(fields).into_iter().map(|(member, field_type)| {
        let method_name = lens_method_name(&member);
        let description = match &member {
            Member::Named(ident) => format!(" Returns a lens focusing on the `{}` field.", ident.unraw()),
            Member::Unnamed(index) => format!(" Returns a lens focusing on field `{}`.", index.index),
        };

        quote! {
            #[doc = #description]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::optica::optics::Lens<Self, #field_type> + Clone
            where
                #field_type: ::core::clone::Clone,
            {
                ::optica::optics::FunctionLens::new(
                    |source: &Self| ::core::clone::Clone::clone(&source.#member),
                    |mut source: Self, value: #field_type| {
                        source.#member = value;
                        source
                    },
                )
            }
        }
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    }
}
