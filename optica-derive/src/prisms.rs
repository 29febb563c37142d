//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Every variant gets a `{variant}_prism()` constructor. The focus type
//! depends on the variant's fields:
//!
//! | Variant | Focus |
//! |---|---|
//! | `Ping` | `()` |
//! | `Text(String)` | `String` |
//! | `Move(i32, i32)` | `(i32, i32)` |
//! | `Click { x: i32, y: i32 }` | `(i32, i32)` in declaration order |

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, data_enum.variants.iter())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods = variants.map(generate_variant_prism);

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let description = format!(" Returns a prism focusing on the `{variant_name}` variant.");

    let bindings: Vec<Ident> = (0..variant.fields.len())
        .map(|index| format_ident!("v{}", index))
        .collect();
    let field_types: Vec<_> = variant.fields.iter().map(|field| &field.ty).collect();

    let pattern = match &variant.fields {
        Fields::Unit => quote! { Self::#variant_name },
        Fields::Unnamed(_) => quote! { Self::#variant_name(#(#bindings),*) },
        Fields::Named(named) => {
            let field_names = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { Self::#variant_name { #(#field_names: #bindings),* } }
        }
    };

    // A single field is focused directly; zero or several become a tuple.
    let (focus_type, focus_value) = if let [field_type] = field_types.as_slice() {
        (quote! { #field_type }, quote! { v0 })
    } else {
        (
            quote! { (#(#field_types),*) },
            quote! { (#(#bindings),*) },
        )
    };

    quote! {
        #[doc = #description]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, #focus_type> + Clone {
            ::optica::optics::FunctionPrism::new(
                |source: Self| match source {
                    #pattern => ::optica::control::Either::Right(#focus_value),
                    #[allow(unreachable_patterns)]
                    other => ::optica::control::Either::Left(other),
                },
                |#focus_value: #focus_type| #pattern,
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
pub fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase()
                    || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("MouseClick", "mouse_click")]
    #[case("none", "none")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("A", "a")]
    fn snake_case_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn unit_variants_focus_on_unit() {
        let variant: Variant = syn::parse_quote!(Ping);
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains("fn ping_prism"));
        assert!(generated.contains("Prism < Self , () >"));
    }

    #[test]
    fn named_variants_focus_on_a_tuple_in_declaration_order() {
        let variant: Variant = syn::parse_quote!(Click { x: i32, label: String });
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains("Prism < Self , (i32 , String) >"));
        assert!(generated.contains("Self :: Click { x : v0 , label : v1 }"));
    }
}
