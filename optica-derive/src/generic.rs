//! Implementation of the `#[derive(Generic)]` macro.
//!
//! Structs map to an `And` chain terminated by `Done`, one cell per field in
//! declaration order. Enums map to a `Sum` chain terminated by `Void`, one
//! case per variant in declaration order, each carrying the `And` chain of
//! its fields.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, parse_macro_input};

/// Main implementation of the Generic derive macro.
pub fn derive_generic_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let body = match &input.data {
        Data::Struct(data_struct) => Ok(generate_struct(&input.ident, &data_struct.fields)),
        Data::Enum(data_enum) => Ok(generate_enum(&input.ident, data_enum)),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Generic cannot be derived for unions.",
        )),
    };

    let expanded = match body {
        Ok(body) => {
            let name = &input.ident;
            let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
            quote! {
                impl #impl_generics ::optica::generic::Generic for #name #type_generics #where_clause {
                    #body
                }
            }
        }
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// The pieces of a product encoding for one field list.
struct Product {
    /// The `And<.., Done>` type.
    repr: TokenStream2,
    /// Field names, or positions for tuple fields.
    labels: Vec<String>,
    /// Builds the representation from the bindings.
    build: TokenStream2,
    /// Destructures the representation into the bindings.
    pattern: TokenStream2,
    /// Destructures or rebuilds the fields after a path: `{ a: v0 }`, `(v0)`
    /// or nothing.
    fields: TokenStream2,
}

fn product(fields: &Fields) -> Product {
    let labels: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            field
                .ident
                .as_ref()
                .map_or_else(|| index.to_string(), |ident| ident.unraw().to_string())
        })
        .collect();
    let bindings: Vec<Ident> = (0..labels.len())
        .map(|index| format_ident!("field{}", index))
        .collect();

    let mut repr = quote! { ::optica::generic::Done };
    let mut build = quote! { ::optica::generic::Done };
    let mut pattern = quote! { ::optica::generic::Done };
    for ((field, label), binding) in fields.iter().zip(&labels).zip(&bindings).rev() {
        let field_type = &field.ty;
        repr = quote! { ::optica::generic::And<#field_type, #repr> };
        build = quote! { ::optica::generic::And::new(#label, #binding, #build) };
        pattern = quote! { ::optica::generic::And { value: #binding, rest: #pattern, .. } };
    }

    let fields = match fields {
        Fields::Named(named) => {
            let names = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { { #(#names: #bindings),* } }
        }
        Fields::Unnamed(_) => quote! { (#(#bindings),*) },
        Fields::Unit => TokenStream2::new(),
    };

    Product {
        repr,
        labels,
        build,
        pattern,
        fields,
    }
}

fn generate_struct(name: &Ident, fields: &Fields) -> TokenStream2 {
    let Product {
        repr,
        labels,
        build,
        pattern,
        fields,
    } = product(fields);
    let type_name = name.unraw().to_string();

    quote! {
        type Repr = #repr;

        const SHAPE: ::optica::generic::Shape =
            ::optica::generic::Shape::product(#type_name, &[#(#labels),*]);

        fn to_generic(self) -> Self::Repr {
            let Self #fields = self;
            #build
        }

        fn from_generic(repr: Self::Repr) -> Self {
            let #pattern = repr;
            Self #fields
        }
    }
}

/// Wraps `inner` in `depth` layers of `Sum::That`.
fn nest_that(depth: usize, inner: TokenStream2) -> TokenStream2 {
    (0..depth).fold(inner, |nested, _| quote! { ::optica::generic::Sum::That(#nested) })
}

fn generate_enum(name: &Ident, data: &DataEnum) -> TokenStream2 {
    let type_name = name.unraw().to_string();
    let mut repr = quote! { ::optica::generic::Void };
    let mut cases = Vec::with_capacity(data.variants.len());
    let mut case_fields = Vec::with_capacity(data.variants.len());
    let mut to_arms = Vec::with_capacity(data.variants.len());
    let mut from_arms = Vec::with_capacity(data.variants.len());

    for (depth, variant) in data.variants.iter().enumerate() {
        let variant_name = &variant.ident;
        let case = variant_name.unraw().to_string();
        let Product {
            labels,
            build,
            pattern,
            fields,
            ..
        } = product(&variant.fields);
        case_fields.push(quote! { &[#(#labels),*] });

        let this = quote! { ::optica::generic::Sum::This { name: #case, value: #build } };
        let wrapped = nest_that(depth, this);
        to_arms.push(quote! { Self::#variant_name #fields => #wrapped, });

        let matched = nest_that(
            depth,
            quote! { ::optica::generic::Sum::This { value: #pattern, .. } },
        );
        from_arms.push(quote! { #matched => Self::#variant_name #fields, });

        cases.push(case);
    }

    for variant in data.variants.iter().rev() {
        let case_repr = product(&variant.fields).repr;
        repr = quote! { ::optica::generic::Sum<#case_repr, #repr> };
    }

    let void = nest_that(data.variants.len(), quote! { void });

    quote! {
        type Repr = #repr;

        const SHAPE: ::optica::generic::Shape =
            ::optica::generic::Shape::sum(#type_name, &[#(#cases),*], &[#(#case_fields),*]);

        fn to_generic(self) -> Self::Repr {
            match self {
                #(#to_arms)*
            }
        }

        fn from_generic(repr: Self::Repr) -> Self {
            match repr {
                #(#from_arms)*
                #[allow(unreachable_patterns)]
                #void => match void {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fields_of(input: &DeriveInput) -> &Fields {
        match &input.data {
            Data::Struct(data) => &data.fields,
            _ => panic!("expected a struct"),
        }
    }

    #[rstest]
    #[case(syn::parse_quote!(struct Point { x: i32, r#type: u8 }), vec!["x", "type"])]
    #[case(syn::parse_quote!(struct Pair(u8, String);), vec!["0", "1"])]
    #[case(syn::parse_quote!(struct Marker;), vec![])]
    fn labels_follow_declaration_order(#[case] input: DeriveInput, #[case] expected: Vec<&str>) {
        assert_eq!(product(fields_of(&input)).labels, expected);
    }

    #[test]
    fn product_representation_nests_to_the_right() {
        let input: DeriveInput = syn::parse_quote!(struct Pair(u8, String););
        let repr = product(fields_of(&input)).repr.to_string();
        assert_eq!(
            repr,
            ":: optica :: generic :: And < u8 , :: optica :: generic :: And < String , :: optica :: generic :: Done > >"
        );
    }

    #[rstest]
    #[case(0, "x")]
    #[case(2, ":: optica :: generic :: Sum :: That (:: optica :: generic :: Sum :: That (x))")]
    fn nest_that_wraps_once_per_level(#[case] depth: usize, #[case] expected: &str) {
        assert_eq!(nest_that(depth, quote! { x }).to_string(), expected);
    }

    #[test]
    fn empty_enums_map_to_void() {
        let input: DeriveInput = syn::parse_quote!(enum Never {});
        let Data::Enum(data) = &input.data else {
            panic!("expected an enum");
        };
        let generated = generate_enum(&input.ident, data).to_string();
        assert!(generated.contains("type Repr = :: optica :: generic :: Void ;"));
    }

    #[test]
    fn enum_shape_lists_the_fields_of_every_case() {
        let input: DeriveInput = syn::parse_quote!(
            enum Figure {
                Dot,
                Circle { radius: u32 },
                Line(u8, u8),
            }
        );
        let Data::Enum(data) = &input.data else {
            panic!("expected an enum");
        };
        let generated = generate_enum(&input.ident, data).to_string();
        assert!(generated.contains(
            r#"Shape :: sum ("Figure" , & ["Dot" , "Circle" , "Line"] , & [& [] , & ["radius"] , & ["0" , "1"]])"#
        ));
    }
}
