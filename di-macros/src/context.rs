//! `#[derive(Context)]`.

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, DeriveInput};

use crate::fields::named_fields;

pub fn derive_context_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = named_fields(input, "Context")?;

    // Two fields of one type would produce overlapping impls
    let mut seen: Vec<String> = Vec::new();
    for field in fields {
        let ty = field.ty.to_token_stream().to_string();
        if seen.contains(&ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "Context fields must have distinct types; wrap one in a newtype",
            ));
        }
        seen.push(ty);
    }

    let impls = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        Some(quote! {
            impl #impl_generics crate::FromRef<#name #ty_generics> for #field_type #where_clause {
                fn from_ref(ctx: &#name #ty_generics) -> Self {
                    ::std::clone::Clone::clone(&ctx.#field_name)
                }
            }
        })
    });

    Ok(quote! { #(#impls)* })
}
