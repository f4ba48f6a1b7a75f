use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    braced, parse::Parse, parse_macro_input, punctuated::Punctuated, token, Ident, LitStr, Token,
    Visibility,
};

struct KeywordVariant {
    attrs: Vec<syn::Attribute>,
    name: Ident,
    #[allow(dead_code)]
    tok_eq: Token![=],
    keyword: LitStr,
}

impl Parse for KeywordVariant {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        Ok(KeywordVariant {
            attrs: input.call(syn::Attribute::parse_outer)?,
            name: input.parse()?,
            tok_eq: input.parse()?,
            keyword: input.parse()?,
        })
    }
}

struct KeywordEnum {
    attrs: Vec<syn::Attribute>,
    vis: Visibility,
    #[allow(dead_code)]
    kw_enum: Token![enum],
    name: Ident,
    #[allow(dead_code)]
    tok_brace: token::Brace,
    variants: Punctuated<KeywordVariant, Token![,]>,
}

impl Parse for KeywordEnum {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let content;
        Ok(KeywordEnum {
            attrs: input.call(syn::Attribute::parse_outer)?,
            vis: input.parse()?,
            kw_enum: input.parse()?,
            name: input.parse()?,
            tok_brace: braced!(content in input),
            variants: content.parse_terminated(KeywordVariant::parse, Token![,])?,
        })
    }
}

pub fn keyword_enum_inner(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(Span::call_site(), "`keyword_enum` takes no arguments")
            .to_compile_error()
            .into();
    }

    let item = parse_macro_input!(item as KeywordEnum);

    let KeywordEnum {
        vis,
        name,
        variants,
        attrs,
        ..
    } = item;

    let mut seen = HashSet::new();
    for variant in &variants {
        if !seen.insert(variant.keyword.value()) {
            return syn::Error::new(
                variant.keyword.span(),
                format!("duplicate keyword {:?}", variant.keyword.value()),
            )
            .to_compile_error()
            .into();
        }
    }

    let field_attrs = variants.iter().map(|v| &v.attrs).collect::<Vec<_>>();
    let field_names = variants.iter().map(|v| &v.name).collect::<Vec<_>>();
    let keywords = variants.iter().map(|v| &v.keyword).collect::<Vec<_>>();

    quote!(
        #(#attrs)*
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
        #vis enum #name {
            #(
                #(#field_attrs)*
                #field_names,
            )*
        }

        impl #name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[#(Self::#field_names),*];

            /// The exact, case-sensitive spelling of this variant in source text
            pub const fn keyword(self) -> &'static str {
                match self {
                    #(Self::#field_names => #keywords,)*
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.keyword())
            }
        }
    )
    .into()
}
