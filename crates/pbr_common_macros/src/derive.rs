use proc_macro2::*;
use quote::quote;
use syn::{punctuated::Punctuated, token::Comma, *};

/// Parse the derive input and make sure it's an enum
fn parse_enum(item: TokenStream, derive_name: &str) -> core::result::Result<(Ident, Punctuated<Variant, Comma>), TokenStream> {
    let input_parsed = syn::parse2::<DeriveInput>(item).map_err(|err| err.to_compile_error())?;

    match input_parsed.data {
        Data::Enum(body) => Ok((input_parsed.ident, body.variants)),
        _ => {
            let msg = format!("{derive_name} can only be derived for an enum");
            Err(Error::new_spanned(&input_parsed.ident, msg).to_compile_error())
        }
    }
}

/// Get the string value of a `#[attr_name("...")]` attribute, or the variant's identifier if it's not present
fn variant_name(variant: &Variant, attr_name: &str) -> TokenStream {
    variant.attrs.iter()
        .filter(|attr| attr.path().is_ident(attr_name))
        .map(|attr| attr.parse_args::<LitStr>().map_or_else(|err| err.to_compile_error(), |parsed| {
            let val = parsed.value();
            quote!(#val)
        }))
        .next()
        .unwrap_or_else(|| {
            let val = variant.ident.to_string();
            quote!(#val)
        })
}

pub fn enum_count(item: TokenStream) -> TokenStream {
    let (ident, variants) = match parse_enum(item, "EnumCount") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let count = variants.len();

    quote!{
        impl pbr_base::EnumCountT for #ident {
            const COUNT: usize = #count;
        }
    }
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
    let (ident, body_variants) = match parse_enum(item, "EnumFromIndex") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let mut variants = Vec::with_capacity(body_variants.len());
    let mut indices = Vec::with_capacity(body_variants.len());
    let mut next_idx = 0usize;
    for variant in body_variants {
        let idx = match &variant.discriminant {
            Some((_, Expr::Lit(ExprLit { lit: Lit::Int(int), .. }))) => match int.base10_parse::<usize>() {
                Ok(int) => int,
                Err(err) => return err.to_compile_error(),
            },
            Some((_, expr)) => return Error::new_spanned(expr, "Only integer literal discriminants are supported by EnumFromIndex").to_compile_error(),
            None => next_idx,
        };

        variants.push(variant.ident);
        indices.push(idx);
        next_idx = idx + 1;
    }

    quote!{
        impl pbr_base::EnumFromIndexT for #ident {
            fn from_idx(idx: usize) -> Option<Self> {
                match idx {
                    #(#indices => Some(Self::#variants),)*
                    _ => None,
                }
            }

            fn from_idx_or(idx: usize, default: Self) -> Self {
                match idx {
                    #(#indices => Self::#variants,)*
                    _ => default,
                }
            }

            unsafe fn from_idx_unchecked(idx: usize) -> Self {
                match idx {
                    #(#indices => Self::#variants,)*
                    _ => unreachable!()
                }
            }
        }
    }
}

pub fn enum_display(item: TokenStream) -> TokenStream {
    let (ident, variants) = match parse_enum(item, "EnumDisplay") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let members = variants.iter().map(|variant| variant.ident.clone());
    let names = variants.iter().map(|variant| variant_name(variant, "display"));

    quote!{
        impl core::fmt::Display for #ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    #(#ident::#members => f.write_str(#names),)*
                }
            }
        }
    }
}

pub fn enum_from_name(item: TokenStream) -> TokenStream {
    let (ident, variants) = match parse_enum(item, "EnumFromName") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let members = variants.iter().map(|variant| variant.ident.clone());
    let names = variants.iter().map(|variant| variant_name(variant, "parse_name"));

    quote!{
        impl pbr_base::EnumFromNameT for #ident {
            fn parse(s: &str) -> Option<Self> {
                match s {
                    #(#names => Some(Self::#members),)*
                    _ => None,
                }
            }
        }
    }
}
