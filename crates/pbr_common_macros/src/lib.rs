//! Derive macros shared by the pbr crates.
//!
//! The generated code refers to traits in `pbr_base`, so any crate using these derives also needs to depend on `pbr_base`.

use proc_macro::TokenStream;

mod derive;

/// Implement `pbr_base::EnumCountT` for an enum.
#[proc_macro_derive(EnumCount)]
pub fn derive_enum_count(item: TokenStream) -> TokenStream {
    derive::enum_count(item.into()).into()
}

/// Implement `pbr_base::EnumFromIndexT` for an enum, using the (integer) discriminants as indices.
#[proc_macro_derive(EnumFromIndex)]
pub fn derive_enum_from_index(item: TokenStream) -> TokenStream {
    derive::enum_from_index(item.into()).into()
}

/// Implement `core::fmt::Display` for a fieldless enum.
///
/// A variant is displayed by its identifier, unless it's annotated with `#[display("...")]`.
#[proc_macro_derive(EnumDisplay, attributes(display))]
pub fn derive_enum_display(item: TokenStream) -> TokenStream {
    derive::enum_display(item.into()).into()
}

/// Implement `pbr_base::EnumFromNameT` for a fieldless enum.
///
/// A variant is parsed from its identifier, unless it's annotated with `#[parse_name("...")]`.
#[proc_macro_derive(EnumFromName, attributes(parse_name))]
pub fn derive_enum_from_name(item: TokenStream) -> TokenStream {
    derive::enum_from_name(item.into()).into()
}
