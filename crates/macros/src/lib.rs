mod presence;

use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Implements `Presence` for a struct or enum whose values are never absent.
///
/// The generated impl uses the trait's default method, so every value of the
/// type is considered present.
/// Implement `Presence` by hand instead when a value of the type can stand
/// for absence, for example an error that may be missing its cause.
///
/// ## Restrictions
///
/// - Only structs and enums are supported.
///
/// ## Example
///
/// ### Input
///
/// ```ignore
/// #[derive(Presence)]
/// struct Reading<T> {
///     value: T,
/// }
/// ```
///
/// ### Expanded
///
/// ```ignore
/// impl<T> ::invariant_core::Presence for Reading<T> {}
/// ```
#[proc_macro_derive(Presence)]
pub fn derive_presence(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as presence::Parsed);
    parsed.expand().into()
}
