mod error_kind;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derives the [`ErrorKind`] trait for a struct, so that it can be wrapped in a
/// `bigfold_error::Error`.
///
/// The text of the error is given by tags in the `error` attribute:
///
/// ```
/// use bigfold_attrs::ErrorKind;
/// use bigfold_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not a digit", found),
///     labels = ["this character"],
///     help = "only the digits 0 to 9 are allowed",
/// )]
/// pub struct NotADigit {
///     found: char,
/// }
///
/// assert_eq!(NotADigit { found: 'x' }.message(), "`x` is not a digit");
/// ```
///
/// | Tag       | Value                                                                      |
/// | --------- | -------------------------------------------------------------------------- |
/// | `message` | One line summarizing the error, shown at the top of the report.            |
/// | `labels`  | An iterable of label texts. The `n`th label is attached to the `n`th span. |
/// | `help`    | Optional text describing how to fix the error.                             |
///
/// Every tag is an arbitrary expression, evaluated with the fields of the struct bound by name.
/// Empty labels highlight their span without a message.
///
/// The generated code names the `ariadne` and `bigfold_error` crates, so the deriving crate must
/// depend on both.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    match error_kind::expand(&input) {
        Ok(methods) => quote! {
            impl #impl_generics ErrorKind for #name #ty_generics #where_clause {
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                #methods
            }
        }.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
