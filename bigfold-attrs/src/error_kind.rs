use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Result};

/// The expressions given to the `error` attribute.
#[derive(Debug, Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorArgs {
    /// Collects the tags of every `error` attribute on the item. Later tags override earlier ones.
    fn from_input(input: &DeriveInput) -> Result<Self> {
        let mut args = Self::default();
        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("error")) {
            attr.parse_nested_meta(|meta| {
                let slot = if meta.path.is_ident("message") {
                    &mut args.message
                } else if meta.path.is_ident("labels") {
                    &mut args.labels
                } else if meta.path.is_ident("help") {
                    &mut args.help
                } else {
                    return Err(meta.error("unknown tag; expected `message`, `labels`, or `help`"));
                };
                *slot = Some(meta.value()?.parse()?);
                Ok(())
            })?;
        }
        Ok(args)
    }
}

/// Generates the `let` statement that brings the fields of `self` into scope by name.
fn bind_fields(input: &DeriveInput) -> Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
    };

    let name = &input.ident;
    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            Ok(quote! {
                #[allow(unused_variables)]
                let #name { #(#names),* } = self;
            })
        },
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(name, "`ErrorKind` cannot be derived for tuple structs")),
        Fields::Unit => Ok(TokenStream2::new()),
    }
}

/// Expands the derive into the `message` and `report_builder` methods of the trait.
pub fn expand(input: &DeriveInput) -> Result<TokenStream2> {
    let args = ErrorArgs::from_input(input)?;
    let bindings = bind_fields(input)?;

    let message = match &args.message {
        Some(message) => quote! { (#message).to_string() },
        None => quote! { String::new() },
    };
    let labels = match &args.labels {
        Some(labels) => quote! { (#labels).into_iter().map(|label| label.to_string()).collect::<Vec<String>>() },
        None => quote! { Vec::<String>::new() },
    };
    let help = args.help.as_ref().map(|help| quote! { builder.set_help(#help); });

    Ok(quote! {
        fn message(&self) -> String {
            #bindings
            #message
        }

        fn report_builder<'a>(
            &self,
            src_id: &'a str,
            spans: &[std::ops::Range<usize>],
        ) -> ariadne::ReportBuilder<(&'a str, std::ops::Range<usize>)> {
            #bindings

            let labels: Vec<String> = #labels;
            let offset = spans.first().map_or(0, |span| span.start);
            let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                .with_message(self.message());

            // a span without a label is still highlighted; a label without a span is dropped
            for (i, span) in spans.iter().enumerate() {
                let mut label = ariadne::Label::new((src_id, span.clone()))
                    .with_color(bigfold_error::EXPR);
                if let Some(text) = labels.get(i).filter(|text| !text.is_empty()) {
                    label = label.with_message(text);
                }
                builder.add_label(label);
            }

            #help
            builder
        }
    })
}
