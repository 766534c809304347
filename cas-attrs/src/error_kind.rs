use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
enum Tag {
    Message(Expr),
    Labels(Expr),
    Help(Expr),
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        match name.to_string().as_str() {
            "message" => Ok(Self::Message(input.parse()?)),
            "labels" => Ok(Self::Labels(input.parse()?)),
            "help" => Ok(Self::Help(input.parse()?)),
            other => Err(syn::Error::new_spanned(&name, format!("unknown tag `{}`", other))),
        }
    }
}

/// The contents of the `error` attribute. Every tag is optional, and may appear at most once.
#[derive(Default)]
struct ErrorAttr {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = Self::default();
        for tag in Punctuated::<Tag, Token![,]>::parse_terminated(input)? {
            let (slot, expr, name) = match tag {
                Tag::Message(expr) => (&mut attr.message, expr, "message"),
                Tag::Labels(expr) => (&mut attr.labels, expr, "labels"),
                Tag::Help(expr) => (&mut attr.help, expr, "help"),
            };
            if slot.is_some() {
                return Err(syn::Error::new_spanned(expr, format!("duplicate tag `{}`", name)));
            }
            *slot = Some(expr);
        }
        Ok(attr)
    }
}

/// A struct that `ErrorKind` is being derived for.
pub struct ErrorKindDerive {
    pub name: Ident,
    bindings: TokenStream2,
    attr: ErrorAttr,
}

impl Parse for ErrorKindDerive {
    fn parse(input: ParseStream) -> Result<Self> {
        let input = input.parse::<DeriveInput>()?;
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
        };

        // named fields are brought into scope so the tags can refer to them directly
        let bindings = match &data.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! {
                    #[allow(unused_variables)]
                    let Self { #(#names),* } = self;
                }
            },
            Fields::Unit => TokenStream2::new(),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(fields, "`ErrorKind` cannot be derived for tuple structs"));
            },
        };

        let attr = match input.attrs.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorAttr>()?,
            None => ErrorAttr::default(),
        };

        Ok(Self { name: input.ident, bindings, attr })
    }
}

impl ErrorKindDerive {
    /// `fn message`, defaulting to the name of the struct.
    fn message_fn(&self) -> TokenStream2 {
        let bindings = &self.bindings;
        let message = match &self.attr.message {
            Some(message) => message.to_token_stream(),
            None => self.name.to_string().to_token_stream(),
        };
        quote! {
            fn message(&self) -> String {
                #bindings
                (#message).to_string()
            }
        }
    }

    /// `fn build_report`, pairing each label with the span at the same position.
    fn build_report_fn(&self) -> TokenStream2 {
        let bindings = &self.bindings;
        let labels = match &self.attr.labels {
            Some(labels) => labels.to_token_stream(),
            None => quote! { [""] },
        };
        let help = self.attr.help.as_ref().map(|help| quote! {
            report.set_help(#help);
        });
        quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bindings
                let offset = spans.first().map_or(0, |span| span.start);
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let text = text.to_string();
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(cas_error::EXPR);
                        if text.is_empty() { label } else { label.with_message(text) }
                    });

                #[allow(unused_mut)]
                let mut report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(cas_error::ErrorKind::message(self))
                    .with_labels(labels);
                #help
                report.finish()
            }
        }
    }
}

impl ToTokens for ErrorKindDerive {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        tokens.extend(self.message_fn());
        tokens.extend(self.build_report_fn());
        tokens.extend(quote! {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        });
    }
}
