use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    braced,
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    spanned::Spanned,
    token::{Brace, Comma, Paren},
    Error, Expr, FnArg, Ident, ItemFn, Lit, LitStr, Path, Result, ReturnType, Token, Type,
};

/// The key of a single prop: either an identifier (`class`) or a string (`"data-id"`).
enum ParsedPropKey {
    Ident(Ident),
    Str(LitStr),
}

impl ParsedPropKey {
    fn to_lit_str(&self) -> LitStr {
        match self {
            // Raw identifiers such as `r#type` become plain `type`.
            Self::Ident(ident) => LitStr::new(
                ident.to_string().trim_start_matches("r#"),
                ident.span(),
            ),
            Self::Str(s) => s.clone(),
        }
    }
}

struct ParsedProp {
    key: ParsedPropKey,
    value: Expr,
}

impl Parse for ParsedProp {
    fn parse(input: ParseStream) -> Result<Self> {
        let key = if input.peek(LitStr) {
            ParsedPropKey::Str(input.parse()?)
        } else {
            // Keywords such as `type` and `for` are allowed as prop names.
            ParsedPropKey::Ident(input.call(Ident::parse_any)?)
        };
        input.parse::<Token![:]>()?;
        let value = input.parse()?;
        Ok(Self { key, value })
    }
}

enum ParsedElementType {
    Tag(LitStr),
    Fragment,
    Component(Path),
}

impl Parse for ParsedElementType {
    /// Tags are lowercase identifiers or strings, and components are any other path.
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Tag(input.parse()?));
        }
        let path: Path = input.parse()?;
        if let Some(ident) = path.get_ident() {
            let name = ident.to_string();
            if name == "Fragment" {
                return Ok(Self::Fragment);
            }
            if name.starts_with(|c: char| c.is_ascii_lowercase()) {
                return Ok(Self::Tag(LitStr::new(&name, ident.span())));
            }
        }
        Ok(Self::Component(path))
    }
}

impl ToTokens for ParsedElementType {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        tokens.extend(match self {
            Self::Tag(name) => quote!(::vtree::ElementType::from(#name)),
            Self::Fragment => quote!(::vtree::ElementType::Fragment),
            Self::Component(path) => quote! {
                ::vtree::ElementType::Component(::vtree::IntoComponent::into_component(#path))
            },
        });
    }
}

enum ParsedElementChild {
    Element(ParsedElement),
    Lit(Lit),
    Expr(Expr),
}

impl Parse for ParsedElementChild {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![#]) {
            input.parse::<Token![#]>()?;
            let child_input;
            parenthesized!(child_input in input);
            Ok(Self::Expr(child_input.parse()?))
        } else if input.peek(Lit) && !input.peek2(Paren) && !input.peek2(Brace) {
            Ok(Self::Lit(input.parse()?))
        } else {
            Ok(Self::Element(input.parse()?))
        }
    }
}

impl ToTokens for ParsedElementChild {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        tokens.extend(match self {
            Self::Element(e) => quote!(::vtree::Renderable::from(#e)),
            Self::Lit(lit) => quote!(::vtree::Renderable::from(#lit)),
            Self::Expr(expr) => quote!(::core::convert::Into::<::vtree::Renderable>::into(#expr)),
        });
    }
}

struct ParsedElement {
    ty: ParsedElementType,
    props: Punctuated<ParsedProp, Comma>,
    children: Vec<ParsedElementChild>,
}

impl Parse for ParsedElement {
    /// Parses a single element of the form:
    ///
    /// div(class: "foo", "data-id": 1) {
    ///     // children
    /// }
    fn parse(input: ParseStream) -> Result<Self> {
        let ty: ParsedElementType = input.parse()?;

        let props = if input.peek(Paren) {
            let props_input;
            parenthesized!(props_input in input);
            Punctuated::parse_terminated(&props_input)?
        } else {
            Punctuated::new()
        };

        let mut children = Vec::new();
        if input.peek(Brace) {
            let children_input;
            braced!(children_input in input);
            while !children_input.is_empty() {
                children.push(children_input.parse()?);
            }
        }

        Ok(Self {
            ty,
            props,
            children,
        })
    }
}

impl ToTokens for ParsedElement {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let ty = &self.ty;

        let props = self.props.iter().map(|ParsedProp { key, value }| {
            let key = key.to_lit_str();
            quote!(.attr(#key, #value))
        });

        let children = &self.children;

        tokens.extend(quote! {
            {
                let _vtree_children: ::std::vec::Vec<::vtree::Renderable> =
                    ::std::vec![#(#children),*];
                ::vtree::create_element(
                    #ty,
                    ::vtree::Props::new()#(#props)*,
                    _vtree_children,
                )
            }
        });
    }
}

/// Builds an [`Element`](../vtree/struct.Element.html) declaratively.
///
/// - A lowercase identifier or a string literal is a tag name: `div`, `"my-widget"`.
/// - `Fragment` groups children without a wrapping tag.
/// - Any other path is a component, which must implement `IntoComponent`.
/// - Props go in parentheses as `key: value`. Keys may be identifiers or string literals.
/// - Children go in braces. String and number literals are text, `#(expr)` inserts any value
///   which converts into a `Renderable`, and anything else is a nested element.
#[proc_macro]
pub fn element(input: TokenStream) -> TokenStream {
    let element = parse_macro_input!(input as ParsedElement);
    quote!(#element).into()
}

struct ParsedComponent {
    f: ItemFn,
    takes_props: bool,
    returns_result: bool,
}

fn is_result(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Result" && !segment.arguments.is_empty()),
        _ => false,
    }
}

impl Parse for ParsedComponent {
    fn parse(input: ParseStream) -> Result<Self> {
        let f: ItemFn = input.parse()?;

        let mut takes_props = false;
        for arg in &f.sig.inputs {
            match arg {
                FnArg::Typed(arg) => {
                    if takes_props {
                        return Err(Error::new(arg.span(), "duplicate `props` argument"));
                    }
                    match &*arg.ty {
                        Type::Reference(_) => takes_props = true,
                        _ => return Err(Error::new(arg.ty.span(), "invalid `props` type")),
                    }
                }
                _ => return Err(Error::new(arg.span(), "invalid argument")),
            }
        }

        let returns_result = match &f.sig.output {
            ReturnType::Type(_, ty) => is_result(ty),
            ReturnType::Default => {
                return Err(Error::new(
                    f.sig.span(),
                    "components must return a renderable value",
                ))
            }
        };

        Ok(Self {
            f,
            takes_props,
            returns_result,
        })
    }
}

impl ToTokens for ParsedComponent {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let attrs = &self.f.attrs;
        let vis = &self.f.vis;
        let name = &self.f.sig.ident;
        let args = &self.f.sig.inputs;
        let block = &self.f.block;
        let output = &self.f.sig.output;
        let generics = &self.f.sig.generics;
        let name_str = name.to_string();

        let call = if self.takes_props {
            quote!(Self::implementation(props))
        } else {
            quote!(Self::implementation())
        };

        let result = if self.returns_result {
            quote! {
                #call
                    .map(::core::convert::Into::<::vtree::Renderable>::into)
                    .map_err(::core::convert::Into::<::vtree::ComponentError>::into)
            }
        } else {
            quote!(::core::result::Result::Ok(::core::convert::Into::<::vtree::Renderable>::into(#call)))
        };

        tokens.extend(quote! {
            #(#attrs)*
            #[derive(Clone, Copy, Debug, Default)]
            #vis struct #name;

            impl #name {
                #[allow(clippy::needless_lifetimes)]
                fn implementation #generics (#args) #output #block
            }

            impl ::vtree::IntoComponent for #name {
                fn into_component(self) -> ::vtree::Component {
                    ::vtree::Component::fallible(|props: &::vtree::Props| {
                        let _ = props;
                        #result
                    })
                    .with_name(#name_str)
                }
            }
        });
    }
}

/// Turns a function into a component which can be used in [`element!`].
///
/// The function may take a single `&Props` argument, and must return either something which
/// converts into a `Renderable`, or a `Result` of one.
#[proc_macro_attribute]
pub fn component(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let component = parse_macro_input!(item as ParsedComponent);
    quote!(#component).into()
}
