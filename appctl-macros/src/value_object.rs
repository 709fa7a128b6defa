use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - `debug = false` 时不派生 Debug（便于手写脱敏输出）
/// - `default = false` 时不派生 Default（空值不合法的值对象，如命令名）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = Vec::new();
    if cfg.derive_debug {
        required.push(syn::parse_quote!(Debug));
    }
    if cfg.derive_default {
        required.push(syn::parse_quote!(Default));
    }
    required.extend([
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
    ]);

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}

struct ValueObjectAttrConfig {
    derive_debug: bool,
    derive_default: bool,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug: Option<bool> = None;
        let mut derive_default: Option<bool> = None;

        let pairs: Punctuated<AttrFlag, Token![,]> = Punctuated::parse_terminated(input)?;
        for flag in pairs {
            let slot = match flag.key.to_string().as_str() {
                "debug" => &mut derive_debug,
                "default" => &mut derive_default,
                _ => {
                    return Err(syn::Error::new(
                        flag.key.span(),
                        "unknown key in attribute; expected 'debug' or 'default'",
                    ));
                }
            };
            if slot.replace(flag.value).is_some() {
                return Err(syn::Error::new(
                    flag.key.span(),
                    format!("duplicate key '{}' in attribute", flag.key),
                ));
            }
        }

        Ok(Self {
            derive_debug: derive_debug.unwrap_or(true),
            derive_default: derive_default.unwrap_or(true),
        })
    }
}

/// `key = bool`
struct AttrFlag {
    key: syn::Ident,
    value: bool,
}

impl Parse for AttrFlag {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitBool = input
            .parse()
            .map_err(|e| syn::Error::new(e.span(), format!("expected boolean literal for '{key}'")))?;
        Ok(Self {
            key,
            value: lit.value(),
        })
    }
}
