use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// #[derive(Command)] 宏实现
/// - 必须携带 `#[command(name = "...")]`，名称为通道上的稳定方法名（大小写敏感）
/// - 单元结构体忽略参数；具名字段结构体通过 serde 解码参数
pub(crate) fn expand(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    match expand_inner(&input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_inner(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = command_name(input)?;

    let st = match &input.data {
        Data::Struct(st) => st,
        _ => {
            return Err(syn::Error::new(
                input.span(),
                "#[derive(Command)] only supports struct",
            ));
        }
    };

    let body = match &st.fields {
        Fields::Unit => quote! {
            let _ = arguments;
            ::core::result::Result::Ok(Self)
        },
        Fields::Named(_) => quote! {
            let value = arguments
                .cloned()
                .unwrap_or(::appctl_application::__private::serde_json::Value::Null);
            ::appctl_application::__private::serde_json::from_value(value).map_err(|e| {
                ::appctl_application::error::AppError::InvalidArguments {
                    command: <Self as ::appctl_application::command::Command>::NAME,
                    reason: e.to_string(),
                }
            })
        },
        Fields::Unnamed(f) => {
            return Err(syn::Error::new(
                f.span(),
                "#[derive(Command)] supports unit structs or named-field structs",
            ));
        }
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::appctl_application::command::Command for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;

            fn from_arguments(
                arguments: ::core::option::Option<&::appctl_application::__private::serde_json::Value>,
            ) -> ::core::result::Result<Self, ::appctl_application::error::AppError> {
                #body
            }
        }
    })
}

// 读取 #[command(name = "...")]
fn command_name(input: &DeriveInput) -> syn::Result<LitStr> {
    let mut name: Option<LitStr> = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("command")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("name") {
                return Err(meta.error("unknown key in #[command]; expected 'name'"));
            }
            if name.is_some() {
                return Err(meta.error("duplicate key 'name' in #[command]"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "command name must not be empty"));
            }
            name = Some(lit);
            Ok(())
        })?;
    }

    name.ok_or_else(|| {
        syn::Error::new(
            input.ident.span(),
            "#[derive(Command)] requires #[command(name = \"...\")]",
        )
    })
}
