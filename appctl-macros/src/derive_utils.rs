use quote::ToTokens;
use std::collections::HashSet;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

/// 把属性拆成 (非 derive 属性, 已声明的 derive 路径)
fn partition_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<Path>) {
    let mut others = Vec::new();
    let mut declared = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("derive") {
            others.push(attr.clone());
            continue;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            declared.extend(list);
        }
    }
    (others, declared)
}

// serde 的派生可能写成 `Serialize` 或 `serde::Serialize`，按末段归一
fn derive_key(p: &Path) -> String {
    match p.segments.last() {
        Some(last) => last.ident.to_string(),
        None => p.to_token_stream().to_string(),
    }
}

/// 将 `required` 派生合并进 `attrs`，已声明的同名派生不重复追加
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) {
    let (others, declared) = partition_derives(attrs);

    let mut seen = HashSet::new();
    let merged: Vec<Path> = required
        .into_iter()
        .chain(declared)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(others).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive_names(attrs: &[Attribute]) -> Vec<String> {
        let (_, declared) = partition_derives(attrs);
        declared.iter().map(derive_key).collect()
    }

    #[test]
    fn required_derives_come_first_without_duplicates() {
        let mut attrs: Vec<Attribute> = vec![
            syn::parse_quote!(#[derive(Hash, serde::Serialize)]),
            syn::parse_quote!(#[doc = "kept"]),
        ];
        apply_derives(
            &mut attrs,
            vec![syn::parse_quote!(Clone), syn::parse_quote!(Serialize)],
        );

        assert_eq!(derive_names(&attrs), vec!["Clone", "Serialize", "Hash"]);
        assert_eq!(attrs.len(), 2);
        assert!(attrs[1].path().is_ident("doc"));
    }
}
