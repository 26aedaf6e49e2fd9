//! Service-related macros.
//!
//! This module contains:
//! - `#[service]` - Attribute macro turning an `impl` block into an `Object`

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ImplItem, ItemImpl, LitStr, Token, Type, Visibility, parse::Parse,
    parse_macro_input,
};

/// Arguments for the `#[service]` macro.
pub(crate) struct ServiceArgs {
    pub name: Option<String>,
}

impl Parse for ServiceArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ServiceArgs { name })
    }
}

/// A public method found in the `impl` block.
struct ServiceMethod {
    ident: Ident,
    is_static: bool,
}

/// Name of the invocation entry point method.
const ENTRY_POINT: &str = "invoke";

/// Implementation of the `#[service]` macro.
pub fn service_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ServiceArgs);
    let input = parse_macro_input!(item as ItemImpl);

    match expand(args, &input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: ServiceArgs, input: &ItemImpl) -> syn::Result<proc_macro2::TokenStream> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[service] must be placed on an inherent impl block",
        ));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[service] impl blocks cannot be generic",
        ));
    }

    let self_ty = &input.self_ty;
    let class_name = match args.name {
        Some(name) => name,
        None => type_name(self_ty)?,
    };
    let methods = collect_methods(input)?;

    let instance: Vec<_> = methods.iter().filter(|m| !m.is_static).collect();
    let statics: Vec<_> = methods.iter().filter(|m| m.is_static).collect();

    let instance_idents: Vec<_> = instance.iter().map(|m| &m.ident).collect();
    let instance_names: Vec<_> = instance.iter().map(|m| m.ident.to_string()).collect();
    let static_idents: Vec<_> = statics.iter().map(|m| &m.ident).collect();
    let static_names: Vec<_> = statics.iter().map(|m| m.ident.to_string()).collect();
    let all_names: Vec<_> = methods.iter().map(|m| m.ident.to_string()).collect();

    let has_entry_point = instance.iter().any(|m| m.ident == ENTRY_POINT);

    let has_method_body = if all_names.is_empty() {
        quote! { false }
    } else {
        quote! { matches!(method, #(#all_names)|*) }
    };

    let invokable = has_entry_point.then(|| quote! { .invokable() });

    let entry_point = has_entry_point.then(|| {
        quote! {
            impl ::rollcall::Invoke for #self_ty {
                fn invoke(&self, args: &[::rollcall::Value]) -> ::rollcall::ListenerResult {
                    <#self_ty>::invoke(self, args)
                }
            }
        }
    });

    let as_invoke = has_entry_point.then(|| {
        quote! {
            fn as_invoke(&self) -> ::core::option::Option<&dyn ::rollcall::Invoke> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let expanded = quote! {
        #input

        impl #self_ty {
            #[doc = concat!("Type metadata generated by `#[rollcall::service]` for `", #class_name, "`.")]
            pub fn descriptor() -> ::rollcall::TypeDescriptor {
                ::rollcall::TypeDescriptor::new(#class_name)
                    #( .method(#instance_names) )*
                    #( .static_method(#static_names, <#self_ty>::#static_idents as ::rollcall::StaticFn) )*
                    #invokable
            }
        }

        impl ::rollcall::Object for #self_ty {
            fn class_name(&self) -> &str {
                #class_name
            }

            fn has_method(&self, method: &str) -> bool {
                #has_method_body
            }

            #[allow(unused_variables)]
            fn call_method(
                &self,
                method: &str,
                args: &[::rollcall::Value],
            ) -> ::rollcall::ListenerResult {
                match method {
                    #( #instance_names => self.#instance_idents(args), )*
                    #( #static_names => <#self_ty>::#static_idents(args), )*
                    other => ::core::result::Result::Err(
                        ::std::format!(
                            "\"{}\" method is not defined in \"{}\" class",
                            other,
                            #class_name
                        )
                        .into(),
                    ),
                }
            }

            #as_invoke
        }

        #entry_point
    };

    Ok(expanded)
}

/// Last path segment of the implementing type.
fn type_name(ty: &Type) -> syn::Result<String> {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .ok_or_else(|| syn::Error::new_spanned(ty, "expected a named type")),
        _ => Err(syn::Error::new_spanned(
            ty,
            "#[service] requires a named type; use `name = \"...\"` otherwise",
        )),
    }
}

/// Public methods of the block, validated against the listener signature.
fn collect_methods(input: &ItemImpl) -> syn::Result<Vec<ServiceMethod>> {
    let mut methods = Vec::new();

    for item in &input.items {
        let ImplItem::Fn(function) = item else {
            continue;
        };
        if !matches!(function.vis, Visibility::Public(_)) {
            continue;
        }

        let sig = &function.sig;
        let is_static = match sig.receiver() {
            Some(receiver) if receiver.reference.is_some() && receiver.mutability.is_none() => {
                false
            }
            Some(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "service methods must take `&self`",
                ));
            }
            None => true,
        };

        let arg_count = sig
            .inputs
            .iter()
            .filter(|arg| matches!(arg, FnArg::Typed(_)))
            .count();
        if arg_count != 1 {
            return Err(syn::Error::new_spanned(
                &sig.inputs,
                "service methods must take exactly one argument: `args: &[Value]`",
            ));
        }

        if sig.ident == ENTRY_POINT && is_static {
            return Err(syn::Error::new_spanned(
                &sig.ident,
                "the `invoke` entry point must take `&self`",
            ));
        }

        methods.push(ServiceMethod {
            ident: sig.ident.clone(),
            is_static,
        });
    }

    Ok(methods)
}
