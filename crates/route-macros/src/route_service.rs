//! 路由声明注册宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Expr, Ident,
    ItemStruct, Lit, Meta, Path, Result, Token,
};

/// 路由声明配置参数
#[derive(Clone, Default)]
pub struct RouteServiceArgs {
    /// 显式路由名称
    pub name: Option<String>,
    /// 路由优先级
    pub priority: i32,
    /// 是否禁用
    pub disabled: bool,
    /// 自定义标记 trait 路径
    pub marker: Option<Path>,
}

impl Parse for RouteServiceArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = Self::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("disabled") {
                        args.disabled = true;
                    } else if path.is_ident("enabled") {
                        args.disabled = false;
                    }
                }
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("priority") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Int(lit_int) = expr_lit.lit {
                                args.priority = lit_int.base10_parse()?;
                            }
                        }
                    } else if nv.path.is_ident("name") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.name = Some(lit_str.value());
                            }
                        }
                    } else if nv.path.is_ident("marker") {
                        if let Expr::Path(expr_path) = nv.value {
                            args.marker = Some(expr_path.path);
                        }
                    }
                }
                Meta::List(_) => {}
            }
        }

        Ok(args)
    }
}

/// 实现 #[route_service] 宏
pub fn route_service_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let route_args = if args.is_empty() {
        RouteServiceArgs::default()
    } else {
        match syn::parse::<RouteServiceArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);
    let struct_name = &input_struct.ident;

    let priority = route_args.priority;
    let enabled = !route_args.disabled;

    // 未指定自定义标记时实现默认的 RouteService 标记 trait；
    // 自定义标记的实现由使用方自行提供
    let marker_impl = if route_args.marker.is_none() {
        let struct_name_string = struct_name.to_string();
        let route_name = route_args.name.clone().unwrap_or(struct_name_string);
        quote! {
            impl ::routing_common::RouteService for #struct_name {
                fn route_name(&self) -> &'static str {
                    #route_name
                }

                fn route_priority(&self) -> i32 {
                    #priority
                }

                fn is_enabled(&self) -> bool {
                    #enabled
                }
            }
        }
    } else {
        quote! {}
    };

    let marker_type = match &route_args.marker {
        Some(path) => quote! { dyn #path },
        None => quote! { dyn ::routing_common::RouteService },
    };

    let registration_code =
        generate_registration_code(struct_name, &route_args, &marker_type, priority, enabled);

    let expanded = quote! {
        #input_struct

        #marker_impl

        #registration_code
    };

    TokenStream::from(expanded)
}

/// 生成路由声明自动注册代码
fn generate_registration_code(
    struct_name: &Ident,
    route_args: &RouteServiceArgs,
    marker_type: &proc_macro2::TokenStream,
    priority: i32,
    enabled: bool,
) -> proc_macro2::TokenStream {
    let registration_fn_name = Ident::new(
        &format!(
            "__register_route_{}",
            struct_name.to_string().to_lowercase()
        ),
        Span::call_site(),
    );

    let route_name_setter = match &route_args.name {
        Some(name) => quote! { .with_route_name(#name) },
        None => quote! {},
    };

    quote! {
        // 使用 ctor 在程序启动时自动注册路由声明
        #[ctor::ctor]
        fn #registration_fn_name() {
            let descriptor = ::routing_common::RouteDescriptor::new(
                ::routing_common::TypeInfo::of::<#struct_name>(),
                ::routing_common::TypeInfo::of_marker::<#marker_type>(),
            )
            #route_name_setter
            .with_priority(#priority)
            .with_enabled(#enabled);

            ::routing_common::register_route_descriptor(descriptor);
        }
    }
}
