use proc_macro::TokenStream;
use proc_macro2::Span;

///
/// Run an async test body inside an actix system with `app` bound to a freshly
/// spawned application and its mock backend.
///
#[proc_macro_attribute]
pub fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(item as syn::ItemFn);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &mut input.sig;
    let body = &input.block;

    let args = syn::parse_macro_input!(args as syn::AttributeArgs);

    if let Some(arg) = args.first() {
        return syn::Error::new_spanned(arg, "Unknown argument specified")
            .to_compile_error()
            .into();
    }

    if sig.asyncness.is_none() {
        return syn::Error::new_spanned(sig.fn_token, "Test functions must be async")
            .to_compile_error()
            .into();
    }

    sig.asyncness = None;

    (quote::quote_spanned! {Span::call_site()=>
        #[test]
        #(#attrs)*
        #vis #sig {
            actix_rt::System::new()
                .block_on(async {
                    let app = crate::helpers::spawn_app().await;

                    #body
                })
        }
    })
    .into()
}
