//! Proc macro behind `#[fem_testhelpers::test]`.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct Prelude {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        prelude: Prelude, _fn: KFn, name: Ident,
        signature: Signature, body: BraceGroup
    }
}

fn tokens_of(item: &impl ToTokens) -> TokenStream {
    let mut out = TokenStream::new();
    item.to_tokens(&mut out);
    out
}

/// Rewrites a test function so its body runs inside `fem_testhelpers::enter`.
fn expand(attr: TokenStream, item: TokenStream) -> std::result::Result<TokenStream, String> {
    if !attr.is_empty() {
        return Err(format!(
            "#[fem_testhelpers::test] takes no arguments, got `{attr}`"
        ));
    }
    let mut tokens = item.to_token_iter();
    let test_fn = tokens
        .parse::<TestFn>()
        .map_err(|err| format!("#[fem_testhelpers::test] expects a function: {err}"))?;

    let prelude = tokens_of(&test_fn.prelude.items);
    let signature = tokens_of(&test_fn.signature.items);
    let name = test_fn.name;
    let body = test_fn.body.0.stream();

    Ok(quote::quote! {
        #[::core::prelude::rust_2024::test]
        #prelude fn #name #signature {
            let _test_span = ::fem_testhelpers::enter(::core::stringify!(#name));
            #body
        }
    })
}

/// Marks a test function: installs tracing and backtrace output, then runs
/// the body inside a span named after the test.
///
/// The return type is kept, so tests may return `Result<(), IPanic>`.
///
/// ```ignore
/// #[fem_testhelpers::test]
/// fn encodes_integers() -> Result<(), IPanic> {
///     let v = Value::from_native(Native::from(3i64))?;
///     assert!(v.is_integer());
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    expand(attr.into(), item.into())
        .unwrap_or_else(|msg| quote::quote! { ::core::compile_error!(#msg); })
        .into()
}
