use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Dispatch targets for the per-pixel kernels, most specific first.
///
/// Debug builds stop at the x86_64 and aarch64 baselines.
fn kernel_targets() -> &'static [&'static str] {
    if cfg!(debug_assertions) {
        &["x86_64+sse2", "aarch64+neon"]
    } else {
        &[
            "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
            "x86_64+avx2+fma",
            "x86_64+sse4.2",
            "x86_64+sse2",
            "aarch64+neon",
        ]
    }
}

/// Builds a luma kernel once per target of [kernel_targets] and picks the
/// best one for the running CPU at the first call.
///
/// Expands to `#[multiversion::multiversion(targets(...))]`, the crate using
/// it depends on `multiversion` directly.
///
/// # Example
///
/// ```ignore
/// use fls_macros::simd_targets;
///
/// #[simd_targets]
/// fn scalar_impl(in_buf: &[RGBA], out_buf: &mut [f32]) {
///     out_buf
///         .iter_mut()
///         .zip(in_buf.iter())
///         .for_each(|(luma, pixel)| *luma = pixel.luma());
/// }
/// ```
#[proc_macro_attribute]
pub fn simd_targets(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let kernel = parse_macro_input!(input as ItemFn);
    let targets = kernel_targets();

    TokenStream::from(quote! {
        #[multiversion::multiversion(targets(#(#targets),*))]
        #kernel
    })
}
