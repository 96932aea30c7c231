#![deny(
    // The following are allowed by default lints according to
    // https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html
    anonymous_parameters,
    bare_trait_objects,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    single_use_lifetimes,
    trivial_numeric_casts,
    unreachable_pub,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    variant_size_differences,

    clippy::all,
    clippy::pedantic,
    clippy::cargo,
)]
#![allow(
    clippy::blanket_clippy_restriction_lints, // allow clippy::restriction
    clippy::implicit_return, // actually omitting the return keyword is idiomatic Rust code
    clippy::module_name_repetitions, // repeation of module name in a struct name is not big deal
    clippy::multiple_crate_versions, // multi-version dependency crates is not able to fix
)]

//! Publishes `__isPlatformVersionAtLeast`, the entry point compiler-emitted
//! availability checks call at run time. The build script selects exactly one
//! strategy per target; on non-Darwin targets this crate compiles empty and
//! exports nothing.

cfg_if::cfg_if! {
    if #[cfg(native_check)] {
        use platform_version_core::check::{NativeCheck, PlatformVersionCheck};

        /// Is the running OS at least `major.minor.subminor` for `platform` ?
        ///
        /// Returns 1 or 0 with the C calling convention, as compiler-emitted
        /// call sites expect. Cargo guarantees a single defining translation
        /// unit per link, standing in for C weak linkage; a host environment
        /// may still pre-empt this symbol by defining it in an object that
        /// precedes this library on the link line.
        #[allow(non_snake_case)]
        #[no_mangle]
        pub extern "C" fn __isPlatformVersionAtLeast(
            platform: u32,
            major: u32,
            minor: u32,
            subminor: u32,
        ) -> i32 {
            i32::from(NativeCheck::default().version_at_least(platform, major, minor, subminor))
        }
    } else if #[cfg(kernel_fallback)] {
        use platform_version_core::check::{KernelReleaseCheck, PlatformVersionCheck};

        /// Is the running OS at least `major.minor.subminor` for `platform` ?
        ///
        /// Returns 1 or 0 with the C calling convention, as compiler-emitted
        /// call sites expect. Cargo guarantees a single defining translation
        /// unit per link, standing in for C weak linkage; a host environment
        /// may still pre-empt this symbol by defining it in an object that
        /// precedes this library on the link line.
        #[allow(non_snake_case)]
        #[no_mangle]
        pub extern "C" fn __isPlatformVersionAtLeast(
            platform: u32,
            major: u32,
            minor: u32,
            subminor: u32,
        ) -> i32 {
            i32::from(
                KernelReleaseCheck::default().version_at_least(platform, major, minor, subminor),
            )
        }
    }
}

#[cfg(all(test, any(native_check, kernel_fallback)))]
mod tests {
    #[test]
    fn answers_one_for_the_lowest_possible_floor() {
        assert_eq!(super::__isPlatformVersionAtLeast(1, 0, 0, 0), 1);
    }

    #[test]
    fn answers_zero_for_an_impossible_floor() {
        assert_eq!(super::__isPlatformVersionAtLeast(1, 9999, 0, 0), 0);
    }
}
