//! The two mutually exclusive strategies for answering an availability
//! query, behind one capability trait. The runtime export picks exactly one
//! of them at build time; both stay independently callable from Rust.

/// Strategy that delegates the query to the dyld availability service.
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos"
))]
pub mod native;

/// Strategy that derives the answer from the kernel release string.
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos"
))]
pub mod fallback;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos"
))]
pub use fallback::KernelReleaseCheck;
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos"
))]
pub use native::NativeCheck;

/// Capability interface answering "is the running OS at least this version ?".
pub trait PlatformVersionCheck {
    /// Returns `true` when the running OS satisfies `major.minor.subminor`
    /// for `platform`. Must not panic; when the host cannot be interrogated
    /// the answer degrades to `false`, never to an over-report.
    fn version_at_least(&self, platform: u32, major: u32, minor: u32, subminor: u32) -> bool;
}

#[cfg(all(test, target_os = "macos"))]
mod tests {
    use super::*;

    #[test]
    fn fallback_reports_some_modern_version() {
        // every macOS able to run this test is past 10.0
        assert!(KernelReleaseCheck::default().version_at_least(1, 10, 0, 0));
        assert!(!KernelReleaseCheck::default().version_at_least(1, 9999, 0, 0));
    }

    #[test]
    fn strategies_agree_on_queries_below_and_above_the_host() {
        let native = NativeCheck::default();
        let fallback = KernelReleaseCheck::default();
        for (major, minor, subminor) in [(10, 0, 0), (9999, 0, 0)] {
            assert_eq!(
                native.version_at_least(1, major, minor, subminor),
                fallback.version_at_least(1, major, minor, subminor),
            );
        }
    }
}
