use crate::check::PlatformVersionCheck;
use crate::version;

/// One entry of the query list accepted by `_availability_version_check`,
/// layout per `<mach-o/dyld_priv.h>`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct DyldBuildVersion {
    platform: u32,
    version: u32,
}

extern "C" {
    // In libSystem since macOS 11.0; the build must not select this strategy
    // for older deployment targets.
    fn _availability_version_check(count: u32, versions: *const DyldBuildVersion) -> bool;
}

/// Strategy that hands the whole query to the dyld availability service and
/// returns its verdict verbatim.
#[derive(Debug, Copy, Clone, Default)]
pub struct NativeCheck {}

impl PlatformVersionCheck for NativeCheck {
    fn version_at_least(&self, platform: u32, major: u32, minor: u32, subminor: u32) -> bool {
        let queries = [DyldBuildVersion {
            platform,
            version: version::encode(major, minor, subminor),
        }];
        unsafe { _availability_version_check(1, queries.as_ptr()) }
    }
}
