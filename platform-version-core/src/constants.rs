use std::fmt::{Display, Formatter};

/// Platform numbering shared with the dyld availability service, matching
/// the `PLATFORM_*` constants from `<mach-o/loader.h>`.
///
/// The checkers treat the caller's platform word as opaque and never validate
/// it; this enum exists for Rust-side callers and tests.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Platform {
    /// macOS.
    MacOs = 1,
    /// iOS and iPadOS.
    Ios = 2,
    /// tvOS.
    Tvos = 3,
    /// watchOS.
    Watchos = 4,
    /// bridgeOS.
    Bridgeos = 5,
    /// Mac Catalyst.
    MacCatalyst = 6,
    /// iOS simulator.
    IosSimulator = 7,
    /// tvOS simulator.
    TvosSimulator = 8,
    /// watchOS simulator.
    WatchosSimulator = 9,
    /// DriverKit.
    Driverkit = 10,
    /// visionOS.
    Visionos = 11,
    /// visionOS simulator.
    VisionosSimulator = 12,
}

impl From<Platform> for u32 {
    fn from(platform: Platform) -> Self {
        platform as Self
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match *self {
            Self::MacOs => "macos",
            Self::Ios => "ios",
            Self::Tvos => "tvos",
            Self::Watchos => "watchos",
            Self::Bridgeos => "bridgeos",
            Self::MacCatalyst => "mac-catalyst",
            Self::IosSimulator => "ios-simulator",
            Self::TvosSimulator => "tvos-simulator",
            Self::WatchosSimulator => "watchos-simulator",
            Self::Driverkit => "driverkit",
            Self::Visionos => "visionos",
            Self::VisionosSimulator => "visionos-simulator",
        };
        f.write_str(name)
    }
}
