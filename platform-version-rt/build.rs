//! Strategy selection. Two build-time facts decide what gets exported:
//! whether the target needs the availability check at all (Darwin family
//! only) and whether the dyld availability service is guaranteed present on
//! every OS revision the binary may run on (deployment target >= macOS 11.0).

use std::env;

fn main() {
    println!("cargo::rustc-check-cfg=cfg(native_check)");
    println!("cargo::rustc-check-cfg=cfg(kernel_fallback)");
    println!("cargo:rerun-if-env-changed=MACOSX_DEPLOYMENT_TARGET");

    let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if !matches!(os.as_str(), "macos" | "ios" | "tvos" | "watchos") {
        // nothing to export, the crate compiles empty
        return;
    }
    // The fallback only models macOS; every supported minimum of the other
    // Darwin targets already ships the availability service.
    if os == "macos" && !deployment_target_at_least(11, 0) {
        println!("cargo:rustc-cfg=kernel_fallback");
    } else {
        println!("cargo:rustc-cfg=native_check");
    }
}

/// True when `MACOSX_DEPLOYMENT_TARGET` names a version at or above
/// `major.minor`. Unset or unparsable means "assume old": rustc's default
/// minimums on x86_64 predate 11.0, and choosing the fallback for a target
/// that did not ask for newer is the conservative direction.
fn deployment_target_at_least(major: u32, minor: u32) -> bool {
    let Ok(target) = env::var("MACOSX_DEPLOYMENT_TARGET") else {
        return false;
    };
    let mut fields = target.trim().split('.');
    let tmaj: u32 = match fields.next().and_then(|f| f.parse().ok()) {
        Some(v) => v,
        None => return false,
    };
    let tmin: u32 = fields.next().and_then(|f| f.parse().ok()).unwrap_or(0);
    tmaj > major || (tmaj == major && tmin >= minor)
}
