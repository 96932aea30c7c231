use crate::check::PlatformVersionCheck;
use crate::release::{self, RELEASE_BUF_LEN};
use std::io;

/// Strategy that derives the marketing version from `kern.osrelease`.
///
/// For deployment targets below macOS 11.0 this is the *more* trustworthy
/// path: the dyld availability service can misreport when the running OS
/// predates the binary's declared minimum, while the kernel release string
/// is always there to read.
#[derive(Debug, Copy, Clone, Default)]
pub struct KernelReleaseCheck {}

impl PlatformVersionCheck for KernelReleaseCheck {
    // Only the macOS platform is modelled here, the platform word is not
    // consulted.
    fn version_at_least(&self, _platform: u32, major: u32, minor: u32, subminor: u32) -> bool {
        let mut buf = [0_u8; RELEASE_BUF_LEN];
        let populated = match read_kernel_release(&mut buf) {
            Ok(len) => len.min(buf.len()),
            Err(e) => {
                crate::error!("kern.osrelease query failed: {e}");
                return false;
            }
        };
        let (kernel_major, kernel_minor) = release::parse_kernel_release(&buf[..populated]);
        if kernel_major == 0 {
            crate::warn!("unparsable kern.osrelease string, reporting version not satisfied");
        }
        release::at_least(
            release::marketing_version(kernel_major, kernel_minor),
            (major, minor, subminor),
        )
    }
}

/// Fill `buf` with the kernel release string, returning the populated length
/// (trailing NUL included).
fn read_kernel_release(buf: &mut [u8]) -> io::Result<usize> {
    let mut len = buf.len();
    let status = unsafe {
        libc::sysctlbyname(
            b"kern.osrelease\0".as_ptr().cast::<libc::c_char>(),
            buf.as_mut_ptr().cast::<libc::c_void>(),
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if status == 0 {
        Ok(len)
    } else {
        Err(io::Error::last_os_error())
    }
}
