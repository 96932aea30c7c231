//! Derives an approximate marketing OS version from the kernel release
//! string reported by `kern.osrelease`, e.g. "17.7.0" is macOS 10.13.7.
//!
//! Everything here is pure so the parsing and mapping can be exercised on any
//! host; the syscall that fills the buffer lives in `check::fallback`.

/// Capacity of the buffer handed to the `kern.osrelease` query.
pub const RELEASE_BUF_LEN: usize = 24;

fn digit(b: u8) -> Option<u32> {
    if b.is_ascii_digit() {
        Some(u32::from(b - b'0'))
    } else {
        None
    }
}

/// Read one or two digits starting at `idx`, returning the value and the
/// index of the first unread byte. `idx` unchanged means no digit was there.
fn read_field(buf: &[u8], idx: usize) -> (u32, usize) {
    let Some(first) = buf.get(idx).copied().and_then(digit) else {
        return (0, idx);
    };
    match buf.get(idx + 1).copied().and_then(digit) {
        Some(second) => (first * 10 + second, idx + 2),
        None => (first, idx + 1),
    }
}

/// Greedily parse `major[.minor]` from the leading bytes of a kernel release
/// string.
///
/// The first byte outside the digit/`.` pattern stops the scan and any field
/// never reached stays 0, so a truncated or damaged buffer parses low rather
/// than failing. The kernel subminor is deliberately not read, it carries no
/// signal for the marketing mapping.
#[must_use]
pub fn parse_kernel_release(buf: &[u8]) -> (u32, u32) {
    let (major, after_major) = read_field(buf, 0);
    if after_major == 0 {
        return (0, 0);
    }
    if buf.get(after_major) != Some(&b'.') {
        return (major, 0);
    }
    let dot = after_major + 1;
    let (minor, after_minor) = read_field(buf, dot);
    if after_minor == dot {
        return (major, 0);
    }
    (major, minor)
}

/// Map a parsed kernel release to an approximate marketing version.
///
/// Darwin 19 and earlier report the 10.x line: kernel 17.7 is macOS 10.13.7.
/// Darwin 20 renumbered: kernel 24.1 is macOS 15.1, and the release string no
/// longer reliably encodes the subminor, so it stays 0. Kernel majors below 4
/// predate anything this mapping models and come back as (0, 0, 0), keeping a
/// damaged release string on the under-reporting side.
#[must_use]
pub fn marketing_version(kernel_major: u32, kernel_minor: u32) -> (u32, u32, u32) {
    if kernel_major < 4 {
        (0, 0, 0)
    } else if kernel_major < 20 {
        (10, kernel_major - 4, kernel_minor)
    } else {
        (kernel_major - 9, kernel_minor, 0)
    }
}

/// Ordered comparison between the derived host version and a requested
/// minimum. Major and minor chain strictly, the subminor closes with
/// greater-or-equal; availability call sites depend on this exact tie-break.
#[must_use]
pub fn at_least(derived: (u32, u32, u32), requested: (u32, u32, u32)) -> bool {
    let (dmaj, dmin, dsub) = derived;
    let (maj, min, sub) = requested;
    dmaj > maj
        || (dmaj == maj && dmin > min)
        || (dmaj == maj && dmin == min && dsub >= sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(s: &str) -> (u32, u32, u32) {
        let (kmaj, kmin) = parse_kernel_release(s.as_bytes());
        marketing_version(kmaj, kmin)
    }

    #[test]
    fn high_sierra_era() {
        assert_eq!(derive("17.7.0"), (10, 13, 7));
        assert!(at_least(derive("17.7.0"), (10, 13, 7)));
        assert!(!at_least(derive("17.7.0"), (10, 13, 8)));
        assert!(!at_least(derive("17.7.0"), (10, 14, 0)));
    }

    #[test]
    fn catalina_era() {
        assert_eq!(derive("19.6.0"), (10, 15, 6));
        assert!(at_least(derive("19.6.0"), (10, 15, 6)));
        assert!(!at_least(derive("19.6.0"), (10, 15, 7)));
    }

    #[test]
    fn sequoia_era() {
        assert_eq!(derive("24.1.0"), (15, 1, 0));
        assert!(at_least(derive("24.1.0"), (15, 1, 0)));
        assert!(at_least(derive("24.1.0"), (15, 0, 0)));
        assert!(!at_least(derive("24.1.0"), (16, 0, 0)));
    }

    #[test]
    fn greedy_scan_reads_at_most_two_digits_per_field() {
        assert_eq!(parse_kernel_release(b"123.456"), (12, 0));
        assert_eq!(parse_kernel_release(b"9.87.whatever"), (9, 87));
        assert_eq!(parse_kernel_release(b"20.3"), (20, 3));
        assert_eq!(parse_kernel_release(b"18"), (18, 0));
    }

    #[test]
    fn truncated_buffers_never_read_out_of_bounds() {
        assert_eq!(parse_kernel_release(b""), (0, 0));
        assert_eq!(parse_kernel_release(b"1"), (1, 0));
        assert_eq!(parse_kernel_release(b"17."), (17, 0));
        assert_eq!(parse_kernel_release(&b"17.7"[..3]), (17, 0));
    }

    #[test]
    fn garbage_input_under_reports() {
        assert_eq!(derive(""), (0, 0, 0));
        assert_eq!(derive("banana"), (0, 0, 0));
        assert_eq!(derive("."), (0, 0, 0));
        assert_eq!(derive("17.x"), (10, 13, 0));
        assert!(!at_least(derive("banana"), (10, 0, 0)));
        assert!(at_least(derive("banana"), (0, 0, 0)));
    }

    #[test]
    fn pre_darwin_4_majors_map_to_zero() {
        assert_eq!(marketing_version(0, 0), (0, 0, 0));
        assert_eq!(marketing_version(3, 9), (0, 0, 0));
        assert_eq!(marketing_version(4, 0), (10, 0, 0));
    }

    #[test]
    fn monotone_over_requested_versions() {
        let host = derive("22.4.0");
        assert_eq!(host, (13, 4, 0));
        for satisfied in [(12, 9, 9), (13, 3, 0), (13, 4, 0)] {
            assert!(at_least(host, satisfied));
        }
        for unsatisfied in [(13, 4, 1), (13, 5, 0), (14, 0, 0)] {
            assert!(!at_least(host, unsatisfied));
        }
    }
}
