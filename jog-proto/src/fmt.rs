//! No-std compatible number formatting for the jog command line.
//!
//! These functions write formatted numbers directly to byte buffers without
//! requiring heap allocation or the standard library.

/// Maximum bytes produced by [`write_f32`]: sign(1) + integer(20) + dot(1) +
/// six fractional digits(6).
pub(crate) const MAX_F32_LEN: usize = 28;

/// Write a u64 as an unsigned decimal string.
///
/// Returns the number of bytes written (1-20 bytes).
///
/// # Panics
///
/// Panics if `buf.len() < 20` (max size: `u64::MAX`).
#[inline]
pub(crate) fn write_u64(buf: &mut [u8], value: u64) -> usize {
    debug_assert!(buf.len() >= 20, "buffer too small for u64");

    if value == 0 {
        buf[0] = b'0';
        return 1;
    }

    // Write digits in reverse order to temporary buffer
    let mut temp = [0u8; 20];
    let mut n = value;
    let mut len = 0;
    while n > 0 {
        temp[len] = b'0' + (n % 10) as u8;
        n /= 10;
        len += 1;
    }

    // Copy digits in correct order
    for i in (0..len).rev() {
        buf[len - 1 - i] = temp[i];
    }

    len
}

/// Write an f32 as a signed decimal string with exactly six fractional
/// digits, matching the controller's expected `%f` rendering.
///
/// Returns the number of bytes written.
///
/// # Panics
///
/// Panics if `buf.len() < MAX_F32_LEN`.
#[inline]
pub(crate) fn write_f32(buf: &mut [u8], value: f32) -> usize {
    debug_assert!(buf.len() >= MAX_F32_LEN, "buffer too small for f32");

    let mut pos = 0;
    let mut v = value;
    if v.is_sign_negative() {
        buf[0] = b'-';
        pos = 1;
        v = -v;
    }

    // Integer part truncates toward zero; the cast saturates for values
    // beyond u64 range, where the caller's line bound takes over anyway.
    let mut whole = v as u64;
    let mut frac = ((v - whole as f32) * 1_000_000.0 + 0.5) as u32;
    if frac >= 1_000_000 {
        // Fractional rounding carried into the integer part.
        whole = whole.saturating_add(1);
        frac = 0;
    }

    pos += write_u64(&mut buf[pos..], whole);

    buf[pos] = b'.';
    pos += 1;

    // Six fractional digits, zero padded
    let mut div = 100_000;
    for _ in 0..6 {
        buf[pos] = b'0' + (frac / div) as u8;
        frac %= div;
        div /= 10;
        pos += 1;
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_u64() {
        let mut buf = [0u8; 20];

        let len = write_u64(&mut buf, 0);
        assert_eq!(&buf[..len], b"0");

        let len = write_u64(&mut buf, 1);
        assert_eq!(&buf[..len], b"1");

        let len = write_u64(&mut buf, 327680);
        assert_eq!(&buf[..len], b"327680");

        let len = write_u64(&mut buf, u64::MAX);
        assert_eq!(&buf[..len], b"18446744073709551615");
    }

    #[test]
    fn test_write_f32_six_decimals() {
        let mut buf = [0u8; MAX_F32_LEN];

        let len = write_f32(&mut buf, 0.0);
        assert_eq!(&buf[..len], b"0.000000");

        let len = write_f32(&mut buf, 50.0);
        assert_eq!(&buf[..len], b"50.000000");

        let len = write_f32(&mut buf, -50.0);
        assert_eq!(&buf[..len], b"-50.000000");

        let len = write_f32(&mut buf, 120.0);
        assert_eq!(&buf[..len], b"120.000000");

        let len = write_f32(&mut buf, 0.5);
        assert_eq!(&buf[..len], b"0.500000");

        let len = write_f32(&mut buf, -0.25);
        assert_eq!(&buf[..len], b"-0.250000");
    }

    #[test]
    fn test_write_f32_rounding_carry() {
        let mut buf = [0u8; MAX_F32_LEN];
        let len = write_f32(&mut buf, 0.999_999_9);
        assert_eq!(&buf[..len], b"1.000000");
    }

    #[test]
    fn test_write_f32_negative_zero() {
        let mut buf = [0u8; MAX_F32_LEN];
        let len = write_f32(&mut buf, -0.0);
        assert_eq!(&buf[..len], b"-0.000000");
    }
}
