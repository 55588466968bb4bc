//! Acceleration sample decoding.
//!
//! The sensor left-justifies each 14-bit two's-complement sample across an
//! MSB/LSB register pair; in fast-read mode only the MSB byte is transferred.
//! Decoding reassembles the raw counts, sign-extends them and scales by the
//! divisor for the configured range and width.

use crate::params::{OutputSize, Range};

/// One decoded X/Y/Z sample in metres per second squared.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X-axis acceleration.
    pub x: f32,
    /// Y-axis acceleration.
    pub y: f32,
    /// Z-axis acceleration.
    pub z: f32,
}

/// Reassembles and sign-extends one 14-bit axis sample.
///
/// The value occupies the upper 14 bits of the register pair; the low two
/// bits of the LSB register are reserved and discarded.
pub fn unpack_axis_14bit(msb: u8, lsb: u8) -> i16 {
    let raw = ((msb as u16) << 6) | ((lsb as u16) >> 2);
    if raw > 0x1FFF {
        raw as i16 - 0x4000
    } else {
        raw as i16
    }
}

/// Sign-extends one 8-bit fast-read axis sample.
pub fn unpack_axis_8bit(raw: u8) -> i16 {
    raw as i8 as i16
}

/// Decodes a 6-byte full-resolution burst into a scaled sample.
pub fn decode_14bit(raw: &[u8; 6], range: Range) -> Acceleration {
    let divisor = range.divisor(OutputSize::Bits14);
    Acceleration {
        x: unpack_axis_14bit(raw[0], raw[1]) as f32 / divisor,
        y: unpack_axis_14bit(raw[2], raw[3]) as f32 / divisor,
        z: unpack_axis_14bit(raw[4], raw[5]) as f32 / divisor,
    }
}

/// Decodes a 3-byte fast-read burst into a scaled sample.
pub fn decode_8bit(raw: &[u8; 3], range: Range) -> Acceleration {
    let divisor = range.divisor(OutputSize::Bits8);
    Acceleration {
        x: unpack_axis_8bit(raw[0]) as f32 / divisor,
        y: unpack_axis_8bit(raw[1]) as f32 / divisor,
        z: unpack_axis_8bit(raw[2]) as f32 / divisor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GRAVITY_ACCEL;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn unpack_14bit_zero() {
        assert_eq!(unpack_axis_14bit(0x00, 0x00), 0);
    }

    #[test]
    fn unpack_14bit_max_positive() {
        assert_eq!(unpack_axis_14bit(0x7F, 0xFC), 8191);
    }

    #[test]
    fn unpack_14bit_boundary_negative() {
        assert_eq!(unpack_axis_14bit(0x80, 0x00), -8192);
    }

    #[test]
    fn unpack_14bit_minus_one() {
        assert_eq!(unpack_axis_14bit(0xFF, 0xFC), -1);
    }

    #[test]
    fn unpack_14bit_discards_reserved_lsb_bits() {
        assert_eq!(
            unpack_axis_14bit(0x01, 0x03),
            unpack_axis_14bit(0x01, 0x00)
        );
    }

    #[test]
    fn unpack_8bit_sign_extends() {
        assert_eq!(unpack_axis_8bit(0x00), 0);
        assert_eq!(unpack_axis_8bit(0x7F), 127);
        assert_eq!(unpack_axis_8bit(0x80), -128);
        assert_eq!(unpack_axis_8bit(0xFF), -1);
    }

    #[test]
    fn decode_14bit_scales_with_2g_divisor() {
        let sample = decode_14bit(&[0x7F, 0xFC, 0x00, 0x00, 0x80, 0x00], Range::Range2g);
        let divisor = 4096.0 / GRAVITY_ACCEL;
        assert!(close(sample.x, 8191.0 / divisor));
        assert!(close(sample.y, 0.0));
        assert!(close(sample.z, -8192.0 / divisor));
        // Positive full scale sits just under two standard gravities.
        assert!(close(sample.x, 19.6109));
    }

    #[test]
    fn decode_14bit_selects_range_divisor() {
        let raw = [0x10, 0x00, 0x10, 0x00, 0x10, 0x00];
        let at_2g = decode_14bit(&raw, Range::Range2g);
        let at_4g = decode_14bit(&raw, Range::Range4g);
        let at_8g = decode_14bit(&raw, Range::Range8g);
        assert!(close(at_4g.x, at_2g.x * 2.0));
        assert!(close(at_8g.x, at_2g.x * 4.0));
    }

    #[test]
    fn decode_8bit_scales_with_2g_divisor() {
        let sample = decode_8bit(&[0x40, 0x00, 0xC0], Range::Range2g);
        let divisor = 64.0 / GRAVITY_ACCEL;
        assert!(close(sample.x, 64.0 / divisor));
        assert!(close(sample.y, 0.0));
        assert!(close(sample.z, -64.0 / divisor));
    }

    #[test]
    fn reserved_range_passes_raw_counts_through() {
        let sample = decode_14bit(&[0x7F, 0xFC, 0x00, 0x00, 0x00, 0x00], Range::Reserved);
        assert!(close(sample.x, 8191.0));
    }
}
