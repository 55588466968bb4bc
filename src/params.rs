//! Strongly typed parameter enumerations for the MMA8451 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config), the register bitfields and the high-level
//! driver APIs. Prefer these types over raw integers to keep configuration
//! values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use mma8451::params::{DataRate, OutputSize, Range};
//!
//! let range = Range::Range2g;
//! let size = OutputSize::Bits14;
//! let rate = DataRate::Hz800;
//! let _ = (range, size, rate);
//! ```

use modular_bitfield::prelude::Specifier;

/// Standard gravity in metres per second squared.
pub const GRAVITY_ACCEL: f32 = 9.80665;

/// Full-scale measurement ranges encoded in `XYZ_DATA_CFG.FS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum Range {
    /// ±2 g full scale.
    Range2g = 0b00,
    /// ±4 g full scale.
    Range4g = 0b01,
    /// ±8 g full scale.
    Range8g = 0b10,
    /// Reserved encoding; samples pass through unscaled.
    Reserved = 0b11,
}

impl Range {
    /// Returns the divisor converting a raw sample of the given width into
    /// metres per second squared.
    ///
    /// Each divisor is the positive full-scale count divided by standard
    /// gravity, so `raw / divisor` yields acceleration in m/s². The reserved
    /// encoding returns 1.0, leaving raw counts untouched.
    pub const fn divisor(self, size: OutputSize) -> f32 {
        match (self, size) {
            (Self::Range2g, OutputSize::Bits14) => 0x1000 as f32 / GRAVITY_ACCEL,
            (Self::Range4g, OutputSize::Bits14) => 0x800 as f32 / GRAVITY_ACCEL,
            (Self::Range8g, OutputSize::Bits14) => 0x400 as f32 / GRAVITY_ACCEL,
            (Self::Range2g, OutputSize::Bits8) => 0x40 as f32 / GRAVITY_ACCEL,
            (Self::Range4g, OutputSize::Bits8) => 0x20 as f32 / GRAVITY_ACCEL,
            (Self::Range8g, OutputSize::Bits8) => 0x10 as f32 / GRAVITY_ACCEL,
            (Self::Reserved, _) => 1.0,
        }
    }
}

/// Sample width selection encoded in `CTRL_REG1.F_READ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum OutputSize {
    /// 14-bit full-resolution samples (two bytes per axis).
    Bits14 = 0,
    /// 8-bit fast-read samples (one byte per axis).
    Bits8 = 1,
}

impl OutputSize {
    /// Number of bytes occupied by one X/Y/Z sample set.
    pub const fn sample_bytes(self) -> usize {
        match self {
            Self::Bits14 => 6,
            Self::Bits8 => 3,
        }
    }
}

/// Output data rate selections encoded in `CTRL_REG1.DR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 3]
pub enum DataRate {
    /// 800 Hz output data rate.
    Hz800 = 0b000,
    /// 400 Hz output data rate.
    Hz400 = 0b001,
    /// 200 Hz output data rate.
    Hz200 = 0b010,
    /// 100 Hz output data rate.
    Hz100 = 0b011,
    /// 50 Hz output data rate.
    Hz50 = 0b100,
    /// 12.5 Hz output data rate.
    Hz12_5 = 0b101,
    /// 6.25 Hz output data rate.
    Hz6_25 = 0b110,
    /// 1.56 Hz output data rate.
    Hz1_56 = 0b111,
}

impl DataRate {
    /// Returns the sample period in microseconds.
    pub const fn period_us(self) -> u32 {
        match self {
            Self::Hz800 => 1_250,
            Self::Hz400 => 2_500,
            Self::Hz200 => 5_000,
            Self::Hz100 => 10_000,
            Self::Hz50 => 20_000,
            Self::Hz12_5 => 80_000,
            Self::Hz6_25 => 160_000,
            Self::Hz1_56 => 641_026,
        }
    }
}

/// Auto-sleep sample rate selections encoded in `CTRL_REG1.ASLP_RATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum SleepRate {
    /// 50 Hz sleep-mode sampling.
    Hz50 = 0b00,
    /// 12.5 Hz sleep-mode sampling.
    Hz12_5 = 0b01,
    /// 6.25 Hz sleep-mode sampling.
    Hz6_25 = 0b10,
    /// 1.56 Hz sleep-mode sampling.
    Hz1_56 = 0b11,
}

/// Power scheme selections encoded in `CTRL_REG2.MODS` / `CTRL_REG2.SMODS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum PowerMode {
    /// Normal operation.
    Normal = 0b00,
    /// Low noise, low power operation.
    LowNoiseLowPower = 0b01,
    /// High-resolution operation.
    HighResolution = 0b10,
    /// Low power operation.
    LowPower = 0b11,
}

/// System operating modes reported by `SYSMOD.SYSMOD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum SystemMode {
    /// Standby mode.
    Standby = 0b00,
    /// Wake mode.
    Wake = 0b01,
    /// Sleep mode.
    Sleep = 0b10,
    /// Not defined by the datasheet.
    Reserved = 0b11,
}

/// FIFO buffer modes encoded in `F_SETUP.F_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum FifoMode {
    /// FIFO disabled.
    Disabled = 0b00,
    /// Circular (ring buffer) mode; oldest samples are overwritten.
    RingBuffer = 0b01,
    /// Fill mode; the buffer stops accepting samples once full.
    StopBuffer = 0b10,
    /// Trigger mode; fires once the watermark is exceeded.
    Trigger = 0b11,
}
