//! Register map definitions for the MMA8451 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{DataRate, FifoMode, OutputSize, PowerMode, Range, SleepRate, SystemMode};

/// Identity byte returned by the `WHO_AM_I` register.
pub const DEVICE_ID: u8 = 0x1A;

/// Register address of `STATUS` / `F_STATUS` (shared, selected by `F_SETUP.F_MODE`).
pub const REG_STATUS: u8 = 0x00;
/// Register address of `OUT_X_MSB`.
pub const REG_OUT_X_MSB: u8 = 0x01;
/// Register address of `OUT_X_LSB`.
pub const REG_OUT_X_LSB: u8 = 0x02;
/// Register address of `OUT_Y_MSB`.
pub const REG_OUT_Y_MSB: u8 = 0x03;
/// Register address of `OUT_Y_LSB`.
pub const REG_OUT_Y_LSB: u8 = 0x04;
/// Register address of `OUT_Z_MSB`.
pub const REG_OUT_Z_MSB: u8 = 0x05;
/// Register address of `OUT_Z_LSB`.
pub const REG_OUT_Z_LSB: u8 = 0x06;
/// Register address of `F_SETUP`.
pub const REG_F_SETUP: u8 = 0x09;
/// Register address of `TRIG_CFG`.
pub const REG_TRIG_CFG: u8 = 0x0A;
/// Register address of `SYSMOD`.
pub const REG_SYSMOD: u8 = 0x0B;
/// Register address of `INT_SOURCE`.
pub const REG_INT_SOURCE: u8 = 0x0C;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0D;
/// Register address of `XYZ_DATA_CFG`.
pub const REG_XYZ_DATA_CFG: u8 = 0x0E;
/// Register address of `HP_FILTER_CUTOFF`.
pub const REG_HP_FILTER_CUTOFF: u8 = 0x0F;
/// Register address of `PL_STATUS`.
pub const REG_PL_STATUS: u8 = 0x10;
/// Register address of `PL_CFG`.
pub const REG_PL_CFG: u8 = 0x11;
/// Register address of `PL_COUNT`.
pub const REG_PL_COUNT: u8 = 0x12;
/// Register address of `PL_BF_ZCOMP`.
pub const REG_PL_BF_ZCOMP: u8 = 0x13;
/// Register address of `P_L_THS_REG`.
pub const REG_P_L_THS: u8 = 0x14;
/// Register address of `FF_MT_CFG`.
pub const REG_FF_MT_CFG: u8 = 0x15;
/// Register address of `FF_MT_SRC`.
pub const REG_FF_MT_SRC: u8 = 0x16;
/// Register address of `FF_MT_THS`.
pub const REG_FF_MT_THS: u8 = 0x17;
/// Register address of `FF_MT_COUNT`.
pub const REG_FF_MT_COUNT: u8 = 0x18;
/// Register address of `TRANSIENT_CFG`.
pub const REG_TRANSIENT_CFG: u8 = 0x1D;
/// Register address of `TRANSIENT_SRC`.
pub const REG_TRANSIENT_SRC: u8 = 0x1E;
/// Register address of `TRANSIENT_THS`.
pub const REG_TRANSIENT_THS: u8 = 0x1F;
/// Register address of `TRANSIENT_COUNT`.
pub const REG_TRANSIENT_COUNT: u8 = 0x20;
/// Register address of `PULSE_CFG`.
pub const REG_PULSE_CFG: u8 = 0x21;
/// Register address of `PULSE_SRC`.
pub const REG_PULSE_SRC: u8 = 0x22;
/// Register address of `PULSE_THSX`.
pub const REG_PULSE_THSX: u8 = 0x23;
/// Register address of `PULSE_THSY`.
pub const REG_PULSE_THSY: u8 = 0x24;
/// Register address of `PULSE_THSZ`.
pub const REG_PULSE_THSZ: u8 = 0x25;
/// Register address of `PULSE_TMLT`.
pub const REG_PULSE_TMLT: u8 = 0x26;
/// Register address of `PULSE_LTCY`.
pub const REG_PULSE_LTCY: u8 = 0x27;
/// Register address of `PULSE_WIND`.
pub const REG_PULSE_WIND: u8 = 0x28;
/// Register address of `ASLP_COUNT`.
pub const REG_ASLP_COUNT: u8 = 0x29;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: u8 = 0x2A;
/// Register address of `CTRL_REG2`.
pub const REG_CTRL_REG2: u8 = 0x2B;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL_REG3: u8 = 0x2C;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL_REG4: u8 = 0x2D;
/// Register address of `CTRL_REG5`.
pub const REG_CTRL_REG5: u8 = 0x2E;
/// Register address of `OFF_X`.
pub const REG_OFF_X: u8 = 0x2F;
/// Register address of `OFF_Y`.
pub const REG_OFF_Y: u8 = 0x30;
/// Register address of `OFF_Z`.
pub const REG_OFF_Z: u8 = 0x31;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<u8>;
}

/// Bitfield representation of the `STATUS` register (address `0x00`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // X-axis new data ready (bit 0).
    pub xdr: bool,
    // Y-axis new data ready (bit 1).
    pub ydr: bool,
    // Z-axis new data ready (bit 2).
    pub zdr: bool,
    // Any-axis new data ready (bit 3).
    pub zyxdr: bool,
    // X-axis data overwritten before read (bit 4).
    pub xow: bool,
    // Y-axis data overwritten before read (bit 5).
    pub yow: bool,
    // Z-axis data overwritten before read (bit 6).
    pub zow: bool,
    // Any-axis data overwritten before read (bit 7).
    pub zyxow: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `F_STATUS` register (address `0x00`, FIFO enabled).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoStatus {
    // FIFO sample counter (bits 5:0).
    pub f_cnt: B6,
    // FIFO watermark event (bit 6).
    pub f_wmrk_flag: bool,
    // FIFO overflow event (bit 7).
    pub f_ovf: bool,
}

impl From<u8> for FifoStatus {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoStatus> for u8 {
    fn from(value: FifoStatus) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `F_SETUP` register (address `0x09`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoSetup {
    // FIFO event sample count watermark (bits 5:0).
    pub f_wmrk: B6,
    // FIFO buffer overflow mode (bits 7:6).
    pub f_mode: FifoMode,
}

impl From<u8> for FifoSetup {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoSetup> for u8 {
    fn from(value: FifoSetup) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `TRIG_CFG` register (address `0x0A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerConfig {
    #[skip]
    __: B2,
    // Freefall/motion trigger (bit 2).
    pub trig_ff_mt: bool,
    // Pulse interrupt trigger (bit 3).
    pub trig_pulse: bool,
    // Landscape/portrait orientation trigger (bit 4).
    pub trig_lndprt: bool,
    // Transient interrupt trigger (bit 5).
    pub trig_trans: bool,
    #[skip]
    __: B2,
}

impl From<u8> for TriggerConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<TriggerConfig> for u8 {
    fn from(value: TriggerConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `SYSMOD` register (address `0x0B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sysmod {
    // Current system mode (bits 1:0).
    pub sysmod: SystemMode,
    // ODR periods elapsed since `fgerr` asserted (bits 6:2).
    pub fgt: B5,
    // FIFO gate error (bit 7).
    pub fgerr: bool,
}

impl From<u8> for Sysmod {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Sysmod> for u8 {
    fn from(value: Sysmod) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INT_SOURCE` register (address `0x0C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSource {
    // Data-ready interrupt status (bit 0).
    pub src_drdy: bool,
    #[skip]
    __: B1,
    // Freefall/motion interrupt status (bit 2).
    pub src_ff_mt: bool,
    // Pulse interrupt status (bit 3).
    pub src_pulse: bool,
    // Landscape/portrait interrupt status (bit 4).
    pub src_lndprt: bool,
    // Transient interrupt status (bit 5).
    pub src_trans: bool,
    // FIFO interrupt status (bit 6).
    pub src_fifo: bool,
    // Auto sleep/wake interrupt status (bit 7).
    pub src_aslp: bool,
}

impl From<u8> for IntSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<IntSource> for u8 {
    fn from(value: IntSource) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `XYZ_DATA_CFG` register (address `0x0E`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XyzDataCfg {
    // Full-scale range selection (bits 1:0).
    pub fs: Range,
    #[skip]
    __: B2,
    // High-pass filtered output enable (bit 4).
    pub hpf_out: bool,
    #[skip]
    __: B3,
}

impl From<u8> for XyzDataCfg {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<XyzDataCfg> for u8 {
    fn from(value: XyzDataCfg) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `HP_FILTER_CUTOFF` register (address `0x0F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpFilterCutoff {
    // Cutoff frequency selection (bits 1:0).
    pub sel: B2,
    #[skip]
    __: B2,
    // Low-pass filter enable for pulse processing (bit 4).
    pub pulse_lpf_en: bool,
    // High-pass filter bypass for pulse processing (bit 5).
    pub pulse_hpf_byp: bool,
    #[skip]
    __: B2,
}

impl From<u8> for HpFilterCutoff {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<HpFilterCutoff> for u8 {
    fn from(value: HpFilterCutoff) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PL_STATUS` register (address `0x10`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlStatus {
    // Back or front orientation (bit 0).
    pub bafro: bool,
    // Landscape/portrait orientation (bits 2:1).
    pub lapo: B2,
    #[skip]
    __: B3,
    // Z-tilt angle lockout (bit 6).
    pub lo: bool,
    // Orientation changed since last read (bit 7).
    pub newlp: bool,
}

impl From<u8> for PlStatus {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PlStatus> for u8 {
    fn from(value: PlStatus) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PL_CFG` register (address `0x11`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlConfig {
    #[skip]
    __: B6,
    // Portrait/landscape detection enable (bit 6).
    pub pl_en: bool,
    // Debounce counter mode selection (bit 7).
    pub dbcntm: bool,
}

impl From<u8> for PlConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PlConfig> for u8 {
    fn from(value: PlConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PL_BF_ZCOMP` register (address `0x13`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlBfZcomp {
    // Z-lock angle threshold (bits 2:0).
    pub zlock: B3,
    #[skip]
    __: B3,
    // Back/front trip angle threshold (bits 7:6).
    pub bkfr: B2,
}

impl From<u8> for PlBfZcomp {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PlBfZcomp> for u8 {
    fn from(value: PlBfZcomp) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `P_L_THS_REG` register (address `0x14`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlThreshold {
    // Hysteresis added to the trip threshold (bits 2:0).
    pub hys: B3,
    // Portrait/landscape trip threshold angle (bits 7:3).
    pub p_l_ths: B5,
}

impl From<u8> for PlThreshold {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PlThreshold> for u8 {
    fn from(value: PlThreshold) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `FF_MT_CFG` register (address `0x15`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfMtConfig {
    #[skip]
    __: B3,
    // Event flag enable on X (bit 3).
    pub xefe: bool,
    // Event flag enable on Y (bit 4).
    pub yefe: bool,
    // Event flag enable on Z (bit 5).
    pub zefe: bool,
    // Motion detect (1) / freefall detect (0) selection (bit 6).
    pub oae: bool,
    // Event latch enable (bit 7).
    pub ele: bool,
}

impl From<u8> for FfMtConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FfMtConfig> for u8 {
    fn from(value: FfMtConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `FF_MT_SRC` register (address `0x16`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfMtSource {
    // X motion polarity (bit 0).
    pub xhp: bool,
    // X motion flag (bit 1).
    pub xhe: bool,
    // Y motion polarity (bit 2).
    pub yhp: bool,
    // Y motion flag (bit 3).
    pub yhe: bool,
    // Z motion polarity (bit 4).
    pub zhp: bool,
    // Z motion flag (bit 5).
    pub zhe: bool,
    #[skip]
    __: B1,
    // Event active flag (bit 7).
    pub ea: bool,
}

impl From<u8> for FfMtSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FfMtSource> for u8 {
    fn from(value: FfMtSource) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `FF_MT_THS` register (address `0x17`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfMtThreshold {
    // Freefall/motion threshold (bits 6:0).
    pub ths: B7,
    // Debounce counter mode selection (bit 7).
    pub dbcntm: bool,
}

impl From<u8> for FfMtThreshold {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FfMtThreshold> for u8 {
    fn from(value: FfMtThreshold) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `TRANSIENT_CFG` register (address `0x1D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientConfig {
    // High-pass filter bypass (bit 0).
    pub hpf_byp: bool,
    // Event flag enable on X (bit 1).
    pub xtefe: bool,
    // Event flag enable on Y (bit 2).
    pub ytefe: bool,
    // Event flag enable on Z (bit 3).
    pub ztefe: bool,
    // Transient event latch enable (bit 4).
    pub ele: bool,
    #[skip]
    __: B3,
}

impl From<u8> for TransientConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<TransientConfig> for u8 {
    fn from(value: TransientConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `TRANSIENT_SRC` register (address `0x1E`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientSource {
    // Polarity of the X transient event (bit 0).
    pub x_trans_pol: bool,
    // X transient event (bit 1).
    pub xtranse: bool,
    // Polarity of the Y transient event (bit 2).
    pub y_trans_pol: bool,
    // Y transient event (bit 3).
    pub ytranse: bool,
    // Polarity of the Z transient event (bit 4).
    pub z_trans_pol: bool,
    // Z transient event (bit 5).
    pub ztranse: bool,
    // Event active flag (bit 6).
    pub ea: bool,
    #[skip]
    __: B1,
}

impl From<u8> for TransientSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<TransientSource> for u8 {
    fn from(value: TransientSource) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `TRANSIENT_THS` register (address `0x1F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientThreshold {
    // Transient threshold (bits 6:0).
    pub ths: B7,
    // Debounce counter mode selection (bit 7).
    pub dbcntm: bool,
}

impl From<u8> for TransientThreshold {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<TransientThreshold> for u8 {
    fn from(value: TransientThreshold) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PULSE_CFG` register (address `0x21`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseConfig {
    // Single pulse event enable on X (bit 0).
    pub xspefe: bool,
    // Double pulse event enable on X (bit 1).
    pub xdpefe: bool,
    // Single pulse event enable on Y (bit 2).
    pub yspefe: bool,
    // Double pulse event enable on Y (bit 3).
    pub ydpefe: bool,
    // Single pulse event enable on Z (bit 4).
    pub zspefe: bool,
    // Double pulse event enable on Z (bit 5).
    pub zdpefe: bool,
    // Pulse event latch enable (bit 6).
    pub ele: bool,
    // Double pulse abort (bit 7).
    pub dpa: bool,
}

impl From<u8> for PulseConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PulseConfig> for u8 {
    fn from(value: PulseConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PULSE_SRC` register (address `0x22`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseSource {
    // X pulse polarity (bit 0).
    pub polx: bool,
    // Y pulse polarity (bit 1).
    pub poly: bool,
    // Z pulse polarity (bit 2).
    pub polz: bool,
    // Double pulse on first event (bit 3).
    pub dpe: bool,
    // X-axis event (bit 4).
    pub axx: bool,
    // Y-axis event (bit 5).
    pub axy: bool,
    // Z-axis event (bit 6).
    pub axz: bool,
    // Event active flag (bit 7).
    pub ea: bool,
}

impl From<u8> for PulseSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PulseSource> for u8 {
    fn from(value: PulseSource) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield layout shared by the `PULSE_THSX`/`PULSE_THSY`/`PULSE_THSZ`
/// registers (addresses `0x23`–`0x25`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseThreshold {
    // Pulse threshold (bits 6:0).
    pub ths: B7,
    #[skip]
    __: B1,
}

impl From<u8> for PulseThreshold {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PulseThreshold> for u8 {
    fn from(value: PulseThreshold) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG1` register (address `0x2A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1 {
    // Active (1) or standby (0) mode (bit 0).
    pub active: bool,
    // Fast-read mode; selects 8-bit samples (bit 1).
    pub f_read: OutputSize,
    // Reduced noise mode enable (bit 2).
    pub lnoise: bool,
    // Output data rate selection (bits 5:3).
    pub dr: DataRate,
    // Auto-sleep sample rate selection (bits 7:6).
    pub aslp_rate: SleepRate,
}

impl From<u8> for CtrlReg1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg1> for u8 {
    fn from(value: CtrlReg1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG2` register (address `0x2B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg2 {
    // Active mode power scheme selection (bits 1:0).
    pub mods: PowerMode,
    // Auto-sleep enable (bit 2).
    pub slpe: bool,
    // Sleep mode power scheme selection (bits 4:3).
    pub smods: PowerMode,
    #[skip]
    __: B1,
    // Software reset (bit 6).
    pub rst: bool,
    // Self-test enable (bit 7).
    pub st: bool,
}

impl From<u8> for CtrlReg2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg2> for u8 {
    fn from(value: CtrlReg2) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG3` register (address `0x2C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg3 {
    // Push-pull (0) or open drain (1) interrupt pads (bit 0).
    pub pp_od: bool,
    // Interrupt polarity; 0 active low, 1 active high (bit 1).
    pub ipol: bool,
    #[skip]
    __: B1,
    // Freefall/motion wake from sleep (bit 3).
    pub wake_ff_mt: bool,
    // Pulse wake from sleep (bit 4).
    pub wake_pulse: bool,
    // Orientation wake from sleep (bit 5).
    pub wake_lndprt: bool,
    // Transient wake from sleep (bit 6).
    pub wake_trans: bool,
    // FIFO gate bypass (bit 7).
    pub fifo_gate: bool,
}

impl From<u8> for CtrlReg3 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg3> for u8 {
    fn from(value: CtrlReg3) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG4` register (address `0x2D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    // Data-ready interrupt enable (bit 0).
    pub int_en_drdy: bool,
    #[skip]
    __: B1,
    // Freefall/motion interrupt enable (bit 2).
    pub int_en_ff_mt: bool,
    // Pulse interrupt enable (bit 3).
    pub int_en_pulse: bool,
    // Orientation interrupt enable (bit 4).
    pub int_en_lndprt: bool,
    // Transient interrupt enable (bit 5).
    pub int_en_trans: bool,
    // FIFO interrupt enable (bit 6).
    pub int_en_fifo: bool,
    // Auto sleep/wake interrupt enable (bit 7).
    pub int_en_aslp: bool,
}

impl From<u8> for CtrlReg4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg4> for u8 {
    fn from(value: CtrlReg4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG5` register (address `0x2E`).
///
/// A set bit routes the corresponding interrupt to INT1, a clear bit to INT2.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg5 {
    // Data-ready interrupt pin routing (bit 0).
    pub int_cfg_drdy: bool,
    #[skip]
    __: B1,
    // Freefall/motion interrupt pin routing (bit 2).
    pub int_cfg_ff_mt: bool,
    // Pulse interrupt pin routing (bit 3).
    pub int_cfg_pulse: bool,
    // Orientation interrupt pin routing (bit 4).
    pub int_cfg_lndprt: bool,
    // Transient interrupt pin routing (bit 5).
    pub int_cfg_trans: bool,
    // FIFO interrupt pin routing (bit 6).
    pub int_cfg_fifo: bool,
    // Auto sleep/wake interrupt pin routing (bit 7).
    pub int_cfg_aslp: bool,
}

impl From<u8> for CtrlReg5 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg5> for u8 {
    fn from(value: CtrlReg5) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Status {
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for FifoStatus {
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for FifoSetup {
    const ADDRESS: u8 = REG_F_SETUP;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for TriggerConfig {
    const ADDRESS: u8 = REG_TRIG_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for Sysmod {
    const ADDRESS: u8 = REG_SYSMOD;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for IntSource {
    const ADDRESS: u8 = REG_INT_SOURCE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for XyzDataCfg {
    const ADDRESS: u8 = REG_XYZ_DATA_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for HpFilterCutoff {
    const ADDRESS: u8 = REG_HP_FILTER_CUTOFF;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for PlStatus {
    const ADDRESS: u8 = REG_PL_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for PlConfig {
    const ADDRESS: u8 = REG_PL_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x80);
}

impl Register for PlBfZcomp {
    const ADDRESS: u8 = REG_PL_BF_ZCOMP;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for PlThreshold {
    const ADDRESS: u8 = REG_P_L_THS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for FfMtConfig {
    const ADDRESS: u8 = REG_FF_MT_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for FfMtSource {
    const ADDRESS: u8 = REG_FF_MT_SRC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for FfMtThreshold {
    const ADDRESS: u8 = REG_FF_MT_THS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for TransientConfig {
    const ADDRESS: u8 = REG_TRANSIENT_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for TransientSource {
    const ADDRESS: u8 = REG_TRANSIENT_SRC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for TransientThreshold {
    const ADDRESS: u8 = REG_TRANSIENT_THS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for PulseConfig {
    const ADDRESS: u8 = REG_PULSE_CFG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for PulseSource {
    const ADDRESS: u8 = REG_PULSE_SRC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for CtrlReg1 {
    const ADDRESS: u8 = REG_CTRL_REG1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for CtrlReg2 {
    const ADDRESS: u8 = REG_CTRL_REG2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for CtrlReg3 {
    const ADDRESS: u8 = REG_CTRL_REG3;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for CtrlReg4 {
    const ADDRESS: u8 = REG_CTRL_REG4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for CtrlReg5 {
    const ADDRESS: u8 = REG_CTRL_REG5;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DataRate, OutputSize, Range, SleepRate};

    /// Validates that CTRL_REG1 bitfields match the datasheet layout.
    #[test]
    fn ctrl_reg1_layout_matches_datasheet() {
        let reg = CtrlReg1::new()
            .with_active(true)
            .with_f_read(OutputSize::Bits8)
            .with_lnoise(true)
            .with_dr(DataRate::Hz100)
            .with_aslp_rate(SleepRate::Hz6_25);

        assert_eq!(u8::from(reg), 0b10_011_1_1_1);

        let decoded = CtrlReg1::from(u8::from(reg));
        assert!(decoded.active());
        assert_eq!(decoded.f_read(), OutputSize::Bits8);
        assert!(decoded.lnoise());
        assert_eq!(decoded.dr(), DataRate::Hz100);
        assert_eq!(decoded.aslp_rate(), SleepRate::Hz6_25);
    }

    #[test]
    fn xyz_data_cfg_layout_matches_datasheet() {
        let reg = XyzDataCfg::new().with_fs(Range::Range4g).with_hpf_out(true);
        assert_eq!(u8::from(reg), 0b000_1_00_01);

        let decoded = XyzDataCfg::from(0b0001_0010);
        assert_eq!(decoded.fs(), Range::Range8g);
        assert!(decoded.hpf_out());
    }

    #[test]
    fn ctrl_reg2_reset_bit_is_bit_six() {
        let reg = CtrlReg2::new().with_rst(true);
        assert_eq!(u8::from(reg), 0x40);
    }

    #[test]
    fn status_flags_unpack_per_bit() {
        let status = Status::from(0b1000_1001);
        assert!(status.zyxow());
        assert!(status.zyxdr());
        assert!(status.xdr());
        assert!(!status.zow());
        assert!(!status.ydr());
    }

    #[test]
    fn fifo_status_packs_six_bit_counter() {
        let status = FifoStatus::from(0b11_101010);
        assert!(status.f_ovf());
        assert!(status.f_wmrk_flag());
        assert_eq!(status.f_cnt(), 0b101010);
    }

    #[test]
    fn fifo_setup_composite_agrees_with_bits() {
        let setup = FifoSetup::new()
            .with_f_mode(crate::params::FifoMode::RingBuffer)
            .with_f_wmrk(0b010110);
        assert_eq!(u8::from(setup), 0b01_010110);
    }

    /// Every layout must survive decode/encode for all 256 raw bytes,
    /// reserved bits included.
    #[test]
    fn all_layouts_roundtrip_every_byte() {
        for b in 0..=255u8 {
            assert_eq!(u8::from(Status::from(b)), b);
            assert_eq!(u8::from(FifoStatus::from(b)), b);
            assert_eq!(u8::from(FifoSetup::from(b)), b);
            assert_eq!(u8::from(TriggerConfig::from(b)), b);
            assert_eq!(u8::from(Sysmod::from(b)), b);
            assert_eq!(u8::from(IntSource::from(b)), b);
            assert_eq!(u8::from(XyzDataCfg::from(b)), b);
            assert_eq!(u8::from(HpFilterCutoff::from(b)), b);
            assert_eq!(u8::from(PlStatus::from(b)), b);
            assert_eq!(u8::from(PlConfig::from(b)), b);
            assert_eq!(u8::from(PlBfZcomp::from(b)), b);
            assert_eq!(u8::from(PlThreshold::from(b)), b);
            assert_eq!(u8::from(FfMtConfig::from(b)), b);
            assert_eq!(u8::from(FfMtSource::from(b)), b);
            assert_eq!(u8::from(FfMtThreshold::from(b)), b);
            assert_eq!(u8::from(TransientConfig::from(b)), b);
            assert_eq!(u8::from(TransientSource::from(b)), b);
            assert_eq!(u8::from(TransientThreshold::from(b)), b);
            assert_eq!(u8::from(PulseConfig::from(b)), b);
            assert_eq!(u8::from(PulseSource::from(b)), b);
            assert_eq!(u8::from(PulseThreshold::from(b)), b);
            assert_eq!(u8::from(CtrlReg1::from(b)), b);
            assert_eq!(u8::from(CtrlReg2::from(b)), b);
            assert_eq!(u8::from(CtrlReg3::from(b)), b);
            assert_eq!(u8::from(CtrlReg4::from(b)), b);
            assert_eq!(u8::from(CtrlReg5::from(b)), b);
        }
    }

    /// Packed integer fields reject values wider than the field.
    #[test]
    fn packed_fields_enforce_width() {
        assert!(FfMtThreshold::new().with_ths_checked(0x7F).is_ok());
        assert!(FfMtThreshold::new().with_ths_checked(0x80).is_err());
        assert!(FifoSetup::new().with_f_wmrk_checked(63).is_ok());
        assert!(FifoSetup::new().with_f_wmrk_checked(64).is_err());
        assert!(PlThreshold::new().with_p_l_ths_checked(31).is_ok());
        assert!(PlThreshold::new().with_p_l_ths_checked(32).is_err());
    }
}
