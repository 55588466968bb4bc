//! High-level MMA8451 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Mma8451Interface;
use crate::params::{DataRate, OutputSize, PowerMode, Range};
use crate::registers::{
    CtrlReg1, CtrlReg2, CtrlReg3, CtrlReg4, CtrlReg5, FfMtConfig, FfMtSource, FfMtThreshold,
    FifoSetup, FifoStatus, HpFilterCutoff, IntSource, PlBfZcomp, PlConfig, PlStatus, PlThreshold,
    PulseConfig, PulseSource, PulseThreshold, Register, Status, Sysmod, TransientConfig,
    TransientSource, TransientThreshold, TriggerConfig, XyzDataCfg, DEVICE_ID, REG_ASLP_COUNT,
    REG_FF_MT_COUNT, REG_OFF_X, REG_OFF_Y, REG_OFF_Z, REG_OUT_X_MSB, REG_PL_COUNT,
    REG_PULSE_LTCY, REG_PULSE_THSX, REG_PULSE_THSY, REG_PULSE_THSZ, REG_PULSE_TMLT,
    REG_PULSE_WIND, REG_TRANSIENT_COUNT, REG_WHO_AM_I,
};
use crate::sample::{self, Acceleration};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// MMA8451 datasheet soft-reset boot time (milliseconds).
const RESET_SETTLE_DELAY_MS: u32 = 1;

/// High-level synchronous driver for the MMA8451 accelerometer.
///
/// The driver tracks the last successfully written range and sample width so
/// acceleration reads always scale with the configuration the device actually
/// holds. Access is `&mut self` throughout; sharing a driver across threads
/// requires external mutual exclusion.
pub struct Mma8451<IFACE> {
    interface: IFACE,
    range: Range,
    output_size: OutputSize,
}

impl<IFACE> Mma8451<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// The session state starts at the device's reset defaults (±2g,
    /// 14-bit); call [`init`](Self::init) before relying on it.
    pub fn new(interface: IFACE) -> Self {
        Self {
            interface,
            range: Range::Range2g,
            output_size: OutputSize::Bits14,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the range used to scale samples.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Returns the sample width used to decode samples.
    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }
}

impl<I2C> Mma8451<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports using the default address.
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cInterface::new(i2c))
    }

    /// Convenience constructor for I2C transports with an explicit address.
    pub fn new_i2c_with_address(i2c: I2C, address: u8) -> Self {
        Self::new(I2cInterface::with_address(i2c, address))
    }

    /// Releases the driver, returning the I2C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Mma8451<IFACE>
where
    IFACE: Mma8451Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Verifies the device identity and establishes the session defaults.
    ///
    /// Fails with [`Error::UnsupportedDevice`] when the `WHO_AM_I` register
    /// does not report an MMA8451.
    pub fn init(&mut self) -> Result<(), CommE> {
        let id = self.whoami()?;
        if id != DEVICE_ID {
            return Err(Error::UnsupportedDevice(id));
        }

        self.range = Range::Range2g;
        self.output_size = OutputSize::Bits14;
        Ok(())
    }

    /// Applies a validated configuration field by field.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        config.validate().map_err(|_| Error::InvalidConfig)?;

        self.set_output_size(config.output_size)?;
        self.set_data_rate(config.data_rate)?;
        self.set_low_noise(config.low_noise)?;
        self.set_power_mode(config.power_mode)?;
        self.set_orientation_detection(config.orientation_detection)?;
        self.set_range(config.range)?;
        Ok(())
    }

    /// Issues a soft reset and waits for the device to come back.
    ///
    /// A reset reverts the device to ±2g / 14-bit output; the session state
    /// follows, so any previously configured scale must be programmed again.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg2()?;
        cfg.set_rst(true);
        self.set_ctrl_reg2(cfg)?;

        delay.delay_ms(RESET_SETTLE_DELAY_MS);

        self.range = Range::Range2g;
        self.output_size = OutputSize::Bits14;
        Ok(())
    }

    // ==================================================================
    // == High-Level Configuration ======================================
    // ==================================================================
    /// Selects the full-scale measurement range.
    ///
    /// On success the driver's scaling divisor follows the new range.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        let mut cfg = self.xyz_data_cfg()?;
        cfg.set_fs(range);
        self.set_xyz_data_cfg(cfg)
    }

    /// Selects the active-mode power scheme.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg2()?;
        cfg.set_mods(mode);
        self.set_ctrl_reg2(cfg)
    }

    /// Selects the output data rate.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg1()?;
        cfg.set_dr(rate);
        self.set_ctrl_reg1(cfg)
    }

    /// Selects the sample width (fast read vs full resolution).
    ///
    /// On success the driver decodes subsequent samples at the new width.
    pub fn set_output_size(&mut self, size: OutputSize) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg1()?;
        cfg.set_f_read(size);
        self.set_ctrl_reg1(cfg)
    }

    /// Enables or disables reduced noise mode.
    pub fn set_low_noise(&mut self, low_noise: bool) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg1()?;
        cfg.set_lnoise(low_noise);
        self.set_ctrl_reg1(cfg)
    }

    /// Enables or disables portrait/landscape orientation detection.
    pub fn set_orientation_detection(&mut self, enable: bool) -> Result<(), CommE> {
        let mut cfg = self.pl_config()?;
        cfg.set_pl_en(enable);
        self.set_pl_config(cfg)
    }

    /// Enables or disables the data-ready interrupt.
    pub fn set_interrupt_enable(&mut self, enable: bool) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg4()?;
        cfg.set_int_en_drdy(enable);
        self.set_ctrl_reg4(cfg)
    }

    /// Routes the data-ready interrupt to INT1 (true) or INT2 (false).
    pub fn set_interrupt_pin1(&mut self, pin1: bool) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg5()?;
        cfg.set_int_cfg_drdy(pin1);
        self.set_ctrl_reg5(cfg)
    }

    /// Moves the device between active and standby mode.
    pub fn set_active(&mut self, active: bool) -> Result<(), CommE> {
        let mut cfg = self.ctrl_reg1()?;
        cfg.set_active(active);
        self.set_ctrl_reg1(cfg)
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads one X/Y/Z sample, scaled to metres per second squared.
    ///
    /// Performs a single burst read sized by the configured sample width;
    /// on a bus failure no partial sample is produced.
    pub fn read_acceleration(&mut self) -> Result<Acceleration, CommE> {
        match self.output_size {
            OutputSize::Bits14 => {
                let mut raw = [0u8; 6];
                self.interface
                    .read_many(REG_OUT_X_MSB, &mut raw)
                    .map_err(Error::from)?;
                Ok(sample::decode_14bit(&raw, self.range))
            }
            OutputSize::Bits8 => {
                let mut raw = [0u8; 3];
                self.interface
                    .read_many(REG_OUT_X_MSB, &mut raw)
                    .map_err(Error::from)?;
                Ok(sample::decode_8bit(&raw, self.range))
            }
        }
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the raw `WHO_AM_I` identity byte.
    pub fn whoami(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_WHO_AM_I)
    }

    /// Reads the `STATUS` register.
    pub fn status(&mut self) -> Result<Status, CommE> {
        self.read_reg()
    }

    /// Reads the `F_STATUS` register (FIFO view of address `0x00`).
    pub fn fifo_status(&mut self) -> Result<FifoStatus, CommE> {
        self.read_reg()
    }

    /// Reads the `SYSMOD` register.
    pub fn sysmod(&mut self) -> Result<Sysmod, CommE> {
        self.read_reg()
    }

    /// Reads the `INT_SOURCE` register.
    pub fn int_source(&mut self) -> Result<IntSource, CommE> {
        self.read_reg()
    }

    // ==================================================================
    // == Register Accessors ============================================
    // ==================================================================
    /// Reads the `F_SETUP` register.
    pub fn fifo_setup(&mut self) -> Result<FifoSetup, CommE> {
        self.read_reg()
    }

    /// Writes the `F_SETUP` register.
    pub fn set_fifo_setup(&mut self, value: FifoSetup) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `TRIG_CFG` register.
    pub fn trigger_config(&mut self) -> Result<TriggerConfig, CommE> {
        self.read_reg()
    }

    /// Writes the `TRIG_CFG` register.
    pub fn set_trigger_config(&mut self, value: TriggerConfig) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `XYZ_DATA_CFG` register.
    pub fn xyz_data_cfg(&mut self) -> Result<XyzDataCfg, CommE> {
        self.read_reg()
    }

    /// Writes the `XYZ_DATA_CFG` register and, on success, re-anchors the
    /// driver's scaling range to the written full-scale selection.
    ///
    /// This is one of the two writes that mutate session state; see also
    /// [`set_ctrl_reg1`](Self::set_ctrl_reg1).
    pub fn set_xyz_data_cfg(&mut self, value: XyzDataCfg) -> Result<(), CommE> {
        self.write_reg(value)?;
        self.range = value.fs();
        Ok(())
    }

    /// Reads the `HP_FILTER_CUTOFF` register.
    pub fn hp_filter_cutoff(&mut self) -> Result<HpFilterCutoff, CommE> {
        self.read_reg()
    }

    /// Writes the `HP_FILTER_CUTOFF` register.
    pub fn set_hp_filter_cutoff(&mut self, value: HpFilterCutoff) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `PL_STATUS` register.
    pub fn pl_status(&mut self) -> Result<PlStatus, CommE> {
        self.read_reg()
    }

    /// Reads the `PL_CFG` register.
    pub fn pl_config(&mut self) -> Result<PlConfig, CommE> {
        self.read_reg()
    }

    /// Writes the `PL_CFG` register.
    pub fn set_pl_config(&mut self, value: PlConfig) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `PL_COUNT` debounce counter.
    pub fn pl_count(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_PL_COUNT)
    }

    /// Writes the `PL_COUNT` debounce counter.
    pub fn set_pl_count(&mut self, count: u8) -> Result<(), CommE> {
        self.write_raw(REG_PL_COUNT, count)
    }

    /// Reads the `PL_BF_ZCOMP` register.
    pub fn pl_bf_zcomp(&mut self) -> Result<PlBfZcomp, CommE> {
        self.read_reg()
    }

    /// Writes the `PL_BF_ZCOMP` register.
    pub fn set_pl_bf_zcomp(&mut self, value: PlBfZcomp) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `P_L_THS_REG` register.
    pub fn pl_threshold(&mut self) -> Result<PlThreshold, CommE> {
        self.read_reg()
    }

    /// Writes the `P_L_THS_REG` register.
    pub fn set_pl_threshold(&mut self, value: PlThreshold) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `FF_MT_CFG` register.
    pub fn ff_mt_config(&mut self) -> Result<FfMtConfig, CommE> {
        self.read_reg()
    }

    /// Writes the `FF_MT_CFG` register.
    pub fn set_ff_mt_config(&mut self, value: FfMtConfig) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `FF_MT_SRC` register.
    pub fn ff_mt_source(&mut self) -> Result<FfMtSource, CommE> {
        self.read_reg()
    }

    /// Reads the `FF_MT_THS` register.
    pub fn ff_mt_threshold(&mut self) -> Result<FfMtThreshold, CommE> {
        self.read_reg()
    }

    /// Writes the `FF_MT_THS` register.
    pub fn set_ff_mt_threshold(&mut self, value: FfMtThreshold) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `FF_MT_COUNT` debounce counter.
    pub fn ff_mt_count(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_FF_MT_COUNT)
    }

    /// Writes the `FF_MT_COUNT` debounce counter.
    pub fn set_ff_mt_count(&mut self, count: u8) -> Result<(), CommE> {
        self.write_raw(REG_FF_MT_COUNT, count)
    }

    /// Reads the `TRANSIENT_CFG` register.
    pub fn transient_config(&mut self) -> Result<TransientConfig, CommE> {
        self.read_reg()
    }

    /// Writes the `TRANSIENT_CFG` register.
    pub fn set_transient_config(&mut self, value: TransientConfig) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `TRANSIENT_SRC` register.
    pub fn transient_source(&mut self) -> Result<TransientSource, CommE> {
        self.read_reg()
    }

    /// Reads the `TRANSIENT_THS` register.
    pub fn transient_threshold(&mut self) -> Result<TransientThreshold, CommE> {
        self.read_reg()
    }

    /// Writes the `TRANSIENT_THS` register.
    pub fn set_transient_threshold(&mut self, value: TransientThreshold) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `TRANSIENT_COUNT` debounce counter.
    pub fn transient_count(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_TRANSIENT_COUNT)
    }

    /// Writes the `TRANSIENT_COUNT` debounce counter.
    pub fn set_transient_count(&mut self, count: u8) -> Result<(), CommE> {
        self.write_raw(REG_TRANSIENT_COUNT, count)
    }

    /// Reads the `PULSE_CFG` register.
    pub fn pulse_config(&mut self) -> Result<PulseConfig, CommE> {
        self.read_reg()
    }

    /// Writes the `PULSE_CFG` register.
    pub fn set_pulse_config(&mut self, value: PulseConfig) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `PULSE_SRC` register.
    pub fn pulse_source(&mut self) -> Result<PulseSource, CommE> {
        self.read_reg()
    }

    /// Reads the X-axis pulse threshold.
    pub fn pulse_threshold_x(&mut self) -> Result<PulseThreshold, CommE> {
        Ok(PulseThreshold::from(self.read_raw(REG_PULSE_THSX)?))
    }

    /// Writes the X-axis pulse threshold.
    pub fn set_pulse_threshold_x(&mut self, value: PulseThreshold) -> Result<(), CommE> {
        self.write_raw(REG_PULSE_THSX, value.into())
    }

    /// Reads the Y-axis pulse threshold.
    pub fn pulse_threshold_y(&mut self) -> Result<PulseThreshold, CommE> {
        Ok(PulseThreshold::from(self.read_raw(REG_PULSE_THSY)?))
    }

    /// Writes the Y-axis pulse threshold.
    pub fn set_pulse_threshold_y(&mut self, value: PulseThreshold) -> Result<(), CommE> {
        self.write_raw(REG_PULSE_THSY, value.into())
    }

    /// Reads the Z-axis pulse threshold.
    pub fn pulse_threshold_z(&mut self) -> Result<PulseThreshold, CommE> {
        Ok(PulseThreshold::from(self.read_raw(REG_PULSE_THSZ)?))
    }

    /// Writes the Z-axis pulse threshold.
    pub fn set_pulse_threshold_z(&mut self, value: PulseThreshold) -> Result<(), CommE> {
        self.write_raw(REG_PULSE_THSZ, value.into())
    }

    /// Reads the `PULSE_TMLT` time limit.
    pub fn pulse_time_limit(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_PULSE_TMLT)
    }

    /// Writes the `PULSE_TMLT` time limit.
    pub fn set_pulse_time_limit(&mut self, limit: u8) -> Result<(), CommE> {
        self.write_raw(REG_PULSE_TMLT, limit)
    }

    /// Reads the `PULSE_LTCY` latency.
    pub fn pulse_latency(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_PULSE_LTCY)
    }

    /// Writes the `PULSE_LTCY` latency.
    pub fn set_pulse_latency(&mut self, latency: u8) -> Result<(), CommE> {
        self.write_raw(REG_PULSE_LTCY, latency)
    }

    /// Reads the `PULSE_WIND` second-pulse window.
    pub fn pulse_window(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_PULSE_WIND)
    }

    /// Writes the `PULSE_WIND` second-pulse window.
    pub fn set_pulse_window(&mut self, window: u8) -> Result<(), CommE> {
        self.write_raw(REG_PULSE_WIND, window)
    }

    /// Reads the `ASLP_COUNT` auto-sleep counter.
    pub fn aslp_count(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_ASLP_COUNT)
    }

    /// Writes the `ASLP_COUNT` auto-sleep counter.
    pub fn set_aslp_count(&mut self, count: u8) -> Result<(), CommE> {
        self.write_raw(REG_ASLP_COUNT, count)
    }

    /// Reads the `CTRL_REG1` register.
    pub fn ctrl_reg1(&mut self) -> Result<CtrlReg1, CommE> {
        self.read_reg()
    }

    /// Writes the `CTRL_REG1` register and, on success, re-anchors the
    /// driver's sample width to the written fast-read selection.
    ///
    /// This is one of the two writes that mutate session state; see also
    /// [`set_xyz_data_cfg`](Self::set_xyz_data_cfg).
    pub fn set_ctrl_reg1(&mut self, value: CtrlReg1) -> Result<(), CommE> {
        self.write_reg(value)?;
        self.output_size = value.f_read();
        Ok(())
    }

    /// Reads the `CTRL_REG2` register.
    pub fn ctrl_reg2(&mut self) -> Result<CtrlReg2, CommE> {
        self.read_reg()
    }

    /// Writes the `CTRL_REG2` register.
    pub fn set_ctrl_reg2(&mut self, value: CtrlReg2) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `CTRL_REG3` register.
    pub fn ctrl_reg3(&mut self) -> Result<CtrlReg3, CommE> {
        self.read_reg()
    }

    /// Writes the `CTRL_REG3` register.
    pub fn set_ctrl_reg3(&mut self, value: CtrlReg3) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `CTRL_REG4` register.
    pub fn ctrl_reg4(&mut self) -> Result<CtrlReg4, CommE> {
        self.read_reg()
    }

    /// Writes the `CTRL_REG4` register.
    pub fn set_ctrl_reg4(&mut self, value: CtrlReg4) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the `CTRL_REG5` register.
    pub fn ctrl_reg5(&mut self) -> Result<CtrlReg5, CommE> {
        self.read_reg()
    }

    /// Writes the `CTRL_REG5` register.
    pub fn set_ctrl_reg5(&mut self, value: CtrlReg5) -> Result<(), CommE> {
        self.write_reg(value)
    }

    /// Reads the X-axis user offset correction.
    pub fn offset_x(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_OFF_X)
    }

    /// Writes the X-axis user offset correction.
    pub fn set_offset_x(&mut self, offset: u8) -> Result<(), CommE> {
        self.write_raw(REG_OFF_X, offset)
    }

    /// Reads the Y-axis user offset correction.
    pub fn offset_y(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_OFF_Y)
    }

    /// Writes the Y-axis user offset correction.
    pub fn set_offset_y(&mut self, offset: u8) -> Result<(), CommE> {
        self.write_raw(REG_OFF_Y, offset)
    }

    /// Reads the Z-axis user offset correction.
    pub fn offset_z(&mut self) -> Result<u8, CommE> {
        self.read_raw(REG_OFF_Z)
    }

    /// Writes the Z-axis user offset correction.
    pub fn set_offset_z(&mut self, offset: u8) -> Result<(), CommE> {
        self.write_raw(REG_OFF_Z, offset)
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    fn read_reg<R>(&mut self) -> Result<R, CommE>
    where
        R: Register + From<u8>,
    {
        let raw = self
            .interface
            .read_register(R::ADDRESS)
            .map_err(Error::from)?;
        Ok(R::from(raw))
    }

    fn write_reg<R>(&mut self, value: R) -> Result<(), CommE>
    where
        R: Register + Into<u8>,
    {
        self.interface
            .write_register(R::ADDRESS, value.into())
            .map_err(Error::from)
    }

    fn read_raw(&mut self, register: u8) -> Result<u8, CommE> {
        self.interface.read_register(register).map_err(Error::from)
    }

    fn write_raw(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        self.interface
            .write_register(register, value)
            .map_err(Error::from)
    }
}
