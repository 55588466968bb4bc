//! Configuration primitives for the MMA8451 driver.

use crate::params::{DataRate, OutputSize, PowerMode, Range};

/// User-facing configuration for the MMA8451 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Full-scale measurement range.
    pub range: Range,
    /// Sample width (14-bit full resolution or 8-bit fast read).
    pub output_size: OutputSize,
    /// Output data rate selection.
    pub data_rate: DataRate,
    /// Active-mode power scheme selection.
    pub power_mode: PowerMode,
    /// Reduced noise mode enable.
    pub low_noise: bool,
    /// Portrait/landscape orientation detection enable.
    pub orientation_detection: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid according to datasheet rules.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.range == Range::Reserved {
            return Err(ConfigError::ReservedRange);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the full-scale range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Overrides the sample width.
    pub fn output_size(mut self, output_size: OutputSize) -> Self {
        self.config.output_size = output_size;
        self
    }

    /// Overrides the output data rate.
    pub fn data_rate(mut self, data_rate: DataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Overrides the active-mode power scheme.
    pub fn power_mode(mut self, power_mode: PowerMode) -> Self {
        self.config.power_mode = power_mode;
        self
    }

    /// Enables or disables reduced noise mode.
    pub fn low_noise(mut self, low_noise: bool) -> Self {
        self.config.low_noise = low_noise;
        self
    }

    /// Enables or disables orientation detection.
    pub fn orientation_detection(mut self, orientation_detection: bool) -> Self {
        self.config.orientation_detection = orientation_detection;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: Range::Range2g,
            output_size: OutputSize::Bits14,
            data_rate: DataRate::Hz800,
            power_mode: PowerMode::Normal,
            low_noise: false,
            orientation_detection: false,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The reserved range encoding cannot be requested.
    ReservedRange,
}
