//! Bus interface abstraction for the MMA8451 driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
///
/// Every operation is a single bus transaction that either fully succeeds or
/// fails; the driver performs no retries on top of this trait.
pub trait Mma8451Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer,
    /// relying on the device's auto-increment addressing.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}
