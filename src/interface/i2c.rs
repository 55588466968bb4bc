//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Mma8451Interface;

/// Default 7-bit device address (SA0 pin high).
pub const DEFAULT_ADDRESS: u8 = 0x1D;
/// Alternative 7-bit device address (SA0 pin low).
pub const ALTERNATIVE_ADDRESS: u8 = 0x1C;

/// I2C-based interface implementation for the MMA8451 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface using the default device address.
    pub const fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DEFAULT_ADDRESS,
        }
    }

    /// Creates a new interface with an explicit device address.
    pub const fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the configured device address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Mma8451Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        // Register address and payload go out as one two-byte message.
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        // Combined write-then-read keeps bus arbitration for both messages.
        self.i2c.write_read(self.address, &[register], buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cInterface, DEFAULT_ADDRESS};
    use crate::interface::Mma8451Interface;
    use core::convert::Infallible;
    use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};

    struct MockBus<'a> {
        expectations: &'a [BusExpectation<'a>],
        index: usize,
    }

    impl<'a> MockBus<'a> {
        fn new(expectations: &'a [BusExpectation<'a>]) -> Self {
            Self {
                expectations,
                index: 0,
            }
        }
    }

    impl<'a> Drop for MockBus<'a> {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all I2C expectations consumed"
            );
        }
    }

    impl<'a> ErrorType for MockBus<'a> {
        type Error = Infallible;
    }

    impl<'a> I2c<SevenBitAddress> for MockBus<'a> {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let expected = self
                .expectations
                .get(self.index)
                .expect("unexpected I2C transaction");
            self.index += 1;

            match *expected {
                BusExpectation::WriteRead {
                    addr,
                    register,
                    response,
                } => {
                    assert_eq!(address, addr, "device address mismatch");
                    assert_eq!(operations.len(), 2, "expected write+read operations");
                    let (first, rest) = operations.split_first_mut().expect("missing first op");
                    match first {
                        Operation::Write(data) => {
                            assert_eq!(data.len(), 1, "register pointer length mismatch");
                            assert_eq!(data[0], register, "register address mismatch");
                        }
                        _ => panic!("first operation must be write"),
                    }
                    match rest.first_mut().expect("missing second op") {
                        Operation::Read(buf) => {
                            assert_eq!(buf.len(), response.len(), "response length mismatch");
                            buf.copy_from_slice(response);
                        }
                        _ => panic!("second operation must be read"),
                    }
                }
                BusExpectation::Write { addr, payload } => {
                    assert_eq!(address, addr, "device address mismatch");
                    assert_eq!(operations.len(), 1, "expected a single write operation");
                    match operations.first_mut().expect("missing op") {
                        Operation::Write(data) => assert_eq!(*data, payload),
                        _ => panic!("operation must be write"),
                    }
                }
            }

            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum BusExpectation<'a> {
        WriteRead {
            addr: u8,
            register: u8,
            response: &'a [u8],
        },
        Write {
            addr: u8,
            payload: &'a [u8],
        },
    }

    #[test]
    fn read_register_issues_combined_write_read() {
        let expectations = [BusExpectation::WriteRead {
            addr: DEFAULT_ADDRESS,
            register: 0x0D,
            response: &[0x1A],
        }];
        let mock = MockBus::new(&expectations);
        let mut interface = I2cInterface::new(mock);

        let value = interface.read_register(0x0D).unwrap();
        assert_eq!(value, 0x1A);
    }

    #[test]
    fn write_register_sends_address_and_value_together() {
        let expectations = [BusExpectation::Write {
            addr: DEFAULT_ADDRESS,
            payload: &[0x2A, 0x05],
        }];
        let mock = MockBus::new(&expectations);
        let mut interface = I2cInterface::new(mock);

        interface.write_register(0x2A, 0x05).unwrap();
    }

    #[test]
    fn read_many_fills_buffer_from_one_burst() {
        let expectations = [BusExpectation::WriteRead {
            addr: 0x1C,
            register: 0x01,
            response: &[0x10, 0x20, 0x30, 0x40, 0x50, 0x60],
        }];
        let mock = MockBus::new(&expectations);
        let mut interface = I2cInterface::with_address(mock, 0x1C);

        let mut buffer = [0u8; 6];
        interface.read_many(0x01, &mut buffer).unwrap();
        assert_eq!(buffer, [0x10, 0x20, 0x30, 0x40, 0x50, 0x60]);
    }

    #[test]
    fn read_many_ignores_empty_buffer() {
        let expectations: [BusExpectation; 0] = [];
        let mock = MockBus::new(&expectations);
        let mut interface = I2cInterface::new(mock);

        interface.read_many(0x01, &mut []).unwrap();
    }
}
