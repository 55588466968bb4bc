//! Driver-level scenarios against a mocked I2C bus.

use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use mma8451::params::{DataRate, OutputSize, PowerMode, Range};
use mma8451::{config::Config, Error, Mma8451};

const ADDR: u8 = 0x1D;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn init_accepts_mma8451_identity() {
    let i2c = I2cMock::new(&[I2cTrans::write_read(ADDR, vec![0x0D], vec![0x1A])]);
    let mut dev = Mma8451::new_i2c(i2c);

    dev.init().unwrap();
    assert_eq!(dev.range(), Range::Range2g);
    assert_eq!(dev.output_size(), OutputSize::Bits14);

    dev.release_i2c().done();
}

#[test]
fn init_rejects_unknown_identity() {
    let i2c = I2cMock::new(&[I2cTrans::write_read(ADDR, vec![0x0D], vec![0x2A])]);
    let mut dev = Mma8451::new_i2c(i2c);

    assert_eq!(dev.init(), Err(Error::UnsupportedDevice(0x2A)));

    dev.release_i2c().done();
}

#[test]
fn set_range_drives_sample_scaling() {
    let i2c = I2cMock::new(&[
        // Read-modify-write of XYZ_DATA_CFG selecting ±8g.
        I2cTrans::write_read(ADDR, vec![0x0E], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x0E, 0x02]),
        // One 6-byte burst from OUT_X_MSB.
        I2cTrans::write_read(
            ADDR,
            vec![0x01],
            vec![0x40, 0x00, 0x00, 0x00, 0x00, 0x00],
        ),
    ]);
    let mut dev = Mma8451::new_i2c(i2c);

    dev.set_range(Range::Range8g).unwrap();
    assert_eq!(dev.range(), Range::Range8g);

    // Raw 4096 counts at 8g/14-bit is 4096 / (1024 / 9.80665) m/s².
    let sample = dev.read_acceleration().unwrap();
    assert!(close(sample.x, 39.2266));
    assert!(close(sample.y, 0.0));
    assert!(close(sample.z, 0.0));

    dev.release_i2c().done();
}

#[test]
fn reset_reverts_scaling_to_2g_default() {
    let i2c = I2cMock::new(&[
        // set_range(±8g)
        I2cTrans::write_read(ADDR, vec![0x0E], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x0E, 0x02]),
        // reset: read-modify-write of CTRL_REG2 with the rst bit set
        I2cTrans::write_read(ADDR, vec![0x2B], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x2B, 0x40]),
        // burst read decoded with the restored 2g divisor
        I2cTrans::write_read(
            ADDR,
            vec![0x01],
            vec![0x40, 0x00, 0x00, 0x00, 0x00, 0x00],
        ),
    ]);
    let mut dev = Mma8451::new_i2c(i2c);

    dev.set_range(Range::Range8g).unwrap();
    dev.reset(&mut NoopDelay::new()).unwrap();
    assert_eq!(dev.range(), Range::Range2g);
    assert_eq!(dev.output_size(), OutputSize::Bits14);

    let sample = dev.read_acceleration().unwrap();
    assert!(close(sample.x, 9.80665));

    dev.release_i2c().done();
}

#[test]
fn fast_read_switches_to_three_byte_bursts() {
    let i2c = I2cMock::new(&[
        // set_output_size(8-bit) via CTRL_REG1
        I2cTrans::write_read(ADDR, vec![0x2A], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x2A, 0x02]),
        // one byte per axis
        I2cTrans::write_read(ADDR, vec![0x01], vec![0x40, 0xC0, 0x00]),
    ]);
    let mut dev = Mma8451::new_i2c(i2c);

    dev.set_output_size(OutputSize::Bits8).unwrap();
    assert_eq!(dev.output_size(), OutputSize::Bits8);

    let sample = dev.read_acceleration().unwrap();
    assert!(close(sample.x, 9.80665));
    assert!(close(sample.y, -9.80665));
    assert!(close(sample.z, 0.0));

    dev.release_i2c().done();
}

#[test]
fn failed_burst_read_yields_no_sample() {
    let i2c = I2cMock::new(&[I2cTrans::write_read(
        ADDR,
        vec![0x01],
        vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    )
    .with_error(ErrorKind::Other)]);
    let mut dev = Mma8451::new_i2c(i2c);

    assert!(matches!(
        dev.read_acceleration(),
        Err(Error::Interface(ErrorKind::Other))
    ));

    dev.release_i2c().done();
}

#[test]
fn configure_applies_every_field() {
    let i2c = I2cMock::new(&[
        // output size
        I2cTrans::write_read(ADDR, vec![0x2A], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x2A, 0x02]),
        // data rate (100 Hz = 0b011 at bits 5:3)
        I2cTrans::write_read(ADDR, vec![0x2A], vec![0x02]),
        I2cTrans::write(ADDR, vec![0x2A, 0x1A]),
        // low noise
        I2cTrans::write_read(ADDR, vec![0x2A], vec![0x1A]),
        I2cTrans::write(ADDR, vec![0x2A, 0x1E]),
        // power mode (high resolution)
        I2cTrans::write_read(ADDR, vec![0x2B], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x2B, 0x02]),
        // orientation detection
        I2cTrans::write_read(ADDR, vec![0x11], vec![0x80]),
        I2cTrans::write(ADDR, vec![0x11, 0xC0]),
        // range
        I2cTrans::write_read(ADDR, vec![0x0E], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x0E, 0x01]),
    ]);
    let mut dev = Mma8451::new_i2c(i2c);

    let config = Config::new()
        .range(Range::Range4g)
        .output_size(OutputSize::Bits8)
        .data_rate(DataRate::Hz100)
        .power_mode(PowerMode::HighResolution)
        .low_noise(true)
        .orientation_detection(true)
        .build();
    dev.configure(config).unwrap();

    assert_eq!(dev.range(), Range::Range4g);
    assert_eq!(dev.output_size(), OutputSize::Bits8);

    dev.release_i2c().done();
}

#[test]
fn reserved_range_is_rejected_before_any_bus_traffic() {
    let i2c = I2cMock::new(&[]);
    let mut dev = Mma8451::new_i2c(i2c);

    let config = Config::new().range(Range::Reserved).build();
    assert_eq!(dev.configure(config), Err(Error::InvalidConfig));

    dev.release_i2c().done();
}

#[test]
fn interrupt_setters_touch_only_the_drdy_bits() {
    let i2c = I2cMock::new(&[
        // CTRL_REG4: enable data-ready interrupt, other enables untouched
        I2cTrans::write_read(ADDR, vec![0x2D], vec![0x20]),
        I2cTrans::write(ADDR, vec![0x2D, 0x21]),
        // CTRL_REG5: route data-ready to INT1
        I2cTrans::write_read(ADDR, vec![0x2E], vec![0x00]),
        I2cTrans::write(ADDR, vec![0x2E, 0x01]),
    ]);
    let mut dev = Mma8451::new_i2c(i2c);

    dev.set_interrupt_enable(true).unwrap();
    dev.set_interrupt_pin1(true).unwrap();

    dev.release_i2c().done();
}

#[test]
fn set_active_preserves_other_ctrl_reg1_fields() {
    let i2c = I2cMock::new(&[
        // CTRL_REG1 holds fast-read and low-noise; active joins them.
        I2cTrans::write_read(ADDR, vec![0x2A], vec![0x06]),
        I2cTrans::write(ADDR, vec![0x2A, 0x07]),
    ]);
    let mut dev = Mma8451::new_i2c(i2c);

    dev.set_active(true).unwrap();
    // The fast-read bit read back from the device re-anchors the width.
    assert_eq!(dev.output_size(), OutputSize::Bits8);

    dev.release_i2c().done();
}
