#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::device::Mma8451;
pub use crate::error::{Error, Result};
pub use crate::sample::Acceleration;
