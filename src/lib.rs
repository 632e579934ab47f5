//! `#![no_std]` driver for the PT2314 audio processor.
//!
//! The chip is write-only and takes single-byte commands over I²C, so
//! [`Pt2314`] caches the logical settings and re-encodes the affected
//! register bytes on every change.
#![cfg_attr(not(test), no_std)]

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;

pub use crate::device::Pt2314;
pub use crate::error::{Error, Result};
pub use crate::interface::i2c::{I2cInterface, PT2314_I2C_ADDRESS};
