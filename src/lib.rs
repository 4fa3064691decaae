//! Frame decoder for the Nova Fitness SDS011 particulate matter sensor, with
//! PM2.5 air quality index conversion.
//!
//! In active reporting mode the sensor sends one 10-byte frame per second at
//! 9600 baud, 8N1. [`FrameDecoder`] validates and decodes such a frame,
//! [`AqiConverter`] maps the PM2.5 value onto the US EPA index, and [`Sds011`]
//! ties both to an [`embedded_hal_nb::serial::Read`] port.
//!
//! ```
//! use sds011_rs::{AqiCategory, AqiConverter, FrameDecoder};
//!
//! let frame = [0xAA, 0xC0, 0x3C, 0x00, 0x96, 0x00, 0x34, 0x12, 0x18, 0xAB];
//! let reading = FrameDecoder::decode(&frame).unwrap();
//! assert_eq!(reading.pm2_5, 6.0);
//! assert_eq!(reading.sensor_id, 0x1234);
//!
//! let result = AqiConverter::default().convert(reading.pm2_5, reading.pm10);
//! assert_eq!(result.category, AqiCategory::Good);
//! assert_eq!(result.aqi, 25.0);
//! ```
#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod aqi;
mod checksum;
mod error;
pub mod frame;
mod sds011;
mod types;

pub use aqi::{AqiBreakpoint, AqiCategory, AqiColor, AqiConverter, AqiResult, US_EPA_PM2_5};
pub use checksum::checksum;
pub use error::{Error, FrameError};
pub use frame::{FrameChecks, FrameDecoder};
pub use sds011::{Config, Sds011};
pub use types::{RawFrame, SensorReading, SensorReadingRaw};
