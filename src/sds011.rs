use embedded_hal_nb::nb::block;
use embedded_hal_nb::serial::Read;

use crate::aqi::{AqiConverter, AqiResult};
use crate::error::Error;
use crate::fmt::{debug, trace, warn};
use crate::frame::{FrameDecoder, FRAME_LEN, HEADER};
use crate::types::{RawFrame, SensorReading};

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Non-header bytes that may be discarded before a frame header.
    ///
    /// The driver reads at most `max_resync_bytes + 1` bytes looking for
    /// `0xAA`; if none of them is a header it returns
    /// [`Error::NoHeader`] with all of them consumed. With `0` every frame is
    /// read as exactly 10 bytes and alignment is left to the caller.
    pub max_resync_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::strict()
    }
}

impl Config {
    /// Read fixed 10-byte frames without looking for the header.
    pub const fn strict() -> Self {
        Self {
            max_resync_bytes: 0,
        }
    }

    /// Hunt for the header across up to two frames' worth of bytes.
    pub const fn resynchronizing() -> Self {
        Self {
            max_resync_bytes: 2 * FRAME_LEN,
        }
    }
}

/// SDS011 driver over a serial port in active reporting mode.
///
/// The port must already be set up for 9600 baud, 8N1.
pub struct Sds011<SERIAL> {
    serial: SERIAL,
    config: Config,
}

impl<SERIAL, E> Sds011<SERIAL>
where
    SERIAL: Read<u8, Error = E>,
{
    /// Creates a new driver with the default [`Config`].
    pub fn new(serial: SERIAL) -> Self {
        Self::with_config(serial, Config::default())
    }

    pub fn with_config(serial: SERIAL, config: Config) -> Self {
        Self { serial, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroys the driver and returns the serial port.
    pub fn release(self) -> SERIAL {
        self.serial
    }

    /// Reads the next 10 bytes as a frame, without validating them.
    pub fn read_frame(&mut self) -> Result<RawFrame, Error<E>> {
        let mut frame = [0u8; FRAME_LEN];
        let start = if self.config.max_resync_bytes == 0 {
            0
        } else {
            let skipped = self.sync()?;
            if skipped > 0 {
                debug!("skipped {} bytes before frame header", skipped);
            }
            frame[0] = HEADER;
            1
        };
        for byte in &mut frame[start..] {
            *byte = self.read_byte()?;
        }
        Ok(frame)
    }

    /// Reads and decodes the next frame.
    ///
    /// A frame that fails validation is consumed and reported as
    /// [`Error::Frame`]; the next call starts on the following bytes.
    pub fn read_reading(&mut self) -> Result<SensorReading, Error<E>> {
        let frame = self.read_frame()?;
        match FrameDecoder::decode(&frame) {
            Ok(reading) => {
                trace!(
                    "sensor {=u16:#x}: PM2.5 {} PM10 {}",
                    reading.sensor_id,
                    reading.pm2_5,
                    reading.pm10
                );
                Ok(reading)
            }
            Err(err) => {
                warn!("dropping frame: {}", err);
                Err(err.into())
            }
        }
    }

    /// Reads the next frame and converts it with the US EPA PM2.5 table.
    pub fn read_aqi(&mut self) -> Result<AqiResult, Error<E>> {
        let reading = self.read_reading()?;
        Ok(AqiConverter::default().convert_reading(&reading))
    }

    fn read_byte(&mut self) -> Result<u8, Error<E>> {
        block!(self.serial.read()).map_err(Error::Serial)
    }

    /// Consumes bytes up to and including the next header, returning how
    /// many were discarded.
    fn sync(&mut self) -> Result<usize, Error<E>> {
        let mut skipped = 0;
        loop {
            if self.read_byte()? == HEADER {
                return Ok(skipped);
            }
            if skipped == self.config.max_resync_bytes {
                warn!("no frame header in {} bytes", skipped + 1);
                return Err(Error::NoHeader {
                    skipped: skipped + 1,
                });
            }
            skipped += 1;
        }
    }
}
