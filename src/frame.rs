//! SDS011 frame layout and decoding.
//!
//! ```text
//! | byte | content            |
//! |------|--------------------|
//! | 0    | header 0xAA        |
//! | 1    | commander no.      |
//! | 2-3  | PM2.5, LE, ×10     |
//! | 4-5  | PM10, LE, ×10      |
//! | 6-7  | sensor id, LE      |
//! | 8    | checksum of 2..=7  |
//! | 9    | trailer 0xAB       |
//! ```

use crate::checksum::checksum;
use crate::error::FrameError;
use crate::types::{RawFrame, SensorReading, SensorReadingRaw};

/// Length of every SDS011 frame.
pub const FRAME_LEN: usize = 10;
/// First byte of every frame.
pub const HEADER: u8 = 0xAA;
/// Last byte of every frame.
pub const TRAILER: u8 = 0xAB;
/// Commander byte of an active-mode data report.
pub const COMMANDER_DATA_REPORT: u8 = 0xC0;

const CHECKSUM_INDEX: usize = 8;
const DATA: core::ops::Range<usize> = 2..8;

/// Failed checks of a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameChecks(u8);

impl FrameChecks {
    const HEADER: u8 = 1 << 0;
    const CHECKSUM: u8 = 1 << 1;
    const TRAILER: u8 = 1 << 2;

    /// `true` if no check failed.
    pub const fn is_valid(&self) -> bool {
        self.0 == 0
    }

    pub const fn header_failed(&self) -> bool {
        self.0 & Self::HEADER != 0
    }

    pub const fn checksum_failed(&self) -> bool {
        self.0 & Self::CHECKSUM != 0
    }

    pub const fn trailer_failed(&self) -> bool {
        self.0 & Self::TRAILER != 0
    }

    /// The error reported for this frame: header first, then checksum, then trailer.
    pub const fn first_error(&self) -> Option<FrameError> {
        if self.header_failed() {
            Some(FrameError::InvalidHeader)
        } else if self.checksum_failed() {
            Some(FrameError::ChecksumMismatch)
        } else if self.trailer_failed() {
            Some(FrameError::InvalidTrailer)
        } else {
            None
        }
    }
}

/// Stateless decoder for SDS011 frames.
///
/// Byte alignment with the stream is the caller's job; every call looks at
/// exactly one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameDecoder;

impl FrameDecoder {
    /// Runs all three frame checks without short-circuiting.
    pub fn validate(frame: &RawFrame) -> FrameChecks {
        let mut failed = 0;
        if frame[0] != HEADER {
            failed |= FrameChecks::HEADER;
        }
        if checksum(&frame[DATA]) != frame[CHECKSUM_INDEX] {
            failed |= FrameChecks::CHECKSUM;
        }
        if frame[FRAME_LEN - 1] != TRAILER {
            failed |= FrameChecks::TRAILER;
        }
        FrameChecks(failed)
    }

    /// Validates `frame` and returns its undecoded fields.
    pub fn decode_raw(frame: &RawFrame) -> Result<SensorReadingRaw, FrameError> {
        if let Some(err) = Self::validate(frame).first_error() {
            return Err(err);
        }
        Ok(SensorReadingRaw {
            commander: frame[1],
            pm2_5: u16::from_le_bytes([frame[2], frame[3]]),
            pm10: u16::from_le_bytes([frame[4], frame[5]]),
            sensor_id: u16::from_le_bytes([frame[6], frame[7]]),
        })
    }

    /// Validates and decodes `frame`.
    pub fn decode(frame: &RawFrame) -> Result<SensorReading, FrameError> {
        Self::decode_raw(frame).map(SensorReading::from)
    }

    /// Like [`decode`](Self::decode) for input of unchecked length.
    pub fn decode_slice(bytes: &[u8]) -> Result<SensorReading, FrameError> {
        let frame: &RawFrame = bytes
            .try_into()
            .map_err(|_| FrameError::InvalidLength { len: bytes.len() })?;
        Self::decode(frame)
    }

    /// Builds a valid data frame carrying `raw`.
    pub fn encode(raw: &SensorReadingRaw) -> RawFrame {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = HEADER;
        frame[1] = raw.commander;
        frame[2..4].copy_from_slice(&raw.pm2_5.to_le_bytes());
        frame[4..6].copy_from_slice(&raw.pm10.to_le_bytes());
        frame[6..8].copy_from_slice(&raw.sensor_id.to_le_bytes());
        frame[CHECKSUM_INDEX] = checksum(&frame[DATA]);
        frame[FRAME_LEN - 1] = TRAILER;
        frame
    }

    /// Builds a valid data frame carrying `reading`, rounded to 0.1 μg/m³.
    pub fn encode_reading(reading: &SensorReading) -> RawFrame {
        Self::encode(&SensorReadingRaw::from(reading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: RawFrame = [0xAA, 0xC0, 0x3C, 0x00, 0x96, 0x00, 0x34, 0x12, 0x18, 0xAB];

    #[test]
    fn decodes_data_report() {
        let reading = FrameDecoder::decode(&VALID).unwrap();
        assert_eq!(reading.pm2_5, 6.0);
        assert_eq!(reading.pm10, 15.0);
        assert_eq!(reading.sensor_id, 0x1234);
        assert_eq!(reading.commander, COMMANDER_DATA_REPORT);
    }

    #[test]
    fn passes_commander_through() {
        let mut frame = VALID;
        frame[1] = 0xC5;
        assert_eq!(FrameDecoder::decode(&frame).unwrap().commander, 0xC5);
    }

    #[test]
    fn rejects_bad_header() {
        for header in (0..=255u8).filter(|&b| b != HEADER) {
            let mut frame = VALID;
            frame[0] = header;
            assert_eq!(FrameDecoder::decode(&frame), Err(FrameError::InvalidHeader));
        }
    }

    #[test]
    fn rejects_bad_checksum() {
        for delta in 1..=255u8 {
            let mut frame = VALID;
            frame[8] = frame[8].wrapping_add(delta);
            assert_eq!(FrameDecoder::decode(&frame), Err(FrameError::ChecksumMismatch));
        }
    }

    #[test]
    fn rejects_miscounted_checksum() {
        let frame = [0xAA, 0xC0, 0x3C, 0x00, 0x96, 0x00, 0x34, 0x12, 0xF2, 0xAB];
        assert_eq!(FrameDecoder::decode(&frame), Err(FrameError::ChecksumMismatch));
    }

    #[test]
    fn rejects_corrupted_payload() {
        let mut frame = VALID;
        frame[5] ^= 0x01;
        assert_eq!(FrameDecoder::decode(&frame), Err(FrameError::ChecksumMismatch));
    }

    #[test]
    fn rejects_bad_trailer() {
        for trailer in (0..=255u8).filter(|&b| b != TRAILER) {
            let mut frame = VALID;
            frame[9] = trailer;
            assert_eq!(FrameDecoder::decode(&frame), Err(FrameError::InvalidTrailer));
        }
    }

    #[test]
    fn reports_every_failed_check() {
        let frame = [0x00, 0xC0, 0x3C, 0x00, 0x96, 0x00, 0x34, 0x12, 0x00, 0x00];
        let checks = FrameDecoder::validate(&frame);
        assert!(!checks.is_valid());
        assert!(checks.header_failed());
        assert!(checks.checksum_failed());
        assert!(checks.trailer_failed());
        assert_eq!(checks.first_error(), Some(FrameError::InvalidHeader));

        let mut frame = VALID;
        frame[8] = 0;
        frame[9] = 0;
        let checks = FrameDecoder::validate(&frame);
        assert!(!checks.header_failed());
        assert_eq!(checks.first_error(), Some(FrameError::ChecksumMismatch));

        assert!(FrameDecoder::validate(&VALID).is_valid());
        assert_eq!(FrameDecoder::validate(&VALID).first_error(), None);
    }

    #[test]
    fn decode_slice_checks_length() {
        assert_eq!(
            FrameDecoder::decode_slice(&VALID[..9]),
            Err(FrameError::InvalidLength { len: 9 })
        );
        let mut long = [0u8; 11];
        long[..10].copy_from_slice(&VALID);
        assert_eq!(
            FrameDecoder::decode_slice(&long),
            Err(FrameError::InvalidLength { len: 11 })
        );
        assert_eq!(
            FrameDecoder::decode_slice(&[]),
            Err(FrameError::InvalidLength { len: 0 })
        );
        assert!(FrameDecoder::decode_slice(&VALID).is_ok());
    }

    #[test]
    fn encode_matches_wire_capture() {
        let raw = SensorReadingRaw {
            pm2_5: 60,
            pm10: 150,
            sensor_id: 0x1234,
            commander: COMMANDER_DATA_REPORT,
        };
        assert_eq!(FrameDecoder::encode(&raw), VALID);
    }

    #[test]
    fn encode_reading_then_decode() {
        for (pm2_5, pm10) in [(6.0, 15.0), (150.5, 0.1), (6553.5, 6553.5), (0.0, 999.9)] {
            let reading = SensorReading {
                pm2_5,
                pm10,
                sensor_id: 0xBEEF,
                commander: COMMANDER_DATA_REPORT,
            };
            let frame = FrameDecoder::encode_reading(&reading);
            assert_eq!(FrameDecoder::decode(&frame), Ok(reading));
        }
    }

    #[test]
    fn encode_then_decode() {
        for (pm2_5, pm10, sensor_id) in [(0, 0, 0), (9999, 9999, 0xFFFF), (257, 65535, 0x00FF)] {
            let raw = SensorReadingRaw {
                pm2_5,
                pm10,
                sensor_id,
                commander: COMMANDER_DATA_REPORT,
            };
            let frame = FrameDecoder::encode(&raw);
            assert_eq!(FrameDecoder::decode_raw(&frame), Ok(raw));
            assert_eq!(FrameDecoder::decode(&frame), Ok(SensorReading::from(raw)));
        }
    }
}
