#[cfg(not(feature = "thiserror"))]
use core::fmt;

/// Reasons a 10-byte frame is rejected.
///
/// All of these are expected on a live serial line: the caller drops the frame
/// and reads the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum FrameError {
    /// Byte 0 is not `0xAA`.
    #[cfg_attr(feature = "thiserror", error("invalid frame header"))]
    InvalidHeader,
    /// Byte 8 does not match the sum of bytes 2 to 7.
    #[cfg_attr(feature = "thiserror", error("frame checksum mismatch"))]
    ChecksumMismatch,
    /// Byte 9 is not `0xAB`.
    #[cfg_attr(feature = "thiserror", error("invalid frame trailer"))]
    InvalidTrailer,
    /// Input was not exactly 10 bytes long.
    #[cfg_attr(feature = "thiserror", error("invalid frame length {len}, expected 10"))]
    InvalidLength {
        /// Length that was supplied
        len: usize,
    },
}

#[cfg(not(feature = "thiserror"))]
impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidHeader => f.write_str("invalid frame header"),
            FrameError::ChecksumMismatch => f.write_str("frame checksum mismatch"),
            FrameError::InvalidTrailer => f.write_str("invalid frame trailer"),
            FrameError::InvalidLength { len } => {
                write!(f, "invalid frame length {len}, expected 10")
            }
        }
    }
}

#[cfg(not(feature = "thiserror"))]
impl core::error::Error for FrameError {}

/// Errors returned by the [`Sds011`](crate::Sds011) serial driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum Error<E> {
    /// The underlying serial port failed.
    #[cfg_attr(feature = "thiserror", error("serial error: {0:?}"))]
    Serial(E),
    /// A full frame was read but did not validate.
    #[cfg_attr(feature = "thiserror", error("{0}"))]
    Frame(FrameError),
    /// No `0xAA` header byte showed up within the resync budget.
    #[cfg_attr(feature = "thiserror", error("no frame header within {skipped} bytes"))]
    NoHeader {
        /// Bytes discarded before giving up
        skipped: usize,
    },
}

impl<E> From<FrameError> for Error<E> {
    fn from(err: FrameError) -> Self {
        Error::Frame(err)
    }
}

#[cfg(not(feature = "thiserror"))]
impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Serial(err) => write!(f, "serial error: {err:?}"),
            Error::Frame(err) => fmt::Display::fmt(err, f),
            Error::NoHeader { skipped } => write!(f, "no frame header within {skipped} bytes"),
        }
    }
}

#[cfg(not(feature = "thiserror"))]
impl<E: fmt::Debug> core::error::Error for Error<E> {}
