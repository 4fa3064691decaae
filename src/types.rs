/// A single 10-byte SDS011 frame, as read off the wire.
pub type RawFrame = [u8; crate::frame::FRAME_LEN];

/// SDS011 sensor data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Mass Concentration PM2.5 [μg/m³]
    pub pm2_5: f32,
    /// Mass Concentration PM10 [μg/m³]
    pub pm10: f32,
    /// Sensor ID
    pub sensor_id: u16,
    /// Commander No. (`0xC0` for data reports)
    pub commander: u8,
}

/// SDS011 sensor raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReadingRaw {
    /// Mass Concentration PM2.5 [μg/m³] [×10]
    pub pm2_5: u16,
    /// Mass Concentration PM10 [μg/m³] [×10]
    pub pm10: u16,
    /// Sensor ID
    pub sensor_id: u16,
    /// Commander No.
    pub commander: u8,
}

impl From<SensorReadingRaw> for SensorReading {
    fn from(raw: SensorReadingRaw) -> Self {
        Self {
            pm2_5: f32::from(raw.pm2_5) / 10.0,
            pm10: f32::from(raw.pm10) / 10.0,
            sensor_id: raw.sensor_id,
            commander: raw.commander,
        }
    }
}

impl From<&SensorReading> for SensorReadingRaw {
    /// Scales by 10 and rounds to the nearest wire value, saturating at the
    /// `u16` range.
    fn from(reading: &SensorReading) -> Self {
        Self {
            pm2_5: to_tenths(reading.pm2_5),
            pm10: to_tenths(reading.pm10),
            sensor_id: reading.sensor_id,
            commander: reading.commander,
        }
    }
}

// `as` saturates and maps NaN to 0.
fn to_tenths(value: f32) -> u16 {
    (value * 10.0 + 0.5) as u16
}
