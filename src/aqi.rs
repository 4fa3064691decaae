//! PM2.5 to air quality index conversion.
//!
//! The index is interpolated linearly between the rows of a breakpoint table,
//! see [`US_EPA_PM2_5`].

use core::fmt;

use crate::types::SensorReading;

/// Display colour of an AQI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiColor {
    /// No colour, used for out of range values
    None,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    DarkPurple,
}

impl AqiColor {
    pub const fn name(&self) -> &'static str {
        match self {
            AqiColor::None => "-",
            AqiColor::Green => "GREEN",
            AqiColor::Yellow => "YELLOW",
            AqiColor::Orange => "ORANGE",
            AqiColor::Red => "RED",
            AqiColor::Purple => "PURPLE",
            AqiColor::DarkPurple => "DARK_PURPLE",
        }
    }
}

/// AQI category, named after the upper bound of its bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiCategory {
    /// Outside the table
    OffCharts,
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub const fn name(&self) -> &'static str {
        match self {
            AqiCategory::OffCharts => "OFF_CHARTS",
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    pub const fn color(&self) -> AqiColor {
        match self {
            AqiCategory::OffCharts => AqiColor::None,
            AqiCategory::Good => AqiColor::Green,
            AqiCategory::Moderate => AqiColor::Yellow,
            AqiCategory::UnhealthyForSensitiveGroups => AqiColor::Orange,
            AqiCategory::Unhealthy => AqiColor::Red,
            AqiCategory::VeryUnhealthy => AqiColor::Purple,
            AqiCategory::Hazardous => AqiColor::DarkPurple,
        }
    }

    /// Health effects at this level, where a text is defined.
    pub const fn health_effects(&self) -> Option<&'static str> {
        match self {
            AqiCategory::Good => Some("Little to no risk."),
            _ => None,
        }
    }

    /// Precautionary actions at this level, where a text is defined.
    pub const fn actions(&self) -> Option<&'static str> {
        match self {
            AqiCategory::Good => Some("None."),
            _ => None,
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AqiBreakpoint {
    /// Upper PM2.5 bound of the bracket [μg/m³]
    pub pm2_5_ceiling: f32,
    /// Index value at `pm2_5_ceiling`
    pub aqi_ceiling: u16,
    pub category: AqiCategory,
}

impl AqiBreakpoint {
    pub const fn new(pm2_5_ceiling: f32, aqi_ceiling: u16, category: AqiCategory) -> Self {
        Self {
            pm2_5_ceiling,
            aqi_ceiling,
            category,
        }
    }
}

/// US EPA PM2.5 breakpoints, ascending.
pub static US_EPA_PM2_5: [AqiBreakpoint; 7] = [
    AqiBreakpoint::new(0.0, 0, AqiCategory::OffCharts),
    AqiBreakpoint::new(12.0, 50, AqiCategory::Good),
    AqiBreakpoint::new(35.4, 100, AqiCategory::Moderate),
    AqiBreakpoint::new(55.4, 150, AqiCategory::UnhealthyForSensitiveGroups),
    AqiBreakpoint::new(150.4, 200, AqiCategory::Unhealthy),
    AqiBreakpoint::new(250.4, 300, AqiCategory::VeryUnhealthy),
    AqiBreakpoint::new(500.4, 500, AqiCategory::Hazardous),
];

/// Result of an AQI conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AqiResult {
    /// Mass Concentration PM2.5 [μg/m³]
    pub pm2_5: f32,
    /// Mass Concentration PM10 [μg/m³], not used for the index
    pub pm10: f32,
    pub aqi: f32,
    pub category: AqiCategory,
}

impl fmt::Display for AqiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} PM2.5={} PM10={} AQI={}",
            self.category, self.pm2_5, self.pm10, self.aqi
        )
    }
}

/// Piecewise-linear PM2.5 to AQI converter.
#[derive(Debug, Clone, Copy)]
pub struct AqiConverter<'a> {
    table: &'a [AqiBreakpoint],
}

impl Default for AqiConverter<'static> {
    fn default() -> Self {
        Self::new(&US_EPA_PM2_5)
    }
}

impl<'a> AqiConverter<'a> {
    /// `table` must be sorted by ascending `pm2_5_ceiling`.
    pub const fn new(table: &'a [AqiBreakpoint]) -> Self {
        Self { table }
    }

    /// Converts a PM2.5 concentration; `pm10` is carried along unchanged.
    ///
    /// Values below the first row, at or above the last row, or NaN give
    /// an index of 0 in the category of the first row.
    pub fn convert(&self, pm2_5: f32, pm10: f32) -> AqiResult {
        let mut result = AqiResult {
            pm2_5,
            pm10,
            aqi: 0.0,
            category: self
                .table
                .first()
                .map_or(AqiCategory::OffCharts, |row| row.category),
        };

        // The first row is only a floor; anything below it stays off the charts.
        let Some(i) = self
            .table
            .iter()
            .position(|row| pm2_5 < row.pm2_5_ceiling)
            .filter(|&i| i > 0)
        else {
            return result;
        };

        let prev = &self.table[i - 1];
        let row = &self.table[i];
        result.aqi = (pm2_5 - prev.pm2_5_ceiling)
            * (f32::from(row.aqi_ceiling) - f32::from(prev.aqi_ceiling))
            / (row.pm2_5_ceiling - prev.pm2_5_ceiling)
            + f32::from(prev.aqi_ceiling);
        result.category = row.category;
        result
    }

    pub fn convert_reading(&self, reading: &SensorReading) -> AqiResult {
        self.convert(reading.pm2_5, reading.pm10)
    }
}
