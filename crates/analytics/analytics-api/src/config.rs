//! Forecast configuration.

use analytics_spi::OrdinalScale;
use serde::{Deserialize, Serialize};

/// How the trend line is fitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Date encoding used as the regression x coordinate
    #[serde(default)]
    pub scale: OrdinalScale,
}

impl ForecastConfig {
    pub fn new(scale: OrdinalScale) -> Self {
        Self { scale }
    }
}

/// Builder for ForecastConfig.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    scale: Option<OrdinalScale>,
}

impl ForecastConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date encoding.
    pub fn scale(mut self, scale: OrdinalScale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Select the encoding by its short name, `month` or `day`.
    pub fn scale_name(mut self, name: &str) -> Result<Self, &'static str> {
        self.scale = Some(match name.trim().to_ascii_lowercase().as_str() {
            "month" | "month_index" => OrdinalScale::MonthIndex,
            "day" | "proleptic_day" => OrdinalScale::ProlepticDay,
            _ => return Err("scale must be 'month' or 'day'"),
        });
        Ok(self)
    }

    /// Build the configuration.
    pub fn build(self) -> ForecastConfig {
        ForecastConfig {
            scale: self.scale.unwrap_or_default(),
        }
    }
}
