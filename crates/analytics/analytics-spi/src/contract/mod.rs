//! Contract module containing trait definitions for analytics models

mod forecaster;
mod trend_model;

pub use forecaster::Forecaster;
pub use trend_model::TrendModel;
