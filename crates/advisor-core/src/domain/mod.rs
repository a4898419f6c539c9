//! Domain models for the advisor pipeline.

mod date;
mod models;
mod symbol;

pub use date::TradingDate;
pub use models::{
    AlertDecision, AlertDirection, DailyPrice, PriceSeries, Recommendation, RecommendationAction,
    Statistics,
};
pub use symbol::Symbol;
