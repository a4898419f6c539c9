//! Buy/hold recommendation from the fixed threshold rule.

use crate::{Recommendation, RecommendationAction, Statistics};

/// Margin above the recent low within which the latest close still rates a
/// buy. Fixed, not configurable; exposed as a constant for testability.
pub const BUY_MARGIN: f64 = 0.20;

/// BUY iff the latest close sits in `[recent_low, (1 + BUY_MARGIN) * recent_low)`,
/// otherwise HOLD. The upper bound is exclusive: closing exactly 20% above
/// the recent low is a HOLD.
///
/// When `recent_low` is zero the interval collapses to `[0, 0)` and BUY is
/// only reachable at a latest close of exactly zero; that numerical edge is
/// intentional and not special-cased.
pub fn recommend(stats: &Statistics) -> Recommendation {
    let ceiling = (1.0 + BUY_MARGIN) * stats.recent_low;

    if stats.latest_close >= stats.recent_low && stats.latest_close < ceiling {
        Recommendation {
            action: RecommendationAction::Buy,
            reason: String::from("the latest close is less than 20% above the recent low"),
        }
    } else {
        Recommendation {
            action: RecommendationAction::Hold,
            reason: String::from(
                "the latest close is below the recent low or at least 20% above it",
            ),
        }
    }
}
