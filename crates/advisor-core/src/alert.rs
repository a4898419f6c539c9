//! Day-over-day price-movement alert rule.

use crate::error::AdvisorError;
use crate::{AlertDecision, AlertDirection};

/// Fractional day-over-day move beyond which a notification fires. Applied
/// strictly on both sides, so a move of exactly 5% stays quiet.
pub const ALERT_THRESHOLD: f64 = 0.05;

/// Decide whether the latest close moved far enough from the prior close to
/// warrant a notification, and in which direction.
///
/// Pure decision only; dispatching the actual notification is the
/// orchestrator's concern. The increase and decrease rules are mutually
/// exclusive by construction: a positive base cannot be both below 0.95x
/// and above 1.05x of itself.
pub fn decide_alert(latest_close: f64, prior_close: f64) -> Result<AlertDecision, AdvisorError> {
    if prior_close == 0.0 {
        return Err(AdvisorError::DivisionByZero);
    }

    let percent_change = (latest_close - prior_close) / prior_close;
    let direction = if latest_close < (1.0 - ALERT_THRESHOLD) * prior_close {
        AlertDirection::Decrease
    } else if latest_close > (1.0 + ALERT_THRESHOLD) * prior_close {
        AlertDirection::Increase
    } else {
        AlertDirection::None
    };

    Ok(AlertDecision {
        should_notify: direction != AlertDirection::None,
        direction,
        percent_change,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_decrease_below_the_threshold() {
        let decision = decide_alert(94.99, 100.0).expect("decision");
        assert_eq!(decision.direction, AlertDirection::Decrease);
        assert!(decision.should_notify);
        assert!(decision.percent_change < 0.0);
    }

    #[test]
    fn exactly_five_percent_down_stays_quiet() {
        let decision = decide_alert(95.0, 100.0).expect("decision");
        assert_eq!(decision.direction, AlertDirection::None);
        assert!(!decision.should_notify);
    }

    #[test]
    fn fires_increase_above_the_threshold() {
        let decision = decide_alert(105.01, 100.0).expect("decision");
        assert_eq!(decision.direction, AlertDirection::Increase);
        assert!(decision.should_notify);
    }

    #[test]
    fn exactly_five_percent_up_stays_quiet() {
        let decision = decide_alert(105.0, 100.0).expect("decision");
        assert_eq!(decision.direction, AlertDirection::None);
    }

    #[test]
    fn small_moves_stay_quiet() {
        let decision = decide_alert(101.63, 100.88).expect("decision");
        assert_eq!(decision.direction, AlertDirection::None);
        assert!((decision.percent_change - 0.007434).abs() < 1e-6);
    }

    #[test]
    fn zero_prior_close_is_an_error() {
        let err = decide_alert(100.0, 0.0).expect_err("must fail");
        assert!(matches!(err, AdvisorError::DivisionByZero));
    }
}
