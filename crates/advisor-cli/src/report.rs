//! Human-readable console report for one run.
//!
//! Informational output only; the CSV file is the contract surface for
//! downstream consumers.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use advisor_core::{to_usd, AlertDirection, RecommendationAction, RunReport};

const REQUEST_STAMP: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour repr:12]:[minute] [period]");

const RULE: &str = "-------------------------";

pub fn render(report: &RunReport, requested_at: OffsetDateTime) {
    println!("{RULE}");
    println!("SELECTED SYMBOL: {}", report.symbol);
    println!("{RULE}");

    let stamp = requested_at
        .format(REQUEST_STAMP)
        .unwrap_or_else(|_| String::from("unknown"));
    println!("REQUEST AT: {stamp}");
    println!("{RULE}");

    let stats = &report.statistics;
    println!("LATEST DAY: {}", stats.last_refreshed);
    println!("LATEST CLOSE: {}", usd(stats.latest_close));
    println!("PRIOR CLOSE: {}", usd(stats.prior_close));
    println!("RECENT HIGH: {}", usd(stats.recent_high));
    println!("RECENT LOW: {}", usd(stats.recent_low));
    println!("{RULE}");

    match report.recommendation.action {
        RecommendationAction::Buy => println!("RECOMMENDATION: BUY"),
        RecommendationAction::Hold => println!("RECOMMENDATION: HOLD"),
    }
    println!("RECOMMENDATION REASON: {}", report.recommendation.reason);
    println!("{RULE}");

    let movement = report.alert.percent_change * 100.0;
    match report.alert.direction {
        AlertDirection::None => {
            println!("PRICE ALERT: none (moved {movement:+.2}%, within the 5% threshold)");
        }
        AlertDirection::Increase | AlertDirection::Decrease => {
            println!("PRICE ALERT: close moved {movement:+.2}% versus the prior day");
            match &report.notification {
                Some(Ok(receipt)) => println!("NOTIFICATION: sent via {}", receipt.provider),
                Some(Err(error)) => println!("NOTIFICATION: delivery failed ({error})"),
                None => println!("NOTIFICATION: suppressed (--no-alerts)"),
            }
        }
    }
    println!("{RULE}");

    println!("WROTE DATA TO CSV: {}", report.csv_path.display());
    println!("{RULE}");
    println!("HAPPY INVESTING!");
    println!("{RULE}");
}

fn usd(amount: f64) -> String {
    // statistics are built from validated finite prices
    to_usd(amount).unwrap_or_else(|_| String::from("n/a"))
}
