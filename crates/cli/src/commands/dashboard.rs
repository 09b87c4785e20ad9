//! Admin dashboard command.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shopfront_core::Price;
use shopfront_storefront::dashboard::{ChangeKind, DashboardReport};
use shopfront_storefront::error::Result;
use shopfront_storefront::state::AppState;

const BAR_WIDTH: i64 = 40;

/// Render the analytics dashboard for the signed-in administrator.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` when signed out and
/// `AppError::Forbidden` for non-admin users.
pub fn show(state: &AppState) -> Result<String> {
    let report = DashboardReport::build(state.auth().current_user(), state.catalog())?;

    let mut lines = vec!["Dashboard".to_owned(), String::new()];
    for stat in &report.stats {
        let marker = match stat.change_kind {
            ChangeKind::Positive => "+",
            ChangeKind::Neutral => "=",
            ChangeKind::Negative => "-",
        };
        lines.push(format!(
            "{:<16} {:>12}  {marker} {}",
            stat.title, stat.value, stat.change
        ));
    }

    lines.push(String::new());
    lines.push("Monthly sales".to_owned());
    let peak = report
        .monthly_sales
        .iter()
        .map(|m| m.total)
        .max()
        .unwrap_or_default();
    for month in &report.monthly_sales {
        lines.push(format!(
            "{} {:>10} {}",
            month.month,
            Price::usd(month.total).display(),
            bar(month.total, peak)
        ));
    }
    lines.push(format!(
        "Year {}",
        Price::usd(report.annual_sales()).display()
    ));

    lines.push(String::new());
    lines.push("Sales by category".to_owned());
    for (name, share) in report.category_shares() {
        lines.push(format!("{name:<16} {share}%"));
    }

    Ok(lines.join("\n"))
}

fn bar(value: Decimal, peak: Decimal) -> String {
    if peak.is_zero() {
        return String::new();
    }
    let width = (value * Decimal::from(BAR_WIDTH) / peak)
        .round()
        .to_usize()
        .unwrap_or(0);
    "#".repeat(width)
}
