//! Presentation view models
//!
//! Formats merged product views and reorder reports into display strings,
//! tagged with their color bands. [`render_dashboard`] and [`render_report`]
//! lay them out as plain text for the terminal front-end.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::{criticality_color, ColorBand, ProductId, ProductView, ReorderReport, RiskIndicators};

use crate::coordinator::LoadState;
use crate::error::Notice;

pub const DASHBOARD_TITLE: &str = "Warehouse Inventory Management";
pub const REPORT_ACTION_LABEL: &str = "Generate Reorder Report";
pub const REPORT_TITLE: &str = "Reorder Report";
pub const SIMULATE_LABEL: &str = "Simulate Spike";
pub const RESET_LABEL: &str = "Reset";

const PROGRESS_BAR_WIDTH: usize = 20;

/// One rendered dashboard row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: ProductId,
    pub name: String,
    pub stock: String,
    pub daily_sales: String,
    pub days_remaining: String,
    pub stockout_progress: f64,
    pub days_band: ColorBand,
    pub criticality: String,
    pub criticality_band: ColorBand,
    pub lead_time: String,
    /// `"{qty} units"` when a reorder is needed, `"-"` otherwise
    pub reorder: String,
    pub action_label: &'static str,
    pub is_simulated: bool,
}

impl RowView {
    pub fn from_view(view: &ProductView) -> Self {
        let display = &view.display;
        let indicators = RiskIndicators::for_display(display);

        Self {
            id: display.id,
            name: display.name.clone(),
            stock: display.current_stock.to_string(),
            daily_sales: display.average_daily_sales.to_string(),
            days_remaining: format_days(display.days_remaining),
            stockout_progress: indicators.stockout_progress,
            days_band: indicators.days_band,
            criticality: display.criticality.to_string(),
            criticality_band: indicators.criticality_band,
            lead_time: format!("{} days", display.lead_time),
            reorder: if display.needs_reorder {
                format!("{} units", display.reorder_qty)
            } else {
                "-".to_string()
            },
            action_label: if view.is_simulated {
                RESET_LABEL
            } else {
                SIMULATE_LABEL
            },
            is_simulated: view.is_simulated,
        }
    }
}

/// The open reorder report modal
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub total_items: String,
    pub total_cost: String,
    pub lines: Vec<ReportLineView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLineView {
    pub name: String,
    pub current_stock: String,
    pub days_remaining: String,
    pub reorder_qty: String,
    pub cost_per_unit: String,
    pub estimated_cost: String,
    pub criticality: String,
    pub criticality_band: ColorBand,
}

impl ReportView {
    pub fn from_report(report: &ReorderReport) -> Self {
        let lines = report
            .items
            .iter()
            .map(|item| ReportLineView {
                name: item.name.clone(),
                current_stock: item.current_stock.to_string(),
                days_remaining: format_days(item.days_remaining),
                reorder_qty: item.reorder_qty.to_string(),
                cost_per_unit: format!("${}", item.cost_per_unit),
                estimated_cost: format_currency(item.estimated_cost),
                criticality: item.criticality.to_string(),
                criticality_band: criticality_color(&item.criticality),
            })
            .collect();

        Self {
            total_items: format!("Total Items to Reorder: {}", report.total_items),
            total_cost: format!(
                "Total Estimated Cost: {}",
                format_currency(report.total_cost)
            ),
            lines,
        }
    }
}

/// Days to one decimal place, e.g. `"3.0 days"`
pub fn format_days(days: f64) -> String {
    format!("{:.1} days", days)
}

/// Currency to two decimal places, e.g. `"$450.50"`
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("${}", rounded)
}

/// Text stand-in for a determinate progress control
pub fn progress_bar(percent: f64) -> String {
    // the control itself cannot draw outside 0..=100
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn tagged(text: &str, band: ColorBand) -> String {
    match band {
        ColorBand::Neutral => text.to_string(),
        band => format!("{} ({})", text, band),
    }
}

/// Lay out the dashboard screen as plain text
pub fn render_dashboard(rows: &[RowView], state: &LoadState, notice: Option<&Notice>) -> String {
    let mut out = String::new();
    out.push_str(DASHBOARD_TITLE);
    out.push('\n');
    out.push_str(&format!("[r] {}\n\n", REPORT_ACTION_LABEL));

    if let Some(notice) = notice {
        out.push_str(&format!("! {} ({})\n\n", notice.message, notice.code));
    }

    match state {
        LoadState::Loading => {
            out.push_str("Loading products...\n");
            return out;
        }
        LoadState::Failed(message) => {
            out.push_str(&format!("Failed to load products: {}\n[l] Retry\n", message));
            return out;
        }
        LoadState::Ready => {}
    }

    out.push_str(&format!(
        "{:<6}{:<24}{:>8}{:>12}  {:<46}{:<18}{:<10}{:<14}{}\n",
        "ID", "Product", "Stock", "Daily Sales", "Days Remaining", "Criticality", "Lead Time",
        "Reorder Qty", "Actions"
    ));
    for row in rows {
        let days = format!(
            "{} {}",
            progress_bar(row.stockout_progress),
            tagged(&row.days_remaining, row.days_band)
        );
        out.push_str(&format!(
            "{:<6}{:<24}{:>8}{:>12}  {:<46}{:<18}{:<10}{:<14}[s {}] {}\n",
            row.id.to_string(),
            row.name,
            row.stock,
            row.daily_sales,
            days,
            tagged(&row.criticality, row.criticality_band),
            row.lead_time,
            row.reorder,
            row.id,
            row.action_label
        ));
    }
    out
}

/// Lay out the reorder report modal as plain text
pub fn render_report(view: &ReportView) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", REPORT_TITLE));
    out.push_str(&view.total_items);
    out.push('\n');
    out.push_str(&view.total_cost);
    out.push_str("\n\n");
    out.push_str(&format!(
        "{:<24}{:>14}{:>16}{:>18}{:>15}{:>16}  {}\n",
        "Product", "Current Stock", "Days Remaining", "Reorder Quantity", "Cost Per Unit",
        "Estimated Cost", "Criticality"
    ));
    for line in &view.lines {
        out.push_str(&format!(
            "{:<24}{:>14}{:>16}{:>18}{:>15}{:>16}  {}\n",
            line.name,
            line.current_stock,
            line.days_remaining,
            line.reorder_qty,
            line.cost_per_unit,
            line.estimated_cost,
            tagged(&line.criticality, line.criticality_band)
        ));
    }
    out.push_str("[c] Close\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Criticality, Product, ReorderItem};
    use std::str::FromStr;

    fn view(needs_reorder: bool, is_simulated: bool) -> ProductView {
        ProductView {
            display: Product {
                id: ProductId(1),
                name: "Gloves".to_string(),
                current_stock: 30.0,
                average_daily_sales: 10.0,
                days_remaining: 3.0,
                criticality: Criticality::High,
                lead_time: 5,
                needs_reorder,
                reorder_qty: 570,
            },
            is_simulated,
        }
    }

    #[test]
    fn test_row_formatting() {
        let row = RowView::from_view(&view(true, false));
        assert_eq!(row.stock, "30");
        assert_eq!(row.days_remaining, "3.0 days");
        assert_eq!(row.days_band, ColorBand::Error);
        assert!((row.stockout_progress - 30.0).abs() < 1e-9);
        assert_eq!(row.criticality, "high");
        assert_eq!(row.lead_time, "5 days");
        assert_eq!(row.reorder, "570 units");
        assert_eq!(row.action_label, SIMULATE_LABEL);
    }

    #[test]
    fn test_row_without_reorder_and_simulated() {
        let row = RowView::from_view(&view(false, true));
        assert_eq!(row.reorder, "-");
        assert_eq!(row.action_label, RESET_LABEL);
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(Decimal::from_str("450.5").unwrap()), "$450.50");
        assert_eq!(format_currency(Decimal::from_str("12.345").unwrap()), "$12.35");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_report_view() {
        let report = ReorderReport {
            total_items: 1,
            total_cost: Decimal::from_str("250").unwrap(),
            items: vec![ReorderItem {
                name: "Bolts".to_string(),
                current_stock: 40.0,
                days_remaining: 4.0,
                reorder_qty: 200,
                cost_per_unit: Decimal::from_str("1.25").unwrap(),
                estimated_cost: Decimal::from_str("250").unwrap(),
                criticality: Criticality::from("other"),
            }],
        };

        let view = ReportView::from_report(&report);
        assert_eq!(view.total_items, "Total Items to Reorder: 1");
        assert_eq!(view.total_cost, "Total Estimated Cost: $250.00");
        assert_eq!(view.lines[0].cost_per_unit, "$1.25");
        assert_eq!(view.lines[0].estimated_cost, "$250.00");
        assert_eq!(view.lines[0].days_remaining, "4.0 days");
        assert_eq!(view.lines[0].criticality_band, ColorBand::Neutral);
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(-20.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn test_failed_state_has_no_table() {
        let text = render_dashboard(&[], &LoadState::Failed("offline".into()), None);
        assert!(text.contains("Failed to load products: offline"));
        assert!(!text.contains("Daily Sales"));
    }
}
