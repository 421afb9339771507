//! Reorder report modal tests
//!
//! Tests for the report lifecycle including:
//! - Opening fetches and shows the report with two-decimal totals
//! - Reopening always refetches
//! - A failed fetch keeps the modal closed and the previous report

mod common;

use std::sync::Arc;

use common::{dec, report, FakeInventory};
use inventory_dashboard::view::ReportView;
use inventory_dashboard::{DashboardError, ReportController};
use tokio_test::block_on;

fn setup() -> (Arc<FakeInventory>, ReportController<FakeInventory>) {
    let api = Arc::new(FakeInventory::default());
    let controller = ReportController::new(api.clone());
    (api, controller)
}

#[test]
fn test_open_shows_report() {
    let (api, mut controller) = setup();
    api.set_report(Some(report(3, "450.5")));

    block_on(controller.open()).unwrap();

    assert!(controller.is_open());
    assert!(controller.fetched_at().is_some());
    let view = ReportView::from_report(controller.visible_report().unwrap());
    assert_eq!(view.total_items, "Total Items to Reorder: 3");
    assert_eq!(view.total_cost, "Total Estimated Cost: $450.50");
    assert_eq!(view.lines.len(), 3);
    assert_eq!(view.lines[0].name, "Item 0");
    assert_eq!(view.lines[2].name, "Item 2");
}

#[test]
fn test_reopen_refetches() {
    let (api, mut controller) = setup();
    api.set_report(Some(report(3, "450.5")));
    block_on(controller.open()).unwrap();

    controller.close();
    api.set_report(Some(report(1, "75")));
    block_on(controller.open()).unwrap();

    assert_eq!(FakeInventory::calls(&api.report_calls), 2);
    assert_eq!(controller.visible_report().unwrap().total_cost, dec("75"));
}

#[test]
fn test_close_retains_report() {
    let (api, mut controller) = setup();
    api.set_report(Some(report(3, "450.5")));
    block_on(controller.open()).unwrap();

    controller.close();

    assert!(!controller.is_open());
    assert!(controller.visible_report().is_none());
    assert_eq!(controller.report().unwrap().total_items, 3);
}

#[test]
fn test_failed_open_stays_closed() {
    let (_api, mut controller) = setup();

    let result = block_on(controller.open());

    assert!(matches!(result, Err(DashboardError::Transport(_))));
    assert!(!controller.is_open());
    assert!(controller.report().is_none());
}

#[test]
fn test_failed_reopen_keeps_stale_report_hidden() {
    let (api, mut controller) = setup();
    api.set_report(Some(report(3, "450.5")));
    block_on(controller.open()).unwrap();
    controller.close();
    let fetched_at = controller.fetched_at();

    api.set_report(None);
    assert!(block_on(controller.open()).is_err());

    assert!(!controller.is_open());
    assert!(controller.visible_report().is_none());
    assert_eq!(controller.report().unwrap().total_cost, dec("450.5"));
    assert_eq!(controller.fetched_at(), fetched_at);
}
