//! Reorder report modal lifecycle

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::ReorderReport;

use crate::error::DashboardResult;
use crate::external::InventoryApi;

/// Fetches the reorder report and tracks whether its modal is open
///
/// The last fetched report is retained after the modal closes; opening always
/// fetches a fresh one.
pub struct ReportController<A> {
    api: Arc<A>,
    report: Option<ReorderReport>,
    fetched_at: Option<DateTime<Utc>>,
    is_open: bool,
}

impl<A: InventoryApi> ReportController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            report: None,
            fetched_at: None,
            is_open: false,
        }
    }

    /// Fetch the report from the inventory service, without touching state
    pub async fn request(&self) -> DashboardResult<ReorderReport> {
        tracing::info!("Fetching reorder report");
        self.api.fetch_reorder_report().await
    }

    /// Apply a fetched report: store it and open the modal
    pub fn complete(&mut self, report: ReorderReport) {
        tracing::info!(
            total_items = report.total_items,
            total_cost = %report.total_cost,
            "Opening reorder report"
        );
        self.report = Some(report);
        self.fetched_at = Some(Utc::now());
        self.is_open = true;
    }

    /// Fetch a fresh report and open the modal.
    ///
    /// On failure the modal stays closed and any earlier report is kept.
    pub async fn open(&mut self) -> DashboardResult<()> {
        let report = self.request().await?;
        self.complete(report);
        Ok(())
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The retained report, whether or not the modal is open
    pub fn report(&self) -> Option<&ReorderReport> {
        self.report.as_ref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// The report to render, only while the modal is open
    pub fn visible_report(&self) -> Option<&ReorderReport> {
        self.report.as_ref().filter(|_| self.is_open)
    }
}
