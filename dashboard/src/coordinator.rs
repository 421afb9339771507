//! Dashboard screen composition and action routing

use std::sync::Arc;

use shared::{ProductId, ReorderReport, SimulatedOverlay};

use crate::error::{DashboardResult, Notice};
use crate::external::InventoryApi;
use crate::report::ReportController;
use crate::simulation::SimulationController;
use crate::store::ProductOverlayStore;
use crate::view::{ReportView, RowView};

/// Product table load state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// An operator action on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// The row button: simulate a spike, or reset the simulated row
    ToggleSimulation(ProductId),
    OpenReport,
    CloseReport,
    Reload,
}

/// The inventory dashboard screen
pub struct DashboardCoordinator<A> {
    api: Arc<A>,
    store: ProductOverlayStore,
    simulation: SimulationController<A>,
    report: ReportController<A>,
    load_state: LoadState,
    last_notice: Option<Notice>,
}

impl<A: InventoryApi> DashboardCoordinator<A> {
    pub fn new(api: A) -> Self {
        Self::with_shared_api(Arc::new(api))
    }

    /// Build the dashboard on a client shared with the caller
    pub fn with_shared_api(api: Arc<A>) -> Self {
        Self {
            simulation: SimulationController::new(api.clone()),
            report: ReportController::new(api.clone()),
            api,
            store: ProductOverlayStore::new(),
            load_state: LoadState::Loading,
            last_notice: None,
        }
    }

    /// Initial load of the product table
    pub async fn start(&mut self) {
        self.reload().await;
    }

    /// Fetch the product collection; the overlay and report are left alone
    pub async fn reload(&mut self) {
        self.load_state = LoadState::Loading;
        match self.api.fetch_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "Loaded products");
                self.store.load(products);
                if self.store.has_dangling_overlay() {
                    tracing::error!(
                        product_id = ?self.store.active_overlay_id(),
                        "Simulated overlay does not match any loaded product"
                    );
                }
                self.load_state = LoadState::Ready;
                self.last_notice = None;
            }
            Err(e) => {
                let notice = e.into_notice();
                self.load_state = LoadState::Failed(notice.message.clone());
                self.last_notice = Some(notice);
            }
        }
    }

    /// Route an operator action. Failures become the current notice.
    pub async fn dispatch(&mut self, action: DashboardAction) {
        let result = match action {
            DashboardAction::ToggleSimulation(product_id) => self
                .simulation
                .toggle(&mut self.store, product_id)
                .await
                .map(|outcome| {
                    tracing::debug!(product_id = %product_id, ?outcome, "Toggled simulation");
                }),
            DashboardAction::OpenReport => self.report.open().await,
            DashboardAction::CloseReport => {
                self.report.close();
                Ok(())
            }
            DashboardAction::Reload => {
                self.reload().await;
                return;
            }
        };

        self.record(result);
    }

    fn record(&mut self, result: DashboardResult<()>) {
        self.last_notice = match result {
            Ok(()) => None,
            Err(e) => Some(e.into_notice()),
        };
    }

    /// Rows to render, in server order. Empty unless the load succeeded.
    pub fn rows(&self) -> Vec<RowView> {
        if self.load_state != LoadState::Ready {
            return Vec::new();
        }
        self.store.views().map(|view| RowView::from_view(&view)).collect()
    }

    /// The report modal, while it is open
    pub fn report_view(&self) -> Option<ReportView> {
        self.report.visible_report().map(ReportView::from_report)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    pub fn store(&self) -> &ProductOverlayStore {
        &self.store
    }

    pub fn report(&self) -> &ReportController<A> {
        &self.report
    }

    pub fn simulation(&self) -> &SimulationController<A> {
        &self.simulation
    }

    /// Install a simulation response that arrived out of band
    pub fn install_simulation(
        &mut self,
        requested: ProductId,
        response: DashboardResult<SimulatedOverlay>,
    ) {
        let result = response.and_then(|overlay| {
            SimulationController::<A>::install(&mut self.store, requested, overlay)
        });
        self.record(result);
    }

    /// Apply a report response that arrived out of band
    pub fn complete_report(&mut self, response: DashboardResult<ReorderReport>) {
        let result = response.map(|report| self.report.complete(report));
        self.record(result);
    }
}
