//! Test fixtures and an in-memory inventory service

#![allow(dead_code)]

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use inventory_dashboard::{DashboardError, DashboardResult, InventoryApi};
use rust_decimal::Decimal;
use shared::{
    Criticality, Product, ProductId, ReorderItem, ReorderReport, SimulatedOverlay,
    SimulationRequest,
};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn product(id: u64, days_remaining: f64, lead_time: u32) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {}", id),
        current_stock: 100.0,
        average_daily_sales: 5.0,
        days_remaining,
        criticality: Criticality::High,
        lead_time,
        needs_reorder: days_remaining < f64::from(lead_time) + 5.0,
        reorder_qty: 200,
    }
}

/// A spiked record as the backend would send it, with its own classification
pub fn spiked(id: u64, days_remaining: f64) -> SimulatedOverlay {
    SimulatedOverlay::from(Product {
        id: ProductId(id),
        name: format!("Product {}", id),
        current_stock: 100.0,
        average_daily_sales: 15.0,
        days_remaining,
        criticality: Criticality::Low,
        lead_time: 99,
        needs_reorder: true,
        reorder_qty: 800,
    })
}

pub fn report(total_items: u32, total_cost: &str) -> ReorderReport {
    ReorderReport {
        total_items,
        total_cost: dec(total_cost),
        items: (0..total_items)
            .map(|i| ReorderItem {
                name: format!("Item {}", i),
                current_stock: 10.0,
                days_remaining: 2.0,
                reorder_qty: 50,
                cost_per_unit: dec("1.5"),
                estimated_cost: dec("75"),
                criticality: Criticality::Medium,
            })
            .collect(),
    }
}

fn unavailable() -> DashboardError {
    DashboardError::Transport("connection refused".to_string())
}

/// Scripted inventory service. Unset responses fail with a transport error.
#[derive(Default)]
pub struct FakeInventory {
    products: Mutex<Option<Vec<Product>>>,
    simulations: Mutex<HashMap<ProductId, SimulatedOverlay>>,
    report: Mutex<Option<ReorderReport>>,
    pub product_calls: AtomicUsize,
    pub simulate_calls: AtomicUsize,
    pub report_calls: AtomicUsize,
    pub last_simulation: Mutex<Option<SimulationRequest>>,
}

impl FakeInventory {
    pub fn with_products(products: Vec<Product>) -> Self {
        let fake = Self::default();
        fake.set_products(Some(products));
        fake
    }

    pub fn set_products(&self, products: Option<Vec<Product>>) {
        *self.products.lock().unwrap() = products;
    }

    /// Answer simulations of `requested` with `overlay`
    pub fn set_simulation(&self, requested: u64, overlay: SimulatedOverlay) {
        self.simulations
            .lock()
            .unwrap()
            .insert(ProductId(requested), overlay);
    }

    pub fn clear_simulations(&self) {
        self.simulations.lock().unwrap().clear();
    }

    pub fn set_report(&self, report: Option<ReorderReport>) {
        *self.report.lock().unwrap() = report;
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

impl InventoryApi for FakeInventory {
    async fn fetch_products(&self) -> DashboardResult<Vec<Product>> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.products.lock().unwrap().clone().ok_or_else(unavailable)
    }

    async fn simulate(&self, request: &SimulationRequest) -> DashboardResult<SimulatedOverlay> {
        self.simulate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_simulation.lock().unwrap() = Some(request.clone());
        self.simulations
            .lock()
            .unwrap()
            .get(&request.product_id)
            .cloned()
            .ok_or_else(unavailable)
    }

    async fn fetch_reorder_report(&self) -> DashboardResult<ReorderReport> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        self.report.lock().unwrap().clone().ok_or_else(unavailable)
    }
}
