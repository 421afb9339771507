//! Inventory Monitoring Dashboard - terminal front-end
//!
//! Shows the stock table of the inventory service and lets the operator
//! preview demand spikes and open the reorder report.

use inventory_dashboard::{
    cli::{self, Command},
    view, Config, DashboardCoordinator, DashboardError, InventoryApi, InventoryClient,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load().map_err(DashboardError::from)?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Inventory Monitoring Dashboard");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Inventory service: {}", config.api.base_url);

    let mut dashboard = DashboardCoordinator::new(InventoryClient::new(&config.api.base_url));
    dashboard.start().await;
    print_screen(&dashboard);
    println!("{}", cli::HELP);

    let mut input = BufReader::new(tokio::io::stdin());
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        match cli::parse_input(&line) {
            Command::Action(action) => {
                dashboard.dispatch(action).await;
                print_screen(&dashboard);
            }
            Command::Help => println!("{}", cli::HELP),
            Command::Quit => break,
        }
    }

    tracing::info!("Dashboard closed");
    Ok(())
}

fn print_screen<A: InventoryApi>(dashboard: &DashboardCoordinator<A>) {
    println!(
        "{}",
        view::render_dashboard(
            &dashboard.rows(),
            dashboard.load_state(),
            dashboard.last_notice()
        )
    );
    if let Some(report) = dashboard.report_view() {
        println!("{}", view::render_report(&report));
    }
}
