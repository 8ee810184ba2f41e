//! Pharmacy Manager - Dashboard
//!
//! Logs in to the pharmacy API, loads the first inventory page and the sales
//! ledger, and reports what the inventory table and sales dialog would show.

use pharmacy_manager_client::{ApiClient, Config};
use shared::{Credentials, DashboardModel, PageSize, ViewState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pharmacy_dashboard=debug,pharmacy_manager_client=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Pharmacy Manager dashboard");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("API: {}", config.api.base_url);

    let page_size = PageSize::try_from(config.dashboard.page_size)
        .map_err(|e| anyhow::anyhow!("dashboard.page_size: {}", e))?;
    let mut view = ViewState::default();
    view.set_page_size(page_size);

    let mut client = ApiClient::new(&config.api)?;
    let credentials = Credentials::new(
        config.credentials.username.clone(),
        config.credentials.password.clone(),
    );
    let session = client.login(&credentials).await?;
    tracing::info!("Welcome back, {} ({})", session.username, session.role);

    let mut dashboard = DashboardModel::new(view);
    let page = client.list_medicines(dashboard.view.page_request()).await?;
    dashboard.replace_inventory(page);
    dashboard.replace_sales(client.list_sales().await?);

    let today = chrono::Local::now().date_naive();
    let controls = dashboard.page_controls();
    tracing::info!(
        "Inventory page {} of {}",
        controls.current + 1,
        controls.total_pages.max(1)
    );

    for medicine in dashboard.visible_rows(today) {
        tracing::info!(
            "{:<24} qty {:>5}  price {:>8}  expires {:<10}  {}",
            medicine.name,
            medicine.quantity,
            medicine.price.round_dp(2),
            medicine
                .expiry_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            shared::classify(medicine, today)
        );
    }

    let summary = dashboard.sales_summary();
    tracing::info!("Total revenue: {}", summary.total_revenue.round_dp(2));
    for line in &summary.by_medicine {
        tracing::info!(
            "  {:<24} {:>5} units  {:>10}",
            line.name,
            line.total_qty,
            line.total_rev.round_dp(2)
        );
    }

    Ok(())
}
