use dotenv::dotenv;
use pulseboard_backend::app::App;
use pulseboard_backend::util::logger::Logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep the guards alive so file logging flushes on exit.
    let _logger = Logger::new()?;

    info!("Starting pulseboard backend");

    match dotenv() {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("No .env file loaded: {} (using system env vars)", e),
    }

    let app = App::from_env()?;

    // Smoke run mirroring what the dashboard does at startup: restore the
    // session (logging in fresh if there is none), then load every view.
    let current_user = match app.restore_session().await? {
        Some(user) => user,
        None => {
            let user = app.login("admin@example.com", "password").await?;
            app.establish_session(&user).await?;
            user
        }
    };
    info!("Authenticated as {} <{}>", current_user.name, current_user.email);

    let (stats, users) = tokio::join!(app.get_stats(), app.list_users());
    let stats = stats?;
    let users = users?;
    info!(
        "Dashboard: {} users, {} in sales, {} active orders, {} pending issues",
        stats.total_users, stats.total_sales, stats.active_orders, stats.pending_issues
    );
    for user in &users {
        info!("  {} {} <{}> ({:?}/{:?})", user.id, user.name, user.email, user.role, user.status);
    }

    let reports = app.get_reports().await;
    info!(
        "Reports: {} weekly points, top product {:?}, {} recent transactions",
        reports.revenue_data.len(),
        reports.top_products.first().map(|p| p.name),
        reports.recent_transactions.len()
    );

    Ok(())
}
