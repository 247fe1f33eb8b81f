use atelier_buddy::config::{database, workshop};
use atelier_buddy::core::calendar::day_schedule;
use atelier_buddy::core::clock::Clock;
use atelier_buddy::core::seed::sample_orders;
use atelier_buddy::core::store::OrderStore;
use atelier_buddy::core::view::group_by_status;
use atelier_buddy::errors::Result;
use atelier_buddy::persistence::SnapshotStore;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// One operator, one device: a single-threaded runtime is all this needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the workshop configuration
    let config = workshop::load_default_config()?;
    info!(
        "Workshop settings: {} off, {} work slot(s) shown per day.",
        config.workshop.skip_day, config.workshop.daily_capacity
    );

    // 4. Initialize the snapshot database (path from DATABASE_URL)
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    // 5. Open the order store from the persisted snapshots
    let clock = Clock::System;
    let mut store = OrderStore::open(SnapshotStore::new(db), config.workshop, clock)
        .await
        .inspect(|_| info!("Order store loaded."))
        .inspect_err(|e| error!("Failed to open order store: {}", e))?;

    // 6. Seed demonstration orders on a first run
    let today = clock.today();
    if store
        .seed_if_empty(sample_orders(today, config.workshop.skip_day))
        .await?
    {
        info!("Empty order book, seeded sample orders.");
    }

    // 7. Report the current state of the workshop
    info!(
        "Tracking {} order(s) and {} worker payment(s).",
        store.orders().len(),
        store.worker_payments().len()
    );

    for (status, orders) in group_by_status(store.orders()) {
        info!("{status}: {} order(s)", orders.len());
        for order in orders {
            info!(
                "  {} ({}) - due {}, balance ${:.2}",
                order.client_name,
                order.phone_number,
                order.due_date,
                order.balance_due()
            );
        }
    }

    let schedule = day_schedule(store.orders(), today, &config.workshop);
    if schedule.is_off {
        info!("Today ({today}) the workshop is closed.");
    } else {
        info!(
            "Today ({today}): {}/{} work slot(s) used, {} order(s) due.",
            schedule.work_orders.len(),
            config.workshop.daily_capacity,
            schedule.due_orders.len()
        );
    }

    Ok(())
}
