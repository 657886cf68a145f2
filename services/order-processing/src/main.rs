use orders_bootstrap::{Infrastructure, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_server("config", |infra: Infrastructure| async move {
        info!("Initializing order-processing service...");
        order_processing::build_app(infra).await
    })
    .await
}
