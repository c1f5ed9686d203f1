use restaurant_desk::config::{AppConfig, CONFIG_FILE};
use restaurant_desk::lifecycle::{setup_tracing, RestaurantSystem};
use restaurant_desk::ui::{App, TerminalFrontend};
use std::path::Path;
use tokio::io::BufReader;
use tracing::info;

fn main() -> Result<(), String> {
    setup_tracing();

    // One thread drives the whole form.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;
    let result = runtime.block_on(run());

    // A pending stdin read would otherwise hold the runtime open after `quit`.
    runtime.shutdown_background();
    result
}

async fn run() -> Result<(), String> {
    let config = AppConfig::load(Path::new(CONFIG_FILE)).map_err(|e| e.to_string())?;
    info!(log = %config.invoice_log.display(), "Starting ordering desk");

    let system = RestaurantSystem::new(&config).map_err(|e| e.to_string())?;

    let mut app = App::new(system.client.clone(), TerminalFrontend::stdout(), &config);
    let result = app.run(BufReader::new(tokio::io::stdin())).await;
    drop(app);

    system.shutdown().await.map_err(|e| e.to_string())?;
    result.map_err(|e| e.to_string())?;

    info!("Goodbye");
    Ok(())
}
