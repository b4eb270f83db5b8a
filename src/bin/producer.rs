use std::time::Duration;

use logsub::client::Publisher;
use logsub::config;
use logsub::producer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let settings = match config::load_producer() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let deadline = Duration::from_secs(settings.publish.deadline);
    let mut publisher = match Publisher::connect(&settings.server.addr(), deadline).await {
        Ok(publisher) => publisher,
        Err(e) => {
            eprintln!("Failed to connect to broker: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Publishing demo sequence to '{}' in project '{}'",
        settings.topic, settings.project
    );
    producer::run(&mut publisher, &settings).await;
}
