use std::sync::{Arc, Mutex};

use logsub::broker::Broker;
use logsub::config;
use logsub::transport::websocket::start_broker_server;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let settings = match config::load_broker() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let broker = Arc::new(Mutex::new(Broker::new()));

    // Provision the demo binding up front so publishers and subscribers
    // find their identities already in place, as they would on a managed
    // broker.
    {
        let mut broker = broker.lock().unwrap();
        broker.create_topic(&settings.topic);
        if let Err(e) = broker.create_subscription(&settings.subscription, &settings.topic) {
            eprintln!("Failed to provision subscription: {e}");
            std::process::exit(1);
        }
    }
    println!(
        "Provisioned topic '{}' with subscription '{}' in project '{}'",
        settings.topic, settings.subscription, settings.project
    );

    if let Err(e) = start_broker_server(&settings.server.addr(), broker).await {
        eprintln!("Broker server error: {e}");
        std::process::exit(1);
    }
}
