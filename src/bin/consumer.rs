use std::sync::Arc;

use logsub::client::Subscriber;
use logsub::config;
use logsub::consumer::LogHandler;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let settings = match config::load_consumer() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let subscriber = match Subscriber::connect(&settings.server.addr(), &settings.subscription).await
    {
        Ok(subscriber) => subscriber,
        Err(e) => {
            eprintln!("Failed to subscribe: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Listening for messages on '{}' in project '{}'...",
        settings.subscription, settings.project
    );

    let handler = Arc::new(LogHandler::new());
    let result = subscriber
        .listen(handler.clone(), async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;

    let (valid, invalid) = handler.tally();
    println!("Shutting down: {valid} valid, {invalid} invalid");

    if let Err(e) = result {
        eprintln!("Receive loop error: {e}");
        std::process::exit(1);
    }
}
