use serde::Deserialize;

/// Resolved configuration for the broker process.
///
/// The broker provisions the demo topic/subscription binding at startup,
/// so it needs every identity the two other processes need.
#[derive(Debug, Clone)]
pub struct BrokerSettings {
    pub project: String,
    pub topic: String,
    pub subscription: String,
    pub server: ServerSettings,
}

/// Resolved configuration for the producer process.
#[derive(Debug, Clone)]
pub struct ProducerSettings {
    pub project: String,
    pub topic: String,
    pub server: ServerSettings,
    pub publish: PublishSettings,
}

/// Resolved configuration for the consumer process.
#[derive(Debug, Clone)]
pub struct ConsumerSettings {
    pub project: String,
    pub subscription: String,
    pub server: ServerSettings,
}

/// Where the broker listens and where the clients connect.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Per-publish behavior of the producer.
///
/// `deadline` is the number of seconds a publish waits for its
/// acknowledgment; `pace` is the delay in milliseconds between publishes.
#[derive(Debug, Deserialize, Clone)]
pub struct PublishSettings {
    pub deadline: u64,
    pub pace: u64,
}

/// Partial settings as loaded from file and environment.
///
/// Identity fields are required by the load functions; everything else can
/// be filled from defaults.
#[derive(Debug, Deserialize, Default)]
pub struct PartialSettings {
    pub project: Option<String>,
    pub topic: Option<String>,
    pub subscription: Option<String>,
    pub server: Option<PartialServerSettings>,
    pub publish: Option<PartialPublishSettings>,
}

/// Partial server settings.
#[derive(Debug, Deserialize, Default)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial publish settings.
#[derive(Debug, Deserialize, Default)]
pub struct PartialPublishSettings {
    pub deadline: Option<u64>,
    pub pace: Option<u64>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            deadline: 60,
            pace: 500,
        }
    }
}
