//! The `config` module loads and resolves process configuration.
//!
//! Settings come from an optional `config/default` file overridden by
//! `PUBSUB_`-prefixed environment variables. Tunables fall back to
//! defaults, but the transport identities (`PUBSUB_PROJECT`,
//! `PUBSUB_TOPIC`, `PUBSUB_SUBSCRIPTION`) are required by the processes
//! that use them: a missing identity is a configuration error surfaced at
//! startup, never silently defaulted.

mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::{PartialPublishSettings, PartialServerSettings, PartialSettings};

pub use settings::{
    BrokerSettings, ConsumerSettings, ProducerSettings, PublishSettings, ServerSettings,
};

fn load_partial() -> Result<PartialSettings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("PUBSUB")
                .separator("_")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

fn required(value: Option<String>, key: &str) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::NotFound(format!("PUBSUB_{}", key.to_uppercase())))
}

fn resolve_server(partial: Option<PartialServerSettings>) -> ServerSettings {
    let default = ServerSettings::default();
    match partial {
        Some(s) => ServerSettings {
            host: s.host.unwrap_or(default.host),
            port: s.port.unwrap_or(default.port),
        },
        None => default,
    }
}

fn resolve_publish(partial: Option<PartialPublishSettings>) -> PublishSettings {
    let default = PublishSettings::default();
    match partial {
        Some(p) => PublishSettings {
            deadline: p.deadline.unwrap_or(default.deadline),
            pace: p.pace.unwrap_or(default.pace),
        },
        None => default,
    }
}

/// Loads the broker's configuration; project, topic and subscription are
/// all required.
pub fn load_broker() -> Result<BrokerSettings, ConfigError> {
    let partial = load_partial()?;
    Ok(BrokerSettings {
        project: required(partial.project, "project")?,
        topic: required(partial.topic, "topic")?,
        subscription: required(partial.subscription, "subscription")?,
        server: resolve_server(partial.server),
    })
}

/// Loads the producer's configuration; project and topic are required.
pub fn load_producer() -> Result<ProducerSettings, ConfigError> {
    let partial = load_partial()?;
    Ok(ProducerSettings {
        project: required(partial.project, "project")?,
        topic: required(partial.topic, "topic")?,
        server: resolve_server(partial.server),
        publish: resolve_publish(partial.publish),
    })
}

/// Loads the consumer's configuration; project and subscription are
/// required.
pub fn load_consumer() -> Result<ConsumerSettings, ConfigError> {
    let partial = load_partial()?;
    Ok(ConsumerSettings {
        project: required(partial.project, "project")?,
        subscription: required(partial.subscription, "subscription")?,
        server: resolve_server(partial.server),
    })
}

#[cfg(test)]
mod tests;
