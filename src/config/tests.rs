use serial_test::serial;

use super::{load_broker, load_consumer, load_producer};

const IDENTITY_VARS: [&str; 3] = ["PUBSUB_PROJECT", "PUBSUB_TOPIC", "PUBSUB_SUBSCRIPTION"];

fn with_identity<F: FnOnce()>(f: F) {
    temp_env::with_vars(
        [
            ("PUBSUB_PROJECT", Some("demo-project")),
            ("PUBSUB_TOPIC", Some("app-logs")),
            ("PUBSUB_SUBSCRIPTION", Some("log-validator")),
        ],
        f,
    );
}

#[test]
#[serial]
fn test_identities_load_from_environment() {
    with_identity(|| {
        let settings = load_broker().unwrap();
        assert_eq!(settings.project, "demo-project");
        assert_eq!(settings.topic, "app-logs");
        assert_eq!(settings.subscription, "log-validator");
    });
}

#[test]
#[serial]
fn test_defaults_apply_when_unset() {
    with_identity(|| {
        let settings = load_producer().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.addr(), "127.0.0.1:8080");
        assert_eq!(settings.publish.deadline, 60);
        assert_eq!(settings.publish.pace, 500);
    });
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    temp_env::with_vars(
        [
            ("PUBSUB_PROJECT", Some("demo-project")),
            ("PUBSUB_TOPIC", Some("app-logs")),
            ("PUBSUB_SERVER_PORT", Some("9090")),
            ("PUBSUB_PUBLISH_DEADLINE", Some("5")),
        ],
        || {
            let settings = load_producer().unwrap();
            assert_eq!(settings.server.port, 9090);
            assert_eq!(settings.publish.deadline, 5);
            assert_eq!(settings.publish.pace, 500);
        },
    );
}

#[test]
#[serial]
fn test_missing_identities_are_fatal() {
    temp_env::with_vars(
        IDENTITY_VARS.map(|key| (key, None::<&str>)),
        || {
            assert!(load_broker().is_err());
            assert!(load_producer().is_err());
            assert!(load_consumer().is_err());
        },
    );
}

#[test]
#[serial]
fn test_producer_needs_topic_but_not_subscription() {
    temp_env::with_vars(
        [
            ("PUBSUB_PROJECT", Some("demo-project")),
            ("PUBSUB_TOPIC", None),
            ("PUBSUB_SUBSCRIPTION", Some("log-validator")),
        ],
        || {
            assert!(load_producer().is_err());
            assert!(load_consumer().is_ok());
        },
    );
}
