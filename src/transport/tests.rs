use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::broker::Broker;
use crate::transport::message::{ClientMessage, ServerMessage};
use crate::transport::websocket::handle_frame;

fn provisioned_broker() -> Arc<Mutex<Broker>> {
    let mut broker = Broker::new();
    broker.create_topic("app-logs");
    broker
        .create_subscription("log-validator", "app-logs")
        .unwrap();
    Arc::new(Mutex::new(broker))
}

async fn next_reply(rx: &mut UnboundedReceiver<ServerMessage>) -> ServerMessage {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for reply")
        .expect("reply channel closed")
}

#[test]
fn test_client_message_wire_shape() {
    let frame = serde_json::to_value(ClientMessage::Publish {
        topic: "app-logs".to_string(),
        data: "{}".to_string(),
    })
    .unwrap();
    assert_eq!(frame["type"], "publish");
    assert_eq!(frame["topic"], "app-logs");
}

#[tokio::test]
async fn test_subscribe_is_acknowledged() {
    let broker = provisioned_broker();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();
    let mut attached = Vec::new();

    let frame = json!({"type": "subscribe", "subscription": "log-validator"}).to_string();
    handle_frame(&broker, "conn-test", &frame, &out_tx, &mut attached);

    assert!(matches!(
        next_reply(&mut out_rx).await,
        ServerMessage::SubscribeAck { subscription } if subscription == "log-validator"
    ));
    assert_eq!(attached, vec!["log-validator".to_string()]);
}

#[tokio::test]
async fn test_subscribe_to_unknown_subscription_is_rejected() {
    let broker = provisioned_broker();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();
    let mut attached = Vec::new();

    let frame = json!({"type": "subscribe", "subscription": "missing"}).to_string();
    handle_frame(&broker, "conn-test", &frame, &out_tx, &mut attached);

    assert!(matches!(
        next_reply(&mut out_rx).await,
        ServerMessage::SubscribeError { .. }
    ));
    assert!(attached.is_empty());
}

#[tokio::test]
async fn test_publish_is_acknowledged_and_delivered() {
    let broker = provisioned_broker();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();
    let mut attached = Vec::new();

    let subscribe = json!({"type": "subscribe", "subscription": "log-validator"}).to_string();
    handle_frame(&broker, "conn-test", &subscribe, &out_tx, &mut attached);
    assert!(matches!(
        next_reply(&mut out_rx).await,
        ServerMessage::SubscribeAck { .. }
    ));

    let publish =
        json!({"type": "publish", "topic": "app-logs", "data": "{\"seq\": 0}"}).to_string();
    handle_frame(&broker, "conn-test", &publish, &out_tx, &mut attached);
    let ServerMessage::PublishAck { message_id } = next_reply(&mut out_rx).await else {
        panic!("Expected a publish ack");
    };

    let ServerMessage::Delivery {
        subscription,
        message_id: delivered_id,
        data,
        ..
    } = next_reply(&mut out_rx).await
    else {
        panic!("Expected a delivery");
    };
    assert_eq!(subscription, "log-validator");
    assert_eq!(delivered_id, message_id);
    assert_eq!(data, "{\"seq\": 0}");

    // Acking the delivery clears it from the subscription.
    let ack = json!({
        "type": "ack",
        "subscription": "log-validator",
        "message_id": delivered_id,
    })
    .to_string();
    handle_frame(&broker, "conn-test", &ack, &out_tx, &mut attached);
    let broker = broker.lock().unwrap();
    assert_eq!(
        broker.subscription("log-validator").unwrap().outstanding_len(),
        0
    );
}

#[tokio::test]
async fn test_publish_to_unknown_topic_is_rejected() {
    let broker = provisioned_broker();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();
    let mut attached = Vec::new();

    let publish = json!({"type": "publish", "topic": "missing", "data": "{}"}).to_string();
    handle_frame(&broker, "conn-test", &publish, &out_tx, &mut attached);

    assert!(matches!(
        next_reply(&mut out_rx).await,
        ServerMessage::PublishError { .. }
    ));
}

#[tokio::test]
async fn test_garbage_frame_is_ignored() {
    let broker = provisioned_broker();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();
    let mut attached = Vec::new();

    handle_frame(&broker, "conn-test", "not a frame", &out_tx, &mut attached);

    assert!(out_rx.try_recv().is_err());
    assert!(attached.is_empty());
}
