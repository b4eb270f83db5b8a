use serde::{Deserialize, Serialize};

/// Frames sent by a client to the broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Attach to a named subscription and start receiving deliveries.
    Subscribe { subscription: String },

    /// Publish a payload to a topic. The broker replies with
    /// `publish_ack` or `publish_error`.
    Publish { topic: String, data: String },

    /// Acknowledge a delivered message so it is not redelivered.
    Ack {
        subscription: String,
        message_id: String,
    },
}

/// Frames sent by the broker to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    SubscribeAck {
        subscription: String,
    },

    SubscribeError {
        reason: String,
    },

    PublishAck {
        message_id: String,
    },

    PublishError {
        reason: String,
    },

    /// One message delivered on a subscription.
    Delivery {
        subscription: String,
        message_id: String,
        data: String,
        publish_time: i64,
    },
}
