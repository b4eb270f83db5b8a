use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tungstenite::protocol::Message as WsMessage;

use crate::transport::message::{ClientMessage, ServerMessage};
use crate::utils::error::TransportError;

/// Process-scoped publishing handle.
///
/// Created once at startup and injected into the producer logic. Publishes
/// are strictly sequential: each call sends one frame and blocks until the
/// broker acknowledges it or the deadline elapses. The broker may still be
/// working on a timed-out publish; the handle does not retry, it just
/// reports the failure to the caller.
pub struct Publisher {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    deadline: Duration,
    // Replies the broker still owes us for publishes we gave up on. Each
    // timed-out publish leaves one ack/error frame in flight; those must
    // be discarded so they are never credited to a later publish.
    abandoned_replies: u64,
}

impl Publisher {
    /// Connects to the broker at `addr` (host:port).
    pub async fn connect(addr: &str, deadline: Duration) -> Result<Self, TransportError> {
        let (stream, _) = connect_async(format!("ws://{addr}")).await?;
        Ok(Self {
            stream,
            deadline,
            abandoned_replies: 0,
        })
    }

    /// Publishes one payload and waits for the broker's acknowledgment.
    ///
    /// Returns the broker-assigned message id on success. Rejection by the
    /// broker, a closed connection and an elapsed deadline are all reported
    /// as errors; none of them poison the handle for subsequent publishes
    /// unless the connection itself is gone.
    pub async fn publish(&mut self, topic: &str, data: &str) -> Result<String, TransportError> {
        let frame = serde_json::to_string(&ClientMessage::Publish {
            topic: topic.to_string(),
            data: data.to_string(),
        })?;
        self.stream.send(WsMessage::text(frame)).await?;

        match tokio::time::timeout(self.deadline, self.await_publish_reply()).await {
            Ok(reply) => reply,
            Err(_) => {
                // The broker may still answer this publish; its reply is
                // now stale and must not count for the next one.
                self.abandoned_replies += 1;
                Err(TransportError::DeadlineElapsed)
            }
        }
    }

    async fn await_publish_reply(&mut self) -> Result<String, TransportError> {
        while let Some(msg) = self.stream.next().await {
            let msg = msg?;
            if !msg.is_text() {
                continue;
            }
            match serde_json::from_str::<ServerMessage>(msg.to_text()?)? {
                ServerMessage::PublishAck { message_id } => {
                    if self.abandoned_replies > 0 {
                        self.abandoned_replies -= 1;
                        continue;
                    }
                    return Ok(message_id);
                }
                ServerMessage::PublishError { reason } => {
                    if self.abandoned_replies > 0 {
                        self.abandoned_replies -= 1;
                        continue;
                    }
                    return Err(TransportError::PublishRejected(reason));
                }
                _ => continue,
            }
        }
        Err(TransportError::ConnectionClosed)
    }
}
