use std::future::Future;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tungstenite::protocol::Message as WsMessage;

use crate::client::handler::MessageHandler;
use crate::transport::message::{ClientMessage, ServerMessage};
use crate::utils::error::TransportError;

/// Process-scoped receiving handle for one subscription.
///
/// Connecting performs the subscribe handshake eagerly, so a missing
/// subscription fails at startup rather than inside the listen loop.
#[derive(Debug)]
pub struct Subscriber {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Subscriber {
    /// Connects to the broker and attaches to `subscription`, waiting for
    /// the broker to confirm the attachment.
    pub async fn connect(addr: &str, subscription: &str) -> Result<Self, TransportError> {
        let (mut stream, _) = connect_async(format!("ws://{addr}")).await?;

        let frame = serde_json::to_string(&ClientMessage::Subscribe {
            subscription: subscription.to_string(),
        })?;
        stream.send(WsMessage::text(frame)).await?;

        while let Some(msg) = stream.next().await {
            let msg = msg?;
            if !msg.is_text() {
                continue;
            }
            match serde_json::from_str::<ServerMessage>(msg.to_text()?)? {
                ServerMessage::SubscribeAck { .. } => return Ok(Self { stream }),
                ServerMessage::SubscribeError { reason } => {
                    return Err(TransportError::SubscribeRejected(reason));
                }
                _ => continue,
            }
        }
        Err(TransportError::ConnectionClosed)
    }

    /// Runs the receive loop until `shutdown` resolves or the connection
    /// closes.
    ///
    /// Each delivery is dispatched to `handler` on its own task; once the
    /// handler returns, the message is acknowledged regardless of what the
    /// handler concluded about the payload. On shutdown the loop stops
    /// taking deliveries, lets in-flight handler tasks finish, and flushes
    /// their acks before returning.
    pub async fn listen<S>(
        self,
        handler: Arc<dyn MessageHandler>,
        shutdown: S,
    ) -> Result<(), TransportError>
    where
        S: Future<Output = ()>,
    {
        let (mut sink, mut source) = self.stream.split();

        // Acks funnel through a writer task so delivery tasks never touch
        // the socket directly.
        let (ack_tx, mut ack_rx) = mpsc::unbounded_channel::<ClientMessage>();
        let writer = tokio::spawn(async move {
            while let Some(frame) = ack_rx.recv().await {
                let text = match serde_json::to_string(&frame) {
                    Ok(text) => text,
                    Err(e) => {
                        eprintln!("Failed to serialize ack: {e}");
                        continue;
                    }
                };
                if sink.send(WsMessage::text(text)).await.is_err() {
                    break;
                }
            }
        });

        let mut in_flight = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                next = source.next() => {
                    let Some(Ok(msg)) = next else { break };
                    if !msg.is_text() {
                        continue;
                    }
                    let Ok(text) = msg.to_text() else { continue };
                    match serde_json::from_str::<ServerMessage>(text) {
                        Ok(ServerMessage::Delivery { subscription, message_id, data, .. }) => {
                            let handler = handler.clone();
                            let acks = ack_tx.clone();
                            in_flight.spawn(async move {
                                handler.handle(data.as_bytes());
                                let _ = acks.send(ClientMessage::Ack {
                                    subscription,
                                    message_id,
                                });
                            });
                        }
                        Ok(_) => {}
                        Err(e) => eprintln!("Unrecognized broker message: {e} | {text}"),
                    }
                }
            }
        }

        // Let dispatched handlers finish, then let the writer flush their
        // acks before tearing the connection down.
        while in_flight.join_next().await.is_some() {}
        drop(ack_tx);
        let _ = writer.await;

        Ok(())
    }
}
