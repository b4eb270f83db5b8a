use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedSender;
use tokio_tungstenite::accept_async;
use tungstenite::protocol::Message as WsMessage;

use std::sync::{Arc, Mutex};

use crate::broker::Broker;
use crate::broker::message::Envelope;
use crate::transport::message::{ClientMessage, ServerMessage};

/// Accepts WebSocket connections and serves the broker engine over them.
///
/// One task per connection. Each connection gets an outgoing channel
/// drained by a writer task; deliveries and command replies both go through
/// it, so a connection's frames are written in one place.
pub async fn start_broker_server(addr: &str, broker: Arc<Mutex<Broker>>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;

    println!("Broker listening on ws://{addr}");

    while let Ok((stream, _)) = listener.accept().await {
        let broker = broker.clone();
        let conn_id = format!("conn-{}", uuid::Uuid::new_v4());

        tokio::spawn(async move {
            let ws_stream = match accept_async(stream).await {
                Ok(ws) => ws,
                Err(e) => {
                    eprintln!("WebSocket handshake error: {e}");
                    return;
                }
            };

            let (mut ws_sender, mut ws_receiver) = ws_stream.split();

            // All outgoing frames for this connection funnel through here.
            let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ServerMessage>();

            let writer_conn = conn_id.clone();
            tokio::spawn(async move {
                while let Some(reply) = out_rx.recv().await {
                    let text = match serde_json::to_string(&reply) {
                        Ok(text) => text,
                        Err(e) => {
                            eprintln!("Failed to serialize frame for {writer_conn}: {e}");
                            continue;
                        }
                    };
                    if ws_sender.send(WsMessage::text(text)).await.is_err() {
                        break;
                    }
                }
            });

            // Subscriptions this connection has attached, for detach on close.
            let mut attached: Vec<String> = Vec::new();

            while let Some(Ok(msg)) = ws_receiver.next().await {
                if !msg.is_text() {
                    continue;
                }
                let Ok(text) = msg.to_text() else { continue };
                handle_frame(&broker, &conn_id, text, &out_tx, &mut attached);
            }

            println!("{conn_id} disconnected");

            // Requeue whatever this connection never acked.
            {
                let mut broker = broker.lock().unwrap();
                for subscription in &attached {
                    broker.detach(subscription);
                }
            }
        });
    }
    Ok(())
}

/// Dispatches one client frame against the engine and queues the reply.
///
/// Split out of the connection loop so tests can drive it against a real
/// engine without a socket.
pub(crate) fn handle_frame(
    broker: &Arc<Mutex<Broker>>,
    conn_id: &str,
    text: &str,
    out_tx: &UnboundedSender<ServerMessage>,
    attached: &mut Vec<String>,
) {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(ClientMessage::Subscribe { subscription }) => {
            let (env_tx, mut env_rx) = mpsc::unbounded_channel::<Envelope>();
            let result = {
                let mut broker = broker.lock().unwrap();
                broker.attach(&subscription, env_tx)
            };
            match result {
                Ok(()) => {
                    println!("{conn_id} attached to {subscription}");
                    attached.push(subscription.clone());

                    // Translate engine envelopes into delivery frames.
                    let deliveries = out_tx.clone();
                    let sub_name = subscription.clone();
                    tokio::spawn(async move {
                        while let Some(envelope) = env_rx.recv().await {
                            let frame = ServerMessage::Delivery {
                                subscription: sub_name.clone(),
                                message_id: envelope.message_id,
                                data: envelope.data,
                                publish_time: envelope.publish_time,
                            };
                            if deliveries.send(frame).is_err() {
                                break;
                            }
                        }
                    });

                    let _ = out_tx.send(ServerMessage::SubscribeAck { subscription });
                }
                Err(e) => {
                    let _ = out_tx.send(ServerMessage::SubscribeError {
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(ClientMessage::Publish { topic, data }) => {
            let result = {
                let mut broker = broker.lock().unwrap();
                broker.publish(&topic, &data)
            };
            let reply = match result {
                Ok(message_id) => ServerMessage::PublishAck { message_id },
                Err(e) => ServerMessage::PublishError {
                    reason: e.to_string(),
                },
            };
            let _ = out_tx.send(reply);
        }

        Ok(ClientMessage::Ack {
            subscription,
            message_id,
        }) => {
            let result = {
                let mut broker = broker.lock().unwrap();
                broker.ack(&subscription, &message_id)
            };
            if let Err(e) = result {
                eprintln!("Ack from {conn_id} rejected: {e}");
            }
        }

        Err(e) => {
            eprintln!("Invalid client message from {conn_id}: {e} | {text}");
        }
    }
}
