use std::collections::HashMap;

use tokio::sync::mpsc::UnboundedSender;

use crate::broker::message::Envelope;
use crate::broker::subscription::Subscription;
use crate::broker::topic::Topic;
use crate::utils::error::BrokerError;

/// The in-memory broker engine.
///
/// Tracks topics and the subscriptions bound to them, fans published
/// messages out to every subscription of a topic, and manages per-message
/// acknowledgment. The engine itself is synchronous; the server wraps it in
/// an `Arc<Mutex<_>>` and drives it from connection tasks. It holds no
/// state beyond its in-memory queues: ordering, dead-lettering and
/// persistence are deliberately out of scope.
#[derive(Debug, Default)]
pub struct Broker {
    topics: HashMap<String, Topic>,
    subscriptions: HashMap<String, Subscription>,
}

impl Broker {
    pub fn new() -> Self {
        Self {
            topics: HashMap::new(),
            subscriptions: HashMap::new(),
        }
    }

    /// Creates a topic. Creating an existing topic has no effect.
    pub fn create_topic(&mut self, name: &str) {
        self.topics
            .entry(name.to_string())
            .or_insert_with(|| Topic::new(name));
    }

    /// Binds a new subscription to an existing topic.
    ///
    /// Re-creating a subscription with its current binding is a no-op;
    /// rebinding it to a different topic is an error, as is binding to a
    /// topic that does not exist.
    pub fn create_subscription(&mut self, name: &str, topic: &str) -> Result<(), BrokerError> {
        if let Some(existing) = self.subscriptions.get(name) {
            if existing.topic == topic {
                return Ok(());
            }
            return Err(BrokerError::SubscriptionExists(name.to_string()));
        }
        let Some(t) = self.topics.get_mut(topic) else {
            return Err(BrokerError::TopicNotFound(topic.to_string()));
        };
        t.attach(name.to_string());
        self.subscriptions
            .insert(name.to_string(), Subscription::new(name, topic));
        Ok(())
    }

    /// Accepts a payload for a topic and fans it out to every attached
    /// subscription. Returns the broker-assigned message id, which the
    /// server echoes back to the publisher as the acknowledgment.
    pub fn publish(&mut self, topic: &str, data: &str) -> Result<String, BrokerError> {
        let Some(topic) = self.topics.get(topic) else {
            return Err(BrokerError::TopicNotFound(topic.to_string()));
        };
        let envelope = Envelope::new(data);
        let message_id = envelope.message_id.clone();
        for name in topic.subscriptions() {
            if let Some(subscription) = self.subscriptions.get_mut(name) {
                subscription.offer(envelope.clone());
            }
        }
        Ok(message_id)
    }

    /// Connects a consumer channel to a subscription, draining any backlog
    /// into it.
    pub fn attach(
        &mut self,
        subscription: &str,
        sender: UnboundedSender<Envelope>,
    ) -> Result<(), BrokerError> {
        let Some(sub) = self.subscriptions.get_mut(subscription) else {
            return Err(BrokerError::SubscriptionNotFound(subscription.to_string()));
        };
        sub.attach(sender);
        Ok(())
    }

    /// Disconnects a subscription's consumer; unacked deliveries are
    /// requeued for redelivery. Unknown subscriptions are ignored.
    pub fn detach(&mut self, subscription: &str) {
        if let Some(sub) = self.subscriptions.get_mut(subscription) {
            sub.detach();
        }
    }

    /// Acknowledges a delivered message so it is never redelivered.
    /// Duplicate acks are ignored.
    pub fn ack(&mut self, subscription: &str, message_id: &str) -> Result<(), BrokerError> {
        let Some(sub) = self.subscriptions.get_mut(subscription) else {
            return Err(BrokerError::SubscriptionNotFound(subscription.to_string()));
        };
        sub.ack(message_id);
        Ok(())
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.get(name)
    }

    pub fn subscription(&self, name: &str) -> Option<&Subscription> {
        self.subscriptions.get(name)
    }
}
