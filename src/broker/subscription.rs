use std::collections::{HashMap, VecDeque};

use tokio::sync::mpsc::UnboundedSender;

use crate::broker::message::Envelope;

/// Per-subscription delivery state.
///
/// A subscription is bound to exactly one topic. Messages published to that
/// topic either go straight to the attached consumer or wait in the backlog
/// until one attaches. Delivered messages stay in `outstanding` until they
/// are acked; if the consumer goes away first, they move back to the
/// backlog and are redelivered to the next consumer. That requeue path is
/// what makes delivery at-least-once rather than at-most-once.
#[derive(Debug, Default)]
pub struct Subscription {
    pub name: String,
    pub topic: String,
    backlog: VecDeque<Envelope>,
    outstanding: HashMap<String, Envelope>,
    consumer: Option<UnboundedSender<Envelope>>,
}

impl Subscription {
    /// Creates a subscription bound to the given topic, with no consumer
    /// and an empty backlog.
    pub fn new(name: &str, topic: &str) -> Self {
        Self {
            name: name.to_string(),
            topic: topic.to_string(),
            backlog: VecDeque::new(),
            outstanding: HashMap::new(),
            consumer: None,
        }
    }

    /// Routes a freshly published envelope: deliver it if a consumer is
    /// attached, otherwise queue it. A consumer whose channel has closed is
    /// dropped and the envelope falls back to the backlog.
    pub fn offer(&mut self, envelope: Envelope) {
        match &self.consumer {
            Some(sender) => {
                if sender.send(envelope.clone()).is_ok() {
                    self.outstanding
                        .insert(envelope.message_id.clone(), envelope);
                } else {
                    self.consumer = None;
                    self.backlog.push_back(envelope);
                }
            }
            None => self.backlog.push_back(envelope),
        }
    }

    /// Connects a consumer and drains the backlog into it. Every envelope
    /// handed over counts as outstanding until it is acked.
    pub fn attach(&mut self, sender: UnboundedSender<Envelope>) {
        while let Some(envelope) = self.backlog.pop_front() {
            if sender.send(envelope.clone()).is_err() {
                self.backlog.push_front(envelope);
                return;
            }
            self.outstanding
                .insert(envelope.message_id.clone(), envelope);
        }
        self.consumer = Some(sender);
    }

    /// Disconnects the consumer. Unacked deliveries return to the backlog,
    /// ordered by publish time, so the next consumer sees them again.
    pub fn detach(&mut self) {
        self.consumer = None;
        let mut requeued: Vec<Envelope> = self.outstanding.drain().map(|(_, e)| e).collect();
        requeued.sort_by_key(|e| e.publish_time);
        self.backlog.extend(requeued);
    }

    /// Marks a delivered message as processed. Returns `false` for ids that
    /// are not outstanding (already acked, or never delivered here).
    pub fn ack(&mut self, message_id: &str) -> bool {
        self.outstanding.remove(message_id).is_some()
    }

    pub fn has_consumer(&self) -> bool {
        self.consumer.is_some()
    }

    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    pub fn outstanding_len(&self) -> usize {
        self.outstanding.len()
    }
}
