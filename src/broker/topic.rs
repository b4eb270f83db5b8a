use std::collections::HashSet;

/// A named channel messages are published to.
///
/// A topic only records which subscriptions are attached to it; the
/// per-subscription delivery state (backlog, outstanding deliveries) lives
/// in [`super::subscription::Subscription`]. Publishing to a topic fans the
/// message out to every attached subscription.
#[derive(Debug, Default)]
pub struct Topic {
    pub name: String,
    subscriptions: HashSet<String>,
}

impl Topic {
    /// Creates a new topic with the given name and no subscriptions.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subscriptions: HashSet::new(),
        }
    }

    /// Attaches a subscription to this topic. Attaching the same
    /// subscription twice has no effect.
    pub fn attach(&mut self, subscription: String) {
        self.subscriptions.insert(subscription);
    }

    /// Detaches a subscription from this topic. Unknown subscriptions are
    /// ignored.
    pub fn detach(&mut self, subscription: &str) {
        self.subscriptions.remove(subscription);
    }

    /// The names of all subscriptions attached to this topic.
    pub fn subscriptions(&self) -> impl Iterator<Item = &String> {
        self.subscriptions.iter()
    }
}
