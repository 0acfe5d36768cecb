//! Per-scene lifecycle event bus
//!
//! Listeners are registered once and hold a `SubscriptionId`; `emit` reports
//! which subscriptions heard the event so the owner can react. Removing a
//! subscription is explicit.

/// Lifecycle events a scene emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneEvent {
    /// The pause overlay handed control back
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

#[derive(Debug, Default)]
pub struct SceneEvents {
    listeners: Vec<(SubscriptionId, SceneEvent)>,
    next_id: u32,
}

impl SceneEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, event: SceneEvent) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, event));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    /// Subscriptions listening for `event`, in subscription order
    pub fn emit(&self, event: SceneEvent) -> Vec<SubscriptionId> {
        self.listeners
            .iter()
            .filter(|(_, kind)| *kind == event)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn listener_count(&self, event: SceneEvent) -> usize {
        self.listeners.iter().filter(|(_, kind)| *kind == event).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_listeners_in_order() {
        let mut events = SceneEvents::new();
        let first = events.subscribe(SceneEvent::Resume);
        let second = events.subscribe(SceneEvent::Resume);
        assert_eq!(events.emit(SceneEvent::Resume), vec![first, second]);

        events.unsubscribe(first);
        assert_eq!(events.emit(SceneEvent::Resume), vec![second]);
    }

    #[test]
    fn test_unsubscribe_silences_listener() {
        let mut events = SceneEvents::new();
        let id = events.subscribe(SceneEvent::Resume);
        assert!(events.unsubscribe(id));
        assert!(!events.unsubscribe(id));
        assert_eq!(events.listener_count(SceneEvent::Resume), 0);
    }
}
