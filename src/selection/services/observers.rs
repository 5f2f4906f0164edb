//! Change notifications for planner observers.

use std::fmt;

/// Kind of state change announced to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlannerEvent {
    /// The backlog changed.
    TasksChanged,
    /// Today's selection changed or was cleared.
    TodaySelectionChanged,
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(PlannerEvent) + Send + Sync>;

/// Registry of observer callbacks.
///
/// Callbacks run synchronously on the mutating call, after the in-memory
/// state has changed and its write has been issued. No delivery order across
/// observers is promised.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl ChangeNotifier {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` and returns a handle for unsubscribing.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(PlannerEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a registered observer.
    ///
    /// Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(candidate, _)| *candidate != id);
        self.observers.len() != before
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns whether no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Invokes every observer with `event`.
    pub fn emit(&self, event: PlannerEvent) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
