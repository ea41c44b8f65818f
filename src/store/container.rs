//! The state container: current state plus a listener registry.

use crate::store::reducer::Reducer;

/// Handle returned by [`Store::subscribe`]. Pass it back to
/// [`Store::unsubscribe`] to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Owns the state for one reducer and notifies listeners on change.
///
/// All mutation goes through [`Store::dispatch`]; the state is never
/// written directly. Dispatch is synchronous and single-threaded: the
/// reducer runs, the state is replaced, and listeners fire before
/// `dispatch` returns, in registration order.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_id: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer and replace the state.
    ///
    /// Listeners are notified only when the new state differs from the
    /// old one, so transitions that change nothing do not trigger
    /// re-renders.
    pub fn dispatch(&mut self, intent: R::Intent) {
        let next = R::reduce(self.state.clone(), intent);
        if next == self.state {
            return;
        }
        self.state = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Register a listener. Listeners fire in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&R::State) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was already removed.
    ///
    /// The remaining listeners keep their relative order.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
