//! Single-writer state container with slice subscriptions.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::mvi::Reducer;

/// Handle for cancelling a single slice subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receives fresh slice values from a [`StateMachine`].
///
/// Implemented for any `FnMut(&T)` closure, so call sites can pass a
/// closure directly instead of defining a type.
pub trait SliceSubscriber<T>: Send {
    fn render(&mut self, slice: &T);
}

impl<T, F> SliceSubscriber<T> for F
where
    F: FnMut(&T) + Send,
{
    fn render(&mut self, slice: &T) {
        self(slice)
    }
}

/// Object-safe wrapper over a selector + subscriber pair so the machine
/// can hold subscriptions for arbitrary slice types in one list.
trait ErasedSubscription<S>: Send {
    fn publish(&mut self, state: &S);
}

struct SliceBinding<T, F, C> {
    selector: F,
    subscriber: C,
    /// Last value delivered, for duplicate suppression.
    last: Option<T>,
}

impl<S, T, F, C> ErasedSubscription<S> for SliceBinding<T, F, C>
where
    T: Clone + PartialEq + Send,
    F: Fn(&S) -> T + Send,
    C: SliceSubscriber<T>,
{
    fn publish(&mut self, state: &S) {
        let next = (self.selector)(state);
        if self.last.as_ref() == Some(&next) {
            return;
        }
        self.subscriber.render(&next);
        self.last = Some(next);
    }
}

/// Thread-safe state container for one screen.
///
/// All writes go through [`dispatch`](StateMachine::dispatch), which folds
/// the result into the state under a single lock. Because the reducer runs
/// while the lock is held, concurrent dispatchers are serialized and every
/// reduction sees the state produced by the previous one.
///
/// Subscribers observe a selected slice of the state and are only notified
/// when that slice actually changes. New subscribers receive the current
/// slice value immediately.
pub struct StateMachine<R: Reducer> {
    inner: Arc<Mutex<MachineInner<R>>>,
    session_id: Uuid,
}

struct MachineInner<R: Reducer> {
    reducer: R,
    state: R::State,
    subscriptions: Vec<(SubscriptionId, Box<dyn ErasedSubscription<R::State>>)>,
    next_id: u64,
}

impl<R: Reducer> StateMachine<R> {
    /// Create a machine starting from the state's `Default`.
    pub fn new(reducer: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MachineInner {
                reducer,
                state: R::State::default(),
                subscriptions: Vec::new(),
                next_id: 0,
            })),
            session_id: Uuid::new_v4(),
        }
    }

    /// Fold `result` into the current state and notify affected subscribers.
    ///
    /// Subscribers whose slice is unchanged by this transition are not
    /// woken. A reduction that leaves the whole state value-equal is
    /// dropped without notifying anyone.
    pub fn dispatch(&self, result: R::Result) {
        let mut inner = self.inner.lock();
        let next = inner.reducer.reduce(inner.state.clone(), result);
        if next == inner.state {
            tracing::trace!(session = %self.session_id, "State unchanged, skipping publish");
            return;
        }
        inner.state = next;
        tracing::debug!(session = %self.session_id, "State advanced");

        let MachineInner {
            state,
            subscriptions,
            ..
        } = &mut *inner;
        for (_, subscription) in subscriptions.iter_mut() {
            subscription.publish(state);
        }
    }

    /// Subscribe to the slice produced by `selector`.
    ///
    /// The subscriber is called with the current slice value before this
    /// method returns, then again after every dispatch that changes it.
    pub fn subscribe<T, F, C>(&self, selector: F, subscriber: C) -> SubscriptionId
    where
        T: Clone + PartialEq + Send + 'static,
        F: Fn(&R::State) -> T + Send + 'static,
        C: SliceSubscriber<T> + 'static,
    {
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;

        let mut binding = SliceBinding {
            selector,
            subscriber,
            last: None,
        };
        binding.publish(&inner.state);

        inner.subscriptions.push((id, Box::new(binding)));
        tracing::debug!(session = %self.session_id, id = id.0, "Slice subscription added");
        id
    }

    /// Remove one subscription. Returns `false` if the id is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.subscriptions.len();
        inner.subscriptions.retain(|(existing, _)| *existing != id);
        before != inner.subscriptions.len()
    }

    /// Drop every subscription at once. Used when the screen goes away.
    pub fn dispose_all(&self) {
        let mut inner = self.inner.lock();
        let dropped = inner.subscriptions.len();
        inner.subscriptions.clear();
        if dropped > 0 {
            tracing::debug!(session = %self.session_id, dropped, "Subscriptions disposed");
        }
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> R::State {
        self.inner.lock().state.clone()
    }

    /// Identifier for correlating this machine's log lines.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

impl<R: Reducer> Clone for StateMachine<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            session_id: self.session_id,
        }
    }
}
