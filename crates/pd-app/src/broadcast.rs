//! Current-value broadcasting for membership state.
//!
//! A [`StateSubject`] holds the latest published value plus a list of
//! observer callbacks. New observers receive the current value once at
//! registration, then every later publication, so a view attaching
//! mid-session renders the present state without waiting for the next
//! mutation.

use std::sync::Arc;

use parking_lot::Mutex;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Observer<T> {
    id: u64,
    callback: Callback<T>,
}

struct SubjectState<T> {
    current: T,
    observers: Vec<Observer<T>>,
    next_id: u64,
}

/// A current-value cell with synchronously invoked observer callbacks.
///
/// Callbacks run on the publishing thread, outside the internal lock, in
/// registration order. Ordering across publications is whatever order the
/// callers publish in; a caller needing strict mutation order serializes its
/// publishes (the membership registry does so under one write lock).
pub struct StateSubject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> StateSubject<T> {
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                current: initial,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Clone of the latest published value.
    pub fn get(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Store `value` and invoke every registered observer with it.
    ///
    /// Observers run after the internal lock is released; a callback may
    /// call [`get`](Self::get) or register further observers without
    /// deadlocking.
    pub fn publish(&self, value: T) {
        let callbacks: Vec<Callback<T>> = {
            let mut state = self.state.lock();
            state.current = value.clone();
            state.observers.iter().map(|o| o.callback.clone()).collect()
        };
        for callback in &callbacks {
            callback(&value);
        }
    }

    /// Register an observer and replay the current value to it once,
    /// synchronously, before returning.
    ///
    /// The returned guard detaches the observer when dropped; detached
    /// observers are never invoked again.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let callback: Callback<T> = Arc::new(callback);
        let (id, replay) = {
            let mut state = self.state.lock();
            let id = state.next_id;
            state.next_id += 1;
            state.observers.push(Observer {
                id,
                callback: callback.clone(),
            });
            (id, state.current.clone())
        };
        callback(&replay);

        let state = Arc::downgrade(&self.state);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(state) = state.upgrade() {
                    state.lock().observers.retain(|o| o.id != id);
                }
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.state.lock().observers.len()
    }
}

/// Detaches its observer when dropped, bounding each registration to the
/// lifetime of the handle the subscriber holds.
///
/// Holds only a weak reference to the subject, so the guard may safely
/// outlive it.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Detach immediately instead of waiting for drop.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
