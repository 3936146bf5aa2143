//! Event plumbing: emitters, disposable subscriptions, activation sources.
//!
//! Everything here is single-threaded by design. Mutations happen on
//! activation notifications delivered one at a time, processed to
//! completion before the next is handled, so emitters use `Rc`/`RefCell`
//! sharing rather than locks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use url::Url;

type Listener<T> = Box<dyn FnMut(&T)>;

struct Registration<T> {
    active: Rc<Cell<bool>>,
    listener: Listener<T>,
}

struct EmitterInner<T> {
    registrations: Vec<Registration<T>>,
}

/// Single-threaded multi-listener event emitter.
///
/// Cloning an emitter yields another handle to the same listener set, so
/// a component can hand out a clone for firing while keeping one for
/// subscription management.
pub struct EventEmitter<T> {
    inner: Rc<RefCell<EmitterInner<T>>>,
}

impl<T> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(EmitterInner {
                registrations: Vec::new(),
            })),
        }
    }

    /// Registers a listener. The returned subscription stops delivery when
    /// disposed (or dropped).
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        self.inner.borrow_mut().registrations.push(Registration {
            active: Rc::clone(&active),
            listener: Box::new(listener),
        });
        Subscription { active }
    }

    /// Delivers `value` to every live listener, in subscription order.
    ///
    /// Listeners registered during dispatch are not invoked until the next
    /// emit; listeners disposed during dispatch are skipped.
    pub fn emit(&self, value: &T) {
        let mut current = std::mem::take(&mut self.inner.borrow_mut().registrations);
        for registration in &mut current {
            if registration.active.get() {
                (registration.listener)(value);
            }
        }

        // Fold in listeners added during dispatch and drop disposed ones.
        let mut inner = self.inner.borrow_mut();
        current.extend(inner.registrations.drain(..));
        current.retain(|registration| registration.active.get());
        inner.registrations = current;
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.active.get())
            .count()
    }
}

/// Handle to a registered listener.
///
/// Disposal is idempotent; dropping an undisposed subscription disposes
/// it. After disposal no further events reach the listener.
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn dispose(&mut self) {
        self.active.set(false);
    }

    pub fn is_disposed(&self) -> bool {
        !self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

/// A stream of "document became active" events.
///
/// Each event carries the URI of the document that just became active.
/// Subscribing returns a disposable handle; after the handle is disposed
/// the listener is never invoked again.
pub trait ActivationSource {
    fn on_did_activate(&self, listener: Box<dyn FnMut(&Url)>) -> Subscription;
}

/// Activation source driven by explicit calls.
///
/// For embedding hosts without a native editor event stream, and for
/// tests: call [`ManualActivationSource::activate`] whenever a document
/// becomes active.
#[derive(Default)]
pub struct ManualActivationSource {
    emitter: EventEmitter<Url>,
}

impl ManualActivationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports that `uri` just became active.
    pub fn activate(&self, uri: &Url) {
        self.emitter.emit(uri);
    }
}

impl ActivationSource for ManualActivationSource {
    fn on_did_activate(&self, listener: Box<dyn FnMut(&Url)>) -> Subscription {
        self.emitter.subscribe(listener)
    }
}
