//! Scoped access to the global keyboard stream
//!
//! The lightbox only listens to the keyboard while it is open. Holding a
//! [`KeySubscription`] is that claim: it is acquired from a
//! [`KeyEventSource`] and released when dropped, so every exit path
//! (close, re-bind, teardown) gives the listener back.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

/// Identifier handed out for each attached listener
pub type ListenerId = u64;

/// Something that owns the process-wide key event stream
pub trait KeyEventSource {
    /// Attach a listener and return its id
    fn attach(&self) -> ListenerId;

    /// Detach a previously attached listener
    fn detach(&self, id: ListenerId);
}

/// RAII claim on a key listener
pub struct KeySubscription {
    source: Rc<dyn KeyEventSource>,
    id: ListenerId,
}

impl KeySubscription {
    /// Attach a listener on `source`
    pub fn acquire(source: &Rc<dyn KeyEventSource>) -> Self {
        let id = source.attach();
        debug!(listener = id, "key listener attached");
        Self {
            source: Rc::clone(source),
            id,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.source.detach(self.id);
        debug!(listener = self.id, "key listener detached");
    }
}

impl std::fmt::Debug for KeySubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySubscription")
            .field("id", &self.id)
            .finish()
    }
}

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowRight,
    ArrowLeft,
}

/// Key source backing the iced keyboard subscription
///
/// The application asks [`WindowKeys::is_listening`] when building its
/// subscriptions; iced starts and stops the native listener to match.
#[derive(Debug, Default)]
pub struct WindowKeys {
    next_id: Cell<ListenerId>,
    attached: Cell<usize>,
}

impl WindowKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any listener is currently attached
    pub fn is_listening(&self) -> bool {
        self.attached.get() > 0
    }
}

impl KeyEventSource for WindowKeys {
    fn attach(&self) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.attached.set(self.attached.get() + 1);
        id
    }

    fn detach(&self, _id: ListenerId) {
        self.attached.set(self.attached.get().saturating_sub(1));
    }
}

/// Instrumented key source for tests: counts every attach and detach
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CountingKeys {
    pub added: Cell<usize>,
    pub removed: Cell<usize>,
    pub peak: Cell<usize>,
}

#[cfg(test)]
impl CountingKeys {
    pub fn active(&self) -> usize {
        self.added.get() - self.removed.get()
    }
}

#[cfg(test)]
impl KeyEventSource for CountingKeys {
    fn attach(&self) -> ListenerId {
        self.added.set(self.added.get() + 1);
        self.peak.set(self.peak.get().max(self.active()));
        self.added.get() as ListenerId
    }

    fn detach(&self, _id: ListenerId) {
        self.removed.set(self.removed.get() + 1);
    }
}
