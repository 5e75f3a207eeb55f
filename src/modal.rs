//! Modal lifecycle: open/closed state with Escape-to-close.
//!
//! An open [`Modal`] holds a [`KeyboardSubscription`] on the shared
//! [`KeyboardHub`]. The subscription deregisters itself on drop, so a modal
//! is subscribed exactly while it is open, and dropping the modal (or
//! whatever owns it) always releases the listener.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use crossterm::event::KeyCode;

/// Identifies one keyboard listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeSet<ListenerId>,
}

/// Global keyboard event source that modals subscribe to while open
#[derive(Debug, Clone, Default)]
pub struct KeyboardHub {
    registry: Rc<RefCell<Registry>>,
}

impl KeyboardHub {
    /// Create a hub with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener; it stays registered until the returned guard drops
    pub fn subscribe(&self) -> KeyboardSubscription {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry.listeners.insert(id);
        KeyboardSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Whether `id` is still registered
    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.registry.borrow().listeners.contains(&id)
    }

    /// Listeners a key event would be delivered to, in subscription order
    pub fn dispatch(&self, key: KeyCode) -> Vec<ListenerId> {
        let listeners: Vec<_> = self.registry.borrow().listeners.iter().copied().collect();
        if !listeners.is_empty() {
            tracing::trace!(?key, count = listeners.len(), "dispatching key to listeners");
        }
        listeners
    }
}

/// Scoped keyboard listener registration
#[derive(Debug)]
pub struct KeyboardSubscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl KeyboardSubscription {
    /// The listener id
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for KeyboardSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}

/// Modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Hidden (initial)
    #[default]
    Closed,
    /// Visible and listening for Escape
    Open,
}

/// Where a mouse click landed relative to an open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed overlay itself, outside the panel
    Overlay,
    /// The panel or anything inside it
    Content,
}

/// Open/closed controller for one overlay panel
#[derive(Debug)]
pub struct Modal {
    name: &'static str,
    hub: KeyboardHub,
    subscription: Option<KeyboardSubscription>,
    dismiss_on_outside_click: bool,
}

impl Modal {
    /// Create a closed modal bound to `hub`
    pub fn new(name: &'static str, hub: KeyboardHub) -> Self {
        Self {
            name,
            hub,
            subscription: None,
            dismiss_on_outside_click: false,
        }
    }

    /// Enable or disable closing on overlay clicks
    pub fn with_outside_click(mut self, enabled: bool) -> Self {
        self.dismiss_on_outside_click = enabled;
        self
    }

    /// Current state
    pub fn state(&self) -> ModalState {
        if self.subscription.is_some() {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }

    /// Whether the modal is open
    pub fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether overlay clicks close this modal
    pub fn dismisses_on_outside_click(&self) -> bool {
        self.dismiss_on_outside_click
    }

    /// Listener id while open
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.subscription.as_ref().map(KeyboardSubscription::id)
    }

    /// Open the modal. Opening an open modal does nothing.
    pub fn open(&mut self) {
        if self.subscription.is_none() {
            tracing::debug!(modal = self.name, "modal opened");
            self.subscription = Some(self.hub.subscribe());
        }
    }

    /// Close the modal. Closing a closed modal does nothing.
    pub fn close(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!(modal = self.name, "modal closed");
        }
    }

    /// Flip between open and closed
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Feed a key event. Escape closes an open modal.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if self.is_open() && key == KeyCode::Esc {
            self.close();
            true
        } else {
            false
        }
    }

    /// Feed a mouse click. Returns whether the modal closed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if self.is_open() && self.dismiss_on_outside_click && target == ClickTarget::Overlay {
            self.toggle();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_without_listener() {
        let hub = KeyboardHub::new();
        let modal = Modal::new("test", hub.clone());
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_toggle_subscribes_and_unsubscribes() {
        let hub = KeyboardHub::new();
        let mut modal = Modal::new("test", hub.clone());

        modal.toggle();
        assert_eq!(modal.state(), ModalState::Open);
        assert_eq!(hub.listener_count(), 1);

        modal.toggle();
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_escape_closes_once() {
        let hub = KeyboardHub::new();
        let mut modal = Modal::new("test", hub.clone());
        modal.open();
        let id = modal.listener_id().unwrap();

        assert!(modal.handle_key(KeyCode::Esc));
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(!hub.is_subscribed(id));

        assert!(!modal.handle_key(KeyCode::Esc));
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let hub = KeyboardHub::new();
        let mut modal = Modal::new("test", hub);
        modal.open();
        assert!(!modal.handle_key(KeyCode::Char('x')));
        assert!(modal.is_open());
    }

    #[test]
    fn test_open_twice_keeps_one_listener() {
        let hub = KeyboardHub::new();
        let mut modal = Modal::new("test", hub.clone());
        modal.open();
        let id = modal.listener_id();
        modal.open();
        assert_eq!(hub.listener_count(), 1);
        assert_eq!(modal.listener_id(), id);
    }

    #[test]
    fn test_drop_releases_listener() {
        let hub = KeyboardHub::new();
        {
            let mut modal = Modal::new("test", hub.clone());
            modal.open();
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_dispatch_reaches_open_modals_only() {
        let hub = KeyboardHub::new();
        let mut a = Modal::new("a", hub.clone());
        let b = Modal::new("b", hub.clone());
        a.open();

        let delivered = hub.dispatch(KeyCode::Esc);
        assert_eq!(delivered, vec![a.listener_id().unwrap()]);
        assert!(b.listener_id().is_none());
    }

    #[test]
    fn test_outside_click() {
        let hub = KeyboardHub::new();
        let mut modal = Modal::new("sheet", hub.clone()).with_outside_click(true);
        modal.open();

        assert!(!modal.click(ClickTarget::Content));
        assert!(modal.is_open());

        assert!(modal.click(ClickTarget::Overlay));
        assert!(!modal.is_open());
        assert_eq!(hub.listener_count(), 0);

        // Clicking while closed never reopens
        assert!(!modal.click(ClickTarget::Overlay));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_outside_click_disabled() {
        let hub = KeyboardHub::new();
        let mut modal = Modal::new("drawer", hub);
        modal.open();
        assert!(!modal.click(ClickTarget::Overlay));
        assert!(modal.is_open());
    }
}
