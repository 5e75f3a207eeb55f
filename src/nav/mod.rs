//! Navigation shell shared by the sidebar and the header.
//!
//! A [`NavShell`] owns a link list with per-link focus state and one modal
//! (the sidebar action sheet or the header account drawer). Which links and
//! drawer blocks it shows, and whether clicking outside the modal closes it,
//! come from its [`NavConfig`].

pub mod icons;

pub use icons::{IconKind, IconWeight, RenderedIcon, render_icon};

use crossterm::event::KeyCode;

use crate::auth::Authenticator;
use crate::focus::FocusTracker;
use crate::modal::{ClickTarget, KeyboardHub, Modal};
use crate::models::LocalUser;

/// A navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Focus-tracking identifier
    pub id: String,
    /// Label shown next to the icon
    pub label: String,
    /// Route activated by the link
    pub route: String,
    /// Icon
    pub icon: IconKind,
}

impl NavLink {
    fn new(id: &str, label: &str, route: &str, icon: IconKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            route: route.to_string(),
            icon,
        }
    }
}

/// What a drawer item does when activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerAction {
    /// Go to a route (closes the drawer)
    Navigate(String),
    /// Sign out, then close the drawer
    Logout,
    /// Flip light/dark appearance
    ToggleTheme,
    /// Close the drawer
    Cancel,
}

/// When a drawer item is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Always
    #[default]
    Always,
    /// Only while signed in
    SignedIn,
    /// Only while signed out
    SignedOut,
}

impl Visibility {
    /// Whether an item with this visibility shows for the given auth state
    pub const fn allows(self, authenticated: bool) -> bool {
        match self {
            Self::Always => true,
            Self::SignedIn => authenticated,
            Self::SignedOut => !authenticated,
        }
    }
}

/// An entry inside a drawer section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerItem {
    /// Label
    pub label: String,
    /// Icon
    pub icon: IconKind,
    /// Action
    pub action: DrawerAction,
    /// Visibility rule
    pub visibility: Visibility,
}

impl DrawerItem {
    fn new(label: &str, icon: IconKind, action: DrawerAction) -> Self {
        Self {
            label: label.to_string(),
            icon,
            action,
            visibility: Visibility::Always,
        }
    }

    fn visible(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// A block of drawer items.
///
/// Sections with a title render as collapsible accordions (collapsed at
/// first); an untitled section is always expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerSection {
    /// Accordion title (empty for a plain block)
    pub title: String,
    /// Items
    pub items: Vec<DrawerItem>,
}

impl DrawerSection {
    fn new(title: &str, items: Vec<DrawerItem>) -> Self {
        Self {
            title: title.to_string(),
            items,
        }
    }

    /// Whether the section can be collapsed
    pub fn is_collapsible(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Configuration for one navigation shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Name used in logs and titles
    pub name: &'static str,
    /// Link list
    pub links: Vec<NavLink>,
    /// Drawer content blocks
    pub sections: Vec<DrawerSection>,
    /// List the links as selectable drawer rows, above the sections
    pub links_in_drawer: bool,
    /// Show follower/following counts in the drawer identity block
    pub show_stats: bool,
    /// Close the modal when its overlay is clicked
    pub dismiss_on_outside_click: bool,
}

impl NavConfig {
    /// Sidebar: primary navigation plus a small sign-in/sign-out sheet
    pub fn sidebar() -> Self {
        let links = vec![
            NavLink::new("home", "Home", "home", IconKind::House),
            NavLink::new("explorer", "Explore", "explorer", IconKind::MagnifyingGlass),
            NavLink::new("notifications", "Notifications", "notifications", IconKind::Bell),
            NavLink::new("messages", "Messages", "messages", IconKind::Envelope),
            NavLink::new("bookmarks", "Bookmarks", "bookmarks", IconKind::Bookmark),
            NavLink::new("lists", "Lists", "lists", IconKind::List),
            NavLink::new("profile", "Profile", "profile", IconKind::User),
            NavLink::new("more", "More", "more", IconKind::DotsThreeCircle),
        ];
        let sheet = DrawerSection::new(
            "",
            vec![
                DrawerItem::new("Cancel", IconKind::Close, DrawerAction::Cancel),
                DrawerItem::new("Log out", IconKind::SignOut, DrawerAction::Logout)
                    .visible(Visibility::SignedIn),
                DrawerItem::new(
                    "Log in",
                    IconKind::SignIn,
                    DrawerAction::Navigate("login".to_string()),
                )
                .visible(Visibility::SignedOut),
            ],
        );

        Self {
            name: "sidebar",
            links,
            sections: vec![sheet],
            links_in_drawer: false,
            show_stats: false,
            dismiss_on_outside_click: true,
        }
    }

    /// Header: account drawer with identity, secondary links and settings
    pub fn header(user: &LocalUser) -> Self {
        let links = vec![
            NavLink::new(&user.handle, "Profile", "profile", IconKind::User),
            NavLink::new("blue", "Blue", "home", IconKind::Bird),
            NavLink::new("lists", "Lists", "lists", IconKind::List),
            NavLink::new("bookmarks", "Bookmarks", "bookmarks", IconKind::Bookmark),
            NavLink::new("communities", "Communities", "notifications", IconKind::Users),
        ];
        let go = |route: &str| DrawerAction::Navigate(route.to_string());
        let sections = vec![
            DrawerSection::new(
                "Creator Studio",
                vec![DrawerItem::new("Analytics", IconKind::ChartLine, go("errors"))],
            ),
            DrawerSection::new(
                "Professional Tools",
                vec![
                    DrawerItem::new("For Professionals", IconKind::Rocket, go("errors")),
                    DrawerItem::new("Ads", IconKind::ArrowUpRight, go("errors")),
                ],
            ),
            DrawerSection::new(
                "Settings and Support",
                vec![
                    DrawerItem::new("Settings", IconKind::Gear, go("errors")),
                    DrawerItem::new("Help Center", IconKind::Question, go("errors")),
                    DrawerItem::new("Log Out", IconKind::SignOut, DrawerAction::Logout),
                    DrawerItem::new("Theme", IconKind::Sun, DrawerAction::ToggleTheme),
                ],
            ),
        ];

        Self {
            name: "header",
            links,
            sections,
            links_in_drawer: true,
            show_stats: true,
            dismiss_on_outside_click: true,
        }
    }

    /// Override outside-click dismissal
    pub fn with_outside_click(mut self, enabled: bool) -> Self {
        self.dismiss_on_outside_click = enabled;
        self
    }
}

/// A selectable row in an open drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEntry {
    /// Link `n` of the shell's link list
    Link(usize),
    /// Accordion header of section `n`
    Section(usize),
    /// Item `(section, item)`
    Item(usize, usize),
}

/// Outcome of activating a drawer entry that the app must act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Switch to a route
    Navigate(String),
    /// Flip light/dark appearance
    ToggleTheme,
    /// The user signed out
    LoggedOut,
    /// The drawer was dismissed
    Closed,
}

/// Link list + focus tracking + one modal
#[derive(Debug)]
pub struct NavShell {
    config: NavConfig,
    focus: FocusTracker,
    modal: Modal,
    expanded: Vec<bool>,
    cursor: usize,
}

impl NavShell {
    /// Create a shell whose modal listens on `hub`
    pub fn new(config: NavConfig, hub: KeyboardHub) -> Self {
        let modal = Modal::new(config.name, hub).with_outside_click(config.dismiss_on_outside_click);
        let expanded = vec![false; config.sections.len()];
        Self {
            config,
            focus: FocusTracker::new(),
            modal,
            expanded,
            cursor: 0,
        }
    }

    /// Configuration
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Link list
    pub fn links(&self) -> &[NavLink] {
        &self.config.links
    }

    /// The modal
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Focus tracker
    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    /// A link gained focus
    pub fn on_focus(&mut self, link_id: &str) {
        self.focus.on_focus(link_id);
    }

    /// A link lost focus
    pub fn on_blur(&mut self, link_id: &str) {
        self.focus.on_blur(link_id);
    }

    /// Whether a link is focused
    pub fn is_focused(&self, link_id: &str) -> bool {
        self.focus.is_focused(link_id)
    }

    /// Icon for a link in its current focus state
    pub fn link_icon(&self, link: &NavLink) -> RenderedIcon {
        render_icon(link.icon, self.focus.is_focused(&link.id))
    }

    /// Index of the focused link
    pub fn focused_index(&self) -> Option<usize> {
        self.config
            .links
            .iter()
            .position(|l| self.focus.is_focused(&l.id))
    }

    /// The focused link
    pub fn focused_link(&self) -> Option<&NavLink> {
        self.focused_index().map(|i| &self.config.links[i])
    }

    /// Move focus to the next link, wrapping around
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    /// Move focus to the previous link, wrapping around
    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.config.links.len();
        if len == 0 {
            return;
        }
        let current = self.focused_index();
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        if let Some(i) = current {
            let id = self.config.links[i].id.clone();
            self.focus.on_blur(&id);
        }
        let id = self.config.links[next].id.clone();
        self.focus.on_focus(&id);
    }

    /// Blur whichever link is focused
    pub fn blur_all(&mut self) {
        if let Some(i) = self.focused_index() {
            let id = self.config.links[i].id.clone();
            self.focus.on_blur(&id);
        }
    }

    /// Open or close the modal
    pub fn toggle_modal(&mut self) {
        self.modal.toggle();
        if self.modal.is_open() {
            self.cursor = 0;
        }
        self.sync_drawer_focus();
    }

    /// Close the modal
    pub fn close_modal(&mut self) {
        self.modal.close();
        self.sync_drawer_focus();
    }

    /// Feed a key to the modal. Returns whether it was consumed.
    pub fn handle_modal_key(&mut self, key: KeyCode) -> bool {
        let consumed = self.modal.handle_key(key);
        self.sync_drawer_focus();
        consumed
    }

    /// Feed a mouse click to the modal. Returns whether it closed.
    pub fn click_modal(&mut self, target: ClickTarget) -> bool {
        let closed = self.modal.click(target);
        self.sync_drawer_focus();
        closed
    }

    /// Drawer links follow the cursor: the highlighted link is focused,
    /// every other one is blurred, and nothing is focused while closed.
    fn sync_drawer_focus(&mut self) {
        if !self.config.links_in_drawer {
            return;
        }
        let highlighted = if self.modal.is_open() {
            Some(self.cursor)
        } else {
            None
        };
        for (i, link) in self.config.links.iter().enumerate() {
            if Some(i) == highlighted {
                self.focus.on_focus(&link.id);
            } else if self.focus.is_focused(&link.id) {
                self.focus.on_blur(&link.id);
            }
        }
    }

    /// Expand or collapse an accordion section
    pub fn toggle_section(&mut self, index: usize) {
        if let Some(expanded) = self.expanded.get_mut(index) {
            *expanded = !*expanded;
        }
    }

    /// Whether a section's items are shown
    pub fn is_expanded(&self, index: usize) -> bool {
        match self.config.sections.get(index) {
            Some(section) if !section.is_collapsible() => true,
            Some(_) => self.expanded[index],
            None => false,
        }
    }

    /// Selectable drawer rows for the given auth state, top to bottom
    pub fn entries(&self, authenticated: bool) -> Vec<DrawerEntry> {
        let mut entries = Vec::new();
        if self.config.links_in_drawer {
            entries.extend((0..self.config.links.len()).map(DrawerEntry::Link));
        }
        for (s, section) in self.config.sections.iter().enumerate() {
            if section.is_collapsible() {
                entries.push(DrawerEntry::Section(s));
            }
            if self.is_expanded(s) {
                entries.extend(
                    section
                        .items
                        .iter()
                        .enumerate()
                        .filter(|(_, item)| item.visibility.allows(authenticated))
                        .map(|(i, _)| DrawerEntry::Item(s, i)),
                );
            }
        }
        entries
    }

    /// Drawer item by position
    pub fn item(&self, section: usize, item: usize) -> Option<&DrawerItem> {
        self.config.sections.get(section)?.items.get(item)
    }

    /// Currently highlighted drawer row
    pub fn selected_entry(&self, authenticated: bool) -> Option<DrawerEntry> {
        let entries = self.entries(authenticated);
        let last = entries.len().checked_sub(1)?;
        entries.get(self.cursor.min(last)).copied()
    }

    /// Highlight the next drawer row
    pub fn cursor_next(&mut self, authenticated: bool) {
        let len = self.entries(authenticated).len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
        self.sync_drawer_focus();
    }

    /// Highlight the previous drawer row
    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.sync_drawer_focus();
    }

    /// Identity block: the local user when signed in, a placeholder otherwise
    pub fn identity(&self, auth: &dyn Authenticator, user: &LocalUser) -> LocalUser {
        if auth.is_authenticated() {
            user.clone()
        } else {
            LocalUser::anonymous()
        }
    }

    /// Sign out through the collaborator, then close the modal
    pub fn logout(&mut self, auth: &mut dyn Authenticator) {
        auth.logout();
        self.close_modal();
    }

    /// Activate the highlighted drawer row
    pub fn activate(&mut self, auth: &mut dyn Authenticator) -> Option<NavEvent> {
        match self.selected_entry(auth.is_authenticated())? {
            DrawerEntry::Link(i) => {
                let route = self.config.links[i].route.clone();
                Some(self.apply(DrawerAction::Navigate(route), auth))
            }
            DrawerEntry::Section(s) => {
                self.toggle_section(s);
                None
            }
            DrawerEntry::Item(s, i) => {
                let action = self.config.sections[s].items[i].action.clone();
                Some(self.apply(action, auth))
            }
        }
    }

    fn apply(&mut self, action: DrawerAction, auth: &mut dyn Authenticator) -> NavEvent {
        match action {
            DrawerAction::Navigate(route) => {
                self.close_modal();
                NavEvent::Navigate(route)
            }
            DrawerAction::Logout => {
                self.logout(auth);
                NavEvent::LoggedOut
            }
            DrawerAction::ToggleTheme => NavEvent::ToggleTheme,
            DrawerAction::Cancel => {
                self.close_modal();
                NavEvent::Closed
            }
        }
    }
}
