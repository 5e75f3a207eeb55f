//! Application state

use ratatui::layout::{Position, Rect};

use crate::auth::{Authenticator, Session};
use crate::composer::Composer;
use crate::config::Config;
use crate::feed::FeedStore;
use crate::modal::{ClickTarget, KeyboardHub, ListenerId};
use crate::models::{LocalUser, Post};
use crate::nav::{NavConfig, NavEvent, NavShell};
use crate::seed::Seed;
use crate::theme::Theme;

/// Route shown when the app starts
pub const HOME_ROUTE: &str = "home";

/// Where keyboard input goes when no modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and feed browsing
    #[default]
    Normal,
    /// Typing into the composer
    Compose,
}

/// Which navigation shell owns a modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// Sidebar action sheet
    Sidebar,
    /// Header account drawer
    Header,
}

/// Panel rectangles of the open modals from the last draw, for mouse hit tests
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalAreas {
    /// Sidebar sheet panel
    pub sidebar: Option<Rect>,
    /// Header drawer panel
    pub header: Option<Rect>,
}

/// Application state
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Active theme (follows the configured appearance)
    pub theme: Theme,
    /// Whether to quit
    pub should_quit: bool,
    /// Input mode
    pub mode: Mode,

    /// Identity that authors new posts
    pub user: LocalUser,
    /// Published posts
    pub feed: FeedStore,
    /// Draft holder
    pub composer: Composer,
    /// Signed-in session
    pub auth: Session,

    /// Keyboard source the modals subscribe to
    pub hub: KeyboardHub,
    /// Left navigation
    pub sidebar: NavShell,
    /// Top bar with account drawer
    pub header: NavShell,

    /// Current route
    pub route: String,
    /// Selected post index
    pub selected_post: usize,
    /// Status message (bottom bar)
    pub status: String,
    /// Modal panels from the last draw
    pub modal_areas: ModalAreas,

    /// Tick counter for animations
    tick: u64,
}

impl AppState {
    /// Create state from config, loading the configured seed
    pub fn new(config: Config) -> Self {
        let seed = Seed::load_or_builtin(config.seed_file().as_deref());
        Self::from_seed(config, seed)
    }

    /// Create state from explicit seed data
    pub fn from_seed(config: Config, seed: Seed) -> Self {
        let Seed { user, posts } = seed;
        let hub = KeyboardHub::new();

        let mut composer = Composer::new(user.clone());
        composer.set_hotkey_resets_draft(config.hotkey_resets_draft);

        let sidebar = NavShell::new(
            NavConfig::sidebar().with_outside_click(config.sidebar_outside_click),
            hub.clone(),
        );
        let header = NavShell::new(
            NavConfig::header(&user).with_outside_click(config.header_outside_click),
            hub.clone(),
        );

        Self {
            theme: config.active_theme(),
            config,
            should_quit: false,
            mode: Mode::Normal,
            auth: Session::signed_in(&user.handle),
            user,
            feed: FeedStore::new(posts),
            composer,
            hub,
            sidebar,
            header,
            route: HOME_ROUTE.to_string(),
            selected_post: 0,
            status: String::new(),
            modal_areas: ModalAreas::default(),
            tick: 0,
        }
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Get current tick
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Get the currently selected post
    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.get(self.selected_post)
    }

    /// Move selection down in the feed
    pub fn select_next_post(&mut self) {
        if !self.feed.is_empty() {
            self.selected_post = (self.selected_post + 1).min(self.feed.len() - 1);
        }
    }

    /// Move selection up in the feed
    pub fn select_prev_post(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    /// Start typing into the composer
    pub fn open_compose(&mut self) {
        self.sidebar.blur_all();
        self.mode = Mode::Compose;
    }

    /// Leave the composer, keeping the draft
    pub fn close_compose(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Form submit: publish and reset the draft
    pub fn submit_post(&mut self) {
        self.composer.submit(&mut self.feed);
        self.after_publish();
    }

    /// Ctrl+Enter: publish, keeping the draft unless configured otherwise
    pub fn hotkey_submit(&mut self) {
        self.composer.submit_via_hotkey(&mut self.feed);
        self.after_publish();
    }

    fn after_publish(&mut self) {
        self.selected_post = 0;
        self.set_status(format!("✓ Posted ({} in feed)", self.feed.len()));
    }

    /// Switch route
    pub fn navigate(&mut self, route: &str) {
        tracing::debug!(route, "navigate");
        self.route = route.to_string();
        self.selected_post = 0;
    }

    /// Whether the timeline is showing
    pub fn on_home(&self) -> bool {
        self.route == HOME_ROUTE
    }

    /// Human title for the current route
    pub fn route_title(&self) -> String {
        self.sidebar
            .links()
            .iter()
            .chain(self.header.links())
            .find(|l| l.route == self.route)
            .map_or_else(
                || match self.route.as_str() {
                    "login" => "Log in".to_string(),
                    _ => "Not found".to_string(),
                },
                |l| l.label.clone(),
            )
    }

    /// Flip light/dark appearance
    pub fn toggle_appearance(&mut self) {
        self.config.appearance = self.config.appearance.toggle();
        self.theme = self.config.active_theme();
        self.set_status(format!("Theme {}", self.config.appearance.name()));
    }

    /// Shell whose open modal holds the listener `id`
    pub fn shell_for_listener(&self, id: ListenerId) -> Option<Shell> {
        [(Shell::Sidebar, &self.sidebar), (Shell::Header, &self.header)]
            .into_iter()
            .find(|(_, nav)| nav.modal().listener_id() == Some(id))
            .map(|(shell, _)| shell)
    }

    /// Navigation shell by kind
    pub fn shell_mut(&mut self, shell: Shell) -> &mut NavShell {
        match shell {
            Shell::Sidebar => &mut self.sidebar,
            Shell::Header => &mut self.header,
        }
    }

    /// Open/close the sidebar action sheet
    pub fn toggle_sidebar_sheet(&mut self) {
        self.header.close_modal();
        self.sidebar.toggle_modal();
    }

    /// Open/close the header account drawer
    pub fn toggle_header_drawer(&mut self) {
        self.sidebar.close_modal();
        self.header.toggle_modal();
    }

    /// Activate the highlighted row in the open drawer
    pub fn activate_drawer(&mut self, shell: Shell) {
        let nav = match shell {
            Shell::Sidebar => &mut self.sidebar,
            Shell::Header => &mut self.header,
        };
        if let Some(event) = nav.activate(&mut self.auth) {
            self.apply_nav_event(event);
        }
    }

    /// React to a navigation outcome
    pub fn apply_nav_event(&mut self, event: NavEvent) {
        match event {
            NavEvent::Navigate(route) => self.navigate(&route),
            NavEvent::ToggleTheme => self.toggle_appearance(),
            NavEvent::LoggedOut => self.set_status("Signed out"),
            NavEvent::Closed => {}
        }
    }

    /// Sign back in as the local user
    pub fn login(&mut self) {
        let handle = self.user.handle.clone();
        self.auth.login(&handle);
        self.set_status(format!("Signed in as @{handle}"));
    }

    /// Whether someone is signed in
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Route a left click to the open modals
    pub fn click(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);
        let areas = self.modal_areas;
        for (shell, area) in [(Shell::Sidebar, areas.sidebar), (Shell::Header, areas.header)] {
            let target = match area {
                Some(rect) if rect.contains(pos) => ClickTarget::Content,
                _ => ClickTarget::Overlay,
            };
            self.shell_mut(shell).click_modal(target);
        }
    }
}
