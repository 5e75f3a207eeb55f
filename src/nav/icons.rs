//! Navigation icons.
//!
//! Each icon has an outline and a filled variant; a focused link shows the
//! filled one.

/// Icons used by navigation links and drawer items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Home
    House,
    /// Explore/search
    MagnifyingGlass,
    /// Notifications
    Bell,
    /// Messages
    Envelope,
    /// Bookmarks
    Bookmark,
    /// Lists
    List,
    /// Profile
    User,
    /// Communities
    Users,
    /// More
    DotsThreeCircle,
    /// App logo
    Bird,
    /// Analytics
    ChartLine,
    /// Professional tools
    Rocket,
    /// External link
    ArrowUpRight,
    /// Settings
    Gear,
    /// Help
    Question,
    /// Sign out
    SignOut,
    /// Sign in
    SignIn,
    /// Close/cancel
    Close,
    /// Light appearance
    Sun,
    /// Dark appearance
    Moon,
}

/// Visual weight of a rendered icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconWeight {
    /// Outline glyph
    Regular,
    /// Solid glyph
    Fill,
}

/// An icon ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedIcon {
    /// Which icon
    pub kind: IconKind,
    /// Outline or filled
    pub weight: IconWeight,
    /// Terminal glyph
    pub glyph: &'static str,
}

impl IconKind {
    const fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Self::House => ("⌂", "🏠"),
            Self::MagnifyingGlass => ("⌕", "🔍"),
            Self::Bell => ("◔", "🔔"),
            Self::Envelope => ("✉", "📨"),
            Self::Bookmark => ("▯", "🔖"),
            Self::List => ("☰", "📄"),
            Self::User => ("☺", "👤"),
            Self::Users => ("⚇", "👥"),
            Self::DotsThreeCircle => ("⋯", "⊕"),
            Self::Bird => ("◁", "🐦"),
            Self::ChartLine => ("↗", "📈"),
            Self::Rocket => ("➶", "🚀"),
            Self::ArrowUpRight => ("⇱", "⬈"),
            Self::Gear => ("⚙", "🔧"),
            Self::Question => ("?", "❓"),
            Self::SignOut => ("⇥", "🚪"),
            Self::SignIn => ("⇤", "🔑"),
            Self::Close => ("×", "✖"),
            Self::Sun => ("☼", "☀"),
            Self::Moon => ("☾", "🌙"),
        }
    }
}

/// Pick the icon variant for a link's focus state
pub const fn render_icon(kind: IconKind, focused: bool) -> RenderedIcon {
    let (outline, filled) = kind.glyphs();
    if focused {
        RenderedIcon {
            kind,
            weight: IconWeight::Fill,
            glyph: filled,
        }
    } else {
        RenderedIcon {
            kind,
            weight: IconWeight::Regular,
            glyph: outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_icon_is_filled() {
        let icon = render_icon(IconKind::House, true);
        assert_eq!(icon.weight, IconWeight::Fill);
        assert_eq!(icon.kind, IconKind::House);

        let icon = render_icon(IconKind::House, false);
        assert_eq!(icon.weight, IconWeight::Regular);
    }

    #[test]
    fn test_variants_differ() {
        for kind in [IconKind::Bell, IconKind::Bookmark, IconKind::User, IconKind::Moon] {
            assert_ne!(render_icon(kind, true).glyph, render_icon(kind, false).glyph);
        }
    }
}
