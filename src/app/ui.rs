//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{AppState, Mode};
use crate::models::Post;
use crate::nav::{DrawerAction, DrawerEntry, IconKind, NavShell, render_icon};
use crate::theme::{Appearance, ThemeColors};

/// App icon
const ICON: &str = "🐦";

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 26;

/// Main render function
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let colors = state.theme.colors();

    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(bg_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    render_sidebar(frame, state, &colors, columns[0]);
    render_main(frame, state, &colors, columns[1]);
    render_status_bar(frame, state, &colors, rows[1]);

    // Remember where the panels landed so clicks can be hit-tested
    let sidebar_panel = if state.sidebar.modal().is_open() {
        Some(render_sidebar_sheet(frame, state, &colors, columns[0]))
    } else {
        None
    };
    let header_panel = if state.header.modal().is_open() {
        Some(render_header_drawer(frame, state, &colors, area))
    } else {
        None
    };
    state.modal_areas.sidebar = sidebar_panel;
    state.modal_areas.header = header_panel;
}

fn render_sidebar(frame: &mut Frame, state: &AppState, colors: &ThemeColors, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let nav = &state.sidebar;
    let items: Vec<ListItem> = nav
        .links()
        .iter()
        .map(|link| {
            let focused = nav.is_focused(&link.id);
            let icon = nav.link_icon(link);
            let active = state.route == link.route;
            let style = if focused {
                colors.strong()
            } else if active {
                colors.text_primary()
            } else {
                colors.text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", pad(icon.glyph, 2)), style),
                Span::styled(link.label.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(colors.block())
            .title(format!(" {ICON} Warble "))
            .title_style(colors.strong()),
    );
    frame.render_widget(list, chunks[0]);

    let identity = nav.identity(&state.auth, &state.user);
    let avatar = if state.is_authenticated() { "◉" } else { "○" };
    let card = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!(" {avatar} "), colors.text_primary()),
            Span::styled(identity.name.clone(), colors.text().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("   ", Style::default()),
            Span::styled(identity.display_handle(), colors.text_muted()),
            Span::styled("  ", Style::default()),
            Span::styled("[p] ⋯", colors.key_hint()),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::RIGHT)
            .border_style(colors.block()),
    );
    frame.render_widget(card, chunks[1]);
}

fn render_main(frame: &mut Frame, state: &AppState, colors: &ThemeColors, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if state.on_home() {
            vec![
                Constraint::Length(3), // Header
                Constraint::Length(7), // Composer
                Constraint::Min(0),    // Feed
            ]
        } else {
            vec![Constraint::Length(3), Constraint::Min(0)]
        })
        .split(area);

    render_header(frame, state, colors, chunks[0]);

    if state.on_home() {
        render_composer(frame, state, colors, chunks[1]);
        render_feed(frame, state, colors, chunks[2]);
    } else {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Nothing on {} yet.", state.route_title()),
                colors.text_muted(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Press ", colors.text_muted()),
                Span::styled("[i]", colors.key_hint()),
                Span::styled(" to write a post from Home", colors.text_muted()),
            ]),
        ]);
        frame.render_widget(placeholder, chunks[1]);
    }
}

fn render_header(frame: &mut Frame, state: &AppState, colors: &ThemeColors, area: Rect) {
    let title = state.route_title();
    let width = area.width.saturating_sub(2) as usize;
    let left = format!(" [a] ◉  {title}");
    let right = format!("{ICON} ✦ ");
    let gap = width.saturating_sub(left.width() + right.width());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" [a]", colors.key_hint()),
        Span::styled(" ◉  ", colors.text_primary()),
        Span::styled(title, colors.text().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, colors.text_primary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(colors.block()),
    );
    frame.render_widget(header, area);
}

fn render_composer(frame: &mut Frame, state: &AppState, colors: &ThemeColors, area: Rect) {
    let editing = state.mode == Mode::Compose;
    let draft = state.composer.draft();

    let mut lines: Vec<Line> = if draft.content.is_empty() && !editing {
        vec![Line::from(Span::styled(
            " What's happening?",
            colors.text_muted(),
        ))]
    } else {
        draft
            .content
            .split('\n')
            .map(|l| Line::from(Span::styled(format!(" {l}"), colors.text())))
            .collect()
    };
    if editing && state.current_tick() / 10 % 2 == 0 {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("▏", colors.text_primary()));
        }
    }

    let hint = if editing {
        " Ctrl+S post · Ctrl/Alt+Enter quick post · Esc done "
    } else {
        " [i] compose "
    };

    let composer = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if editing {
                colors.block_focus()
            } else {
                colors.block()
            })
            .title(format!(" ◉ {} ", state.composer.author().display_handle()))
            .title_style(colors.text_primary())
            .title_bottom(Line::styled(hint, colors.key_hint())),
    );
    frame.render_widget(composer, area);
}

fn render_feed(frame: &mut Frame, state: &AppState, colors: &ThemeColors, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(colors.block())
        .title(format!(" Timeline ({}) ", state.feed.len()))
        .title_style(colors.text_primary());

    if state.feed.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ℹ ", colors.text_info()),
                Span::styled("No posts yet", colors.text_muted()),
            ]),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .feed
        .iter()
        .enumerate()
        .map(|(i, post)| post_item(post, i == state.selected_post, colors, width))
        .collect();

    let list = List::new(items).block(block);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_post));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn post_item<'a>(post: &'a Post, selected: bool, colors: &ThemeColors, width: usize) -> ListItem<'a> {
    let base = if selected {
        colors.selected()
    } else {
        Style::default()
    };
    let marker = if selected { "▌" } else { " " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, colors.text_primary()),
        Span::styled(
            format!(" {} ", post.author_name),
            base.patch(colors.text().add_modifier(Modifier::BOLD)),
        ),
        Span::styled(post.display_handle(), base.patch(colors.text_muted())),
    ])];

    let wrap_width = width.saturating_sub(4).max(10);
    for line in post.content.split('\n') {
        if line.is_empty() {
            lines.push(Line::from(Span::styled(marker, colors.text_primary())));
            continue;
        }
        for chunk in textwrap::wrap(line, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(marker, colors.text_primary()),
                Span::styled(format!("   {chunk}"), colors.text()),
            ]));
        }
    }

    if let Some(url) = &post.image_url {
        lines.push(Line::from(vec![
            Span::styled(marker, colors.text_primary()),
            Span::styled(format!("   🖼  {url}"), colors.text_info()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(marker, colors.text_primary()),
        Span::styled(
            format!(
                "   💬 {}    🔁 {}    ♡ {}",
                post.comments, post.retweets, post.likes
            ),
            colors.text_muted(),
        ),
    ]));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn render_status_bar(frame: &mut Frame, state: &AppState, colors: &ThemeColors, area: Rect) {
    let mode = match state.mode {
        Mode::Normal => " NORMAL ",
        Mode::Compose => " COMPOSE ",
    };
    let help = if state.status.is_empty() {
        "Tab links · Enter open · j/k scroll · i compose · p menu · a account · q quit".to_string()
    } else {
        state.status.clone()
    };
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode, colors.selected()),
        Span::styled(format!(" {help}"), colors.text_muted()),
    ]));
    frame.render_widget(bar, area);
}

/// Small action sheet anchored to the bottom of the sidebar
fn render_sidebar_sheet(
    frame: &mut Frame,
    state: &AppState,
    colors: &ThemeColors,
    sidebar: Rect,
) -> Rect {
    let nav = &state.sidebar;
    let authenticated = state.is_authenticated();
    let entries = nav.entries(authenticated);
    let selected = nav.selected_entry(authenticated);

    let height = (entries.len() as u16 + 2).min(sidebar.height);
    let panel = Rect {
        x: sidebar.x + 1,
        y: sidebar.bottom().saturating_sub(height + 4),
        width: sidebar.width.saturating_sub(2),
        height,
    };

    let full = frame.area();
    dim_overlay(frame, colors, full);
    frame.render_widget(Clear, panel);

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| entry_line(nav, *entry, Some(*entry) == selected, state, colors))
        .collect();
    let sheet = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(colors.block_focus())
            .style(Style::default().bg(colors.bg)),
    );
    frame.render_widget(sheet, panel);
    panel
}

/// Account drawer sliding in from the left
fn render_header_drawer(
    frame: &mut Frame,
    state: &AppState,
    colors: &ThemeColors,
    area: Rect,
) -> Rect {
    let nav = &state.header;
    let authenticated = state.is_authenticated();
    let panel = Rect {
        width: drawer_width(area.width),
        ..area
    };

    dim_overlay(frame, colors, area);
    frame.render_widget(Clear, panel);

    let identity = nav.identity(&state.auth, &state.user);
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ◉ ", colors.text_primary()),
            Span::styled(identity.name.clone(), colors.text().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("    {}", identity.display_handle()),
            colors.text_muted(),
        )),
    ];
    if nav.config().show_stats {
        lines.push(Line::from(vec![
            Span::styled(format!("    {}", identity.following), colors.strong()),
            Span::styled(" Following   ", colors.text_muted()),
            Span::styled(identity.followers.to_string(), colors.strong()),
            Span::styled(" Followers", colors.text_muted()),
        ]));
    }
    lines.push(Line::from(""));

    let selected = nav.selected_entry(authenticated);
    let mut after_links = false;
    for entry in nav.entries(authenticated) {
        let is_link = matches!(entry, DrawerEntry::Link(_));
        if !is_link && !after_links {
            after_links = true;
            lines.push(Line::from(""));
        }
        lines.push(entry_line(nav, entry, Some(entry) == selected, state, colors));
    }

    let drawer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(colors.block_focus())
            .title(" Account info ")
            .title_style(colors.strong())
            .title_bottom(Line::styled(" j/k move · Enter select · Esc close ", colors.key_hint()))
            .style(Style::default().bg(colors.bg)),
    );
    frame.render_widget(drawer, panel);
    panel
}

fn entry_line<'a>(
    nav: &'a NavShell,
    entry: DrawerEntry,
    selected: bool,
    state: &AppState,
    colors: &ThemeColors,
) -> Line<'a> {
    let style = if selected {
        colors.selected()
    } else {
        colors.text()
    };
    match entry {
        DrawerEntry::Link(i) => {
            let Some(link) = nav.links().get(i) else {
                return Line::from("");
            };
            let icon = nav.link_icon(link);
            Line::from(Span::styled(
                format!("  {} {}", pad(icon.glyph, 2), link.label),
                style.add_modifier(Modifier::BOLD),
            ))
        }
        DrawerEntry::Section(s) => {
            let arrow = if nav.is_expanded(s) { "▾" } else { "▸" };
            let title = &nav.config().sections[s].title;
            Line::from(Span::styled(
                format!("  {arrow} {title}"),
                style.add_modifier(Modifier::BOLD),
            ))
        }
        DrawerEntry::Item(s, i) => {
            let Some(item) = nav.item(s, i) else {
                return Line::from("");
            };
            let icon = render_icon(item.icon, selected);
            let label = match item.action {
                DrawerAction::ToggleTheme => {
                    format!("{} {}", item.label, state.config.appearance.name())
                }
                _ => item.label.clone(),
            };
            let icon = match (&item.action, state.config.appearance) {
                (DrawerAction::ToggleTheme, Appearance::Dark) => render_icon(IconKind::Moon, selected),
                _ => icon,
            };
            let indent = if nav.config().sections[s].is_collapsible() {
                "    "
            } else {
                "  "
            };
            Line::from(Span::styled(
                format!("{indent}{} {label}", pad(icon.glyph, 2)),
                style,
            ))
        }
    }
}

fn dim_overlay(frame: &mut Frame, colors: &ThemeColors, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg_overlay)),
        area,
    );
}

/// Drawer covers 70% of the screen, at least 30 columns
fn drawer_width(total: u16) -> u16 {
    let wide = u32::from(total) * 7 / 10;
    u16::try_from(wide).unwrap_or(u16::MAX).max(30).min(total)
}

/// Right-pad to a display width
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::nav::IconWeight;
    use crate::seed::Seed;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_renders_feed_and_composer() {
        let mut state = AppState::from_seed(Config::default(), Seed::builtin());
        let screen = draw(&mut state);
        assert!(screen.contains("What's happening?"));
        assert!(screen.contains("Timeline"));
        assert!(screen.contains("Home"));
        assert!(state.modal_areas.sidebar.is_none());
    }

    #[test]
    fn test_open_modal_records_area() {
        let mut state = AppState::from_seed(Config::default(), Seed::builtin());
        state.toggle_header_drawer();
        let screen = draw(&mut state);
        assert!(screen.contains("Account"));
        assert!(state.modal_areas.header.is_some());

        state.toggle_header_drawer();
        draw(&mut state);
        assert!(state.modal_areas.header.is_none());
    }

    #[test]
    fn test_drawer_width() {
        assert_eq!(drawer_width(100), 70);
        assert_eq!(drawer_width(20), 20);
        assert_eq!(drawer_width(40), 30);
        assert_eq!(drawer_width(u16::MAX), 45874);
    }

    #[test]
    fn test_drawer_lists_links_with_focus_icon() {
        let mut state = AppState::from_seed(Config::default(), Seed::builtin());
        state.toggle_header_drawer();
        state.header.cursor_next(true);
        let screen = draw(&mut state);
        assert!(screen.contains("Blue"));
        assert!(screen.contains("Communities"));
        let blue = state.header.links()[1].clone();
        assert_eq!(state.header.link_icon(&blue).weight, IconWeight::Fill);
        assert!(screen.contains(state.header.link_icon(&blue).glyph));
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }
}
