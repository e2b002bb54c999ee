//! Dashboard layout and widgets.
//!
//! # Layout Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ IT - New DC                         ☀ Light  │
//! │ Track the progress of ...                    │
//! ├──────────────────────────────────────────────┤
//! │ ╭ Title ─────────────────────────────────╮   │
//! │ │ Progress               ▸ More details  │   │
//! │ │ Description                            │   │
//! │ │ ███████████████████ 100% ███████████   │   │
//! │ │ Completed   Updated recently           │   │
//! │ ╰────────────────────────────────────────╯   │
//! │ ...                                          │
//! ├──────────────────────────────────────────────┤
//! │ Total projects │ Average progress │ Nearly   │
//! ├──────────────────────────────────────────────┤
//! │ ↑↓: select | Enter: details | t: theme | Q   │
//! └──────────────────────────────────────────────┘
//! ```

use super::app::DashboardApp;
use crate::classify::status_color;
use crate::project::Project;
use crate::theme::{Chrome, Theme};
use crate::view_state::ViewState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

/// Rows a collapsed card needs, borders included.
const CARD_BASE_HEIGHT: u16 = 5;

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, app: &DashboardApp) {
    let chrome = app.view().theme().chrome();

    frame.render_widget(
        Block::default().style(Style::default().bg(chrome.background)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Cards
            Constraint::Length(4), // Stats
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chrome, chunks[0]);
    render_cards(frame, app, chrome, chunks[1]);
    render_stats(frame, app, chrome, chunks[2]);
    render_footer(frame, app, chrome, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &DashboardApp, chrome: &Chrome, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(chrome.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indicator = theme_indicator(app.view().theme());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(indicator.chars().count() as u16),
        ])
        .split(inner);

    let projects = app.projects();
    let text = vec![
        Line::from(Span::styled(
            projects.title().to_string(),
            Style::default()
                .fg(chrome.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            projects.subtitle().to_string(),
            Style::default().fg(chrome.text_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(text), columns[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(indicator, Style::default().fg(chrome.accent))),
        columns[1],
    );
}

fn theme_indicator(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀ Light ",
        Theme::Dark => "☾ Dark ",
    }
}

fn render_cards(frame: &mut Frame, app: &DashboardApp, chrome: &Chrome, area: Rect) {
    let projects = app.projects();
    if projects.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No projects to show.",
            Style::default().fg(chrome.text_secondary),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let heights: Vec<u16> = projects
        .iter()
        .map(|p| card_height(p, app.view()))
        .collect();
    let first = first_visible(&heights, app.selected_index(), area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (index, project) in projects.iter().enumerate().skip(first) {
        if y >= bottom {
            break;
        }
        let height = heights[index].min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        render_card(
            frame,
            project,
            app.view(),
            index == app.selected_index(),
            chrome,
            card_area,
        );
        y += height;
    }
}

/// Height of a card, including the detail panel when it is expanded.
pub fn card_height(project: &Project, view: &ViewState) -> u16 {
    let mut height = CARD_BASE_HEIGHT;
    if !project.description.is_empty() {
        height += 1;
    }
    if view.is_expanded(project.id) {
        let details = u16::try_from(detail_lines(project).len()).unwrap_or(u16::MAX);
        height = height.saturating_add(details);
    }
    height
}

/// Index of the first card to draw so that the selected card is fully
/// visible, preferring to start at the top.
pub fn first_visible(heights: &[u16], selected: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut first = 0;
    let mut used: u32 = heights[..=selected].iter().map(|&h| u32::from(h)).sum();
    while used > u32::from(available) && first < selected {
        used -= u32::from(heights[first]);
        first += 1;
    }
    first
}

fn render_card(
    frame: &mut Frame,
    project: &Project,
    view: &ViewState,
    selected: bool,
    chrome: &Chrome,
    area: Rect,
) {
    let color = status_color(project.progress, view.theme());
    let expanded = view.is_expanded(project.id);

    let border_style = if selected {
        Style::default().fg(chrome.border_focused)
    } else {
        Style::default().fg(chrome.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(chrome.surface))
        .title(Span::styled(
            format!(" {} ", project.name),
            Style::default()
                .fg(chrome.text_primary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let description_height = if project.description.is_empty() { 0 } else { 1 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Expand hint
            Constraint::Length(description_height), // Description
            Constraint::Length(1),                  // Gauge
            Constraint::Length(1),                  // Status
            Constraint::Min(0),                     // Details
        ])
        .split(inner);

    let hint = if expanded {
        "▾ Less details"
    } else {
        "▸ More details"
    };
    let hint_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(hint.chars().count() as u16 + 1),
        ])
        .split(rows[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Progress",
            Style::default().fg(chrome.text_secondary),
        )),
        hint_row[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(chrome.accent))),
        hint_row[1],
    );

    if description_height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                project.description.clone(),
                Style::default().fg(chrome.text_secondary),
            )),
            rows[1],
        );
    }

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(chrome.gauge_track))
        .ratio(project.fill_ratio())
        .label(Span::styled(
            format!("{}%", project.progress),
            Style::default()
                .fg(chrome.text_primary)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, rows[2]);

    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", crate::classify::status_label(project.progress)),
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        Span::raw("  "),
        Span::styled("Updated recently", Style::default().fg(chrome.text_secondary)),
    ]);
    frame.render_widget(Paragraph::new(status), rows[3]);

    if expanded {
        let details: Vec<Line> = detail_lines(project)
            .into_iter()
            .map(|(text, heading)| {
                let style = if heading {
                    Style::default()
                        .fg(chrome.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(chrome.text_primary)
                };
                Line::from(Span::styled(text, style))
            })
            .collect();
        frame.render_widget(Paragraph::new(details), rows[4]);
    }
}

/// Lines of the detail panel as `(text, is_heading)`.
fn detail_lines(project: &Project) -> Vec<(String, bool)> {
    let mut lines = vec![
        (String::new(), false),
        ("Upcoming updates".to_string(), true),
    ];
    if project.next_updates.is_empty() {
        lines.push(("  (none)".to_string(), false));
    } else {
        lines.extend(
            project
                .next_updates
                .iter()
                .map(|u| (format!("  • {}", u), false)),
        );
    }
    if let Some(last) = &project.last_update {
        lines.push(("Last update".to_string(), true));
        lines.push((format!("  {}", last), false));
    }
    lines
}

fn render_stats(frame: &mut Frame, app: &DashboardApp, chrome: &Chrome, area: Rect) {
    let stats = app.stats();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cells = [
        (stats.total.to_string(), "Total projects"),
        (stats.average_display(), "Average progress"),
        (stats.near_complete.to_string(), "Nearly complete"),
    ];

    for ((value, label), column) in cells.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(chrome.border))
            .style(Style::default().bg(chrome.surface));
        let text = vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(chrome.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(label, Style::default().fg(chrome.text_secondary)))
                .centered(),
        ];
        frame.render_widget(Paragraph::new(text).block(block), *column);
    }
}

fn render_footer(frame: &mut Frame, app: &DashboardApp, chrome: &Chrome, area: Rect) {
    let details = match app.selected_project() {
        Some(p) if app.view().is_expanded(p.id) => "Enter: less details",
        _ => "Enter: more details",
    };
    let help_text = format!(
        " ↑↓: select | {} | Esc: collapse | t: theme | Q: quit ",
        details
    );
    let footer = Paragraph::new(help_text).style(Style::default().fg(chrome.text_secondary));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ProjectId, Projects};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &DashboardApp, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn press(app: &mut DashboardApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_render_shows_header_and_stats() {
        let app = DashboardApp::new(Projects::sample(), ViewState::new());
        let screen = draw(&app, 80, 60);
        assert!(screen.contains("IT - New DC"));
        assert!(screen.contains("Light"));
        assert!(screen.contains("Total projects"));
        assert!(screen.contains("70%"));
        assert!(screen.contains("Nearly complete"));
    }

    #[test]
    fn test_render_cards_with_labels() {
        let app = DashboardApp::new(Projects::sample(), ViewState::new());
        let screen = draw(&app, 80, 60);
        assert_eq!(screen.matches("Completed").count(), 2);
        assert_eq!(screen.matches("In Progress").count(), 1);
        assert_eq!(screen.matches("Started").count(), 1);
        assert_eq!(screen.matches("More details").count(), 4);
    }

    #[test]
    fn test_render_collapsed_has_no_detail_panel() {
        let app = DashboardApp::new(Projects::sample(), ViewState::new());
        let screen = draw(&app, 80, 60);
        assert!(!screen.contains("Upcoming updates"));
    }

    #[test]
    fn test_render_expanded_card_only() {
        let mut app = DashboardApp::new(Projects::sample(), ViewState::new());
        press(&mut app, KeyCode::Enter);
        let screen = draw(&app, 80, 60);
        assert_eq!(screen.matches("Upcoming updates").count(), 1);
        assert_eq!(screen.matches("Less details").count(), 1);
        assert_eq!(screen.matches("More details").count(), 3);
        assert!(screen.contains("Last update."));
    }

    #[test]
    fn test_render_dark_theme_indicator() {
        let mut app = DashboardApp::new(Projects::sample(), ViewState::new());
        press(&mut app, KeyCode::Char('t'));
        let screen = draw(&app, 80, 60);
        assert!(screen.contains("Dark"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let mut app = DashboardApp::new(Projects::sample(), ViewState::new());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        draw(&app, 20, 10);
        draw(&app, 80, 12);
    }

    #[test]
    fn test_render_empty_collection() {
        let app = DashboardApp::new(Projects::new("Empty", "", Vec::new()), ViewState::new());
        let screen = draw(&app, 60, 20);
        assert!(screen.contains("No projects to show."));
        assert!(screen.contains('-'));
    }

    #[test]
    fn test_card_height_grows_when_expanded() {
        let project = Project::new(1, "a", "b", 10)
            .with_next_updates(["x", "y"])
            .with_last_update("z");
        let mut view = ViewState::new();
        let collapsed = card_height(&project, &view);
        assert_eq!(collapsed, CARD_BASE_HEIGHT + 1);
        view.toggle_expansion(ProjectId(1));
        // blank, heading, two notes, heading, last update
        assert_eq!(card_height(&project, &view), collapsed + 6);
    }

    #[test]
    fn test_card_height_saturates_with_many_notes() {
        let notes: Vec<String> = (0..70_000).map(|i| format!("note {}", i)).collect();
        let project = Project::new(1, "a", "b", 10).with_next_updates(notes);
        let mut view = ViewState::new();
        view.toggle_expansion(ProjectId(1));
        assert_eq!(card_height(&project, &view), u16::MAX);

        let notes: Vec<String> = (0..65_530).map(|i| format!("note {}", i)).collect();
        let project = Project::new(1, "a", "b", 10).with_next_updates(notes);
        assert_eq!(card_height(&project, &view), u16::MAX);
    }

    #[test]
    fn test_render_expanded_card_with_many_notes() {
        let notes: Vec<String> = (0..65_530).map(|i| format!("note {}", i)).collect();
        let projects = Projects::new(
            "Big",
            "",
            vec![Project::new(1, "a", "b", 10).with_next_updates(notes)],
        );
        let mut app = DashboardApp::new(projects, ViewState::new());
        press(&mut app, KeyCode::Enter);
        let screen = draw(&app, 80, 30);
        assert!(screen.contains("note 0"));
    }

    #[test]
    fn test_first_visible_keeps_selected_on_screen() {
        let heights = [6, 6, 6, 6];
        assert_eq!(first_visible(&heights, 0, 12), 0);
        assert_eq!(first_visible(&heights, 1, 12), 0);
        assert_eq!(first_visible(&heights, 2, 12), 1);
        assert_eq!(first_visible(&heights, 3, 12), 2);
        assert_eq!(first_visible(&heights, 3, 100), 0);
    }

    #[test]
    fn test_first_visible_tall_card_starts_at_selected() {
        let heights = [6, 40];
        assert_eq!(first_visible(&heights, 1, 10), 1);
    }

    #[test]
    fn test_first_visible_empty() {
        assert_eq!(first_visible(&[], 0, 10), 0);
    }
}
