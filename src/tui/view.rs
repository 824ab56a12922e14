//! Pure rendering: map the model to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches on main-menu mode and the current menu choice. Nothing here
//! mutates the model; stateful widgets draw from copies of their state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::state::{FIELD_ADDRESS, FIELD_DESCRIPTION, FIELD_TYPE, Model, TABLE_CHOICE, ViewState};
use super::theme::{DOT, Theme};
use super::widgets::{LIST_HEIGHT, Widget};

/// Shown once the user quits.
pub const FAREWELL: &str = "Follow the white rabbit";

/// Labels of the main menu entries, in choice order.
pub const MENU_LABELS: [&str; 4] = [
    "Search",
    "View Table (Subnets future)",
    "Read something",
    "See friends",
];

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(model: &Model, theme: &Theme, frame: &mut Frame) {
    // One blank line above, two below.
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .split(frame.area());
    let area = chunks[1];

    if model.quitting {
        let text = Paragraph::new(Line::from(format!("  {}", FAREWELL)));
        frame.render_widget(text, area);
        return;
    }

    if model.main_menu {
        frame.render_widget(Paragraph::new(main_menu_lines(model.choice, theme)), area);
        return;
    }

    match model.choice {
        0 => render_blurb(blurb_search(theme), frame, area),
        TABLE_CHOICE => render_table_flow(model, theme, frame, area),
        2 => render_blurb(blurb_reading(theme), frame, area),
        _ => render_blurb(blurb_friends(theme), frame, area),
    }
}

// ============================================================================
// SCREEN: MAIN MENU
// ============================================================================

fn main_menu_lines(choice: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled(" What to do today? ", theme.title),
        ]),
        Line::from(""),
    ];

    for (i, label) in MENU_LABELS.iter().enumerate() {
        lines.push(checkbox(label, i == choice, theme));
    }

    lines.push(Line::from(""));
    lines.push(help_line(
        &["j/k, up/down: select", "enter: choose", "q: quit", "esc: go back"],
        theme,
    ));
    lines
}

fn checkbox(label: &str, checked: bool, theme: &Theme) -> Line<'static> {
    if checked {
        Line::from(Span::styled(format!("[x] {}", label), theme.checkbox))
    } else {
        Line::from(format!("[ ] {}", label))
    }
}

fn help_line(entries: &[&str], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(DOT, theme.dot));
        }
        spans.push(Span::styled(entry.to_string(), theme.subtle));
    }
    Line::from(spans)
}

// ============================================================================
// SCREENS: STATIC BLURBS
// ============================================================================

fn render_blurb(lines: Vec<Line<'static>>, frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn blurb_search(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from("Carrot planting?"),
        Line::from(""),
        Line::from(vec![
            Span::raw("Cool, we'll need "),
            Span::styled("libgarden", theme.keyword),
            Span::raw(" and "),
            Span::styled("vegeutils", theme.keyword),
            Span::raw("..."),
        ]),
    ]
}

fn blurb_reading(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from("Reading time?"),
        Line::from(""),
        Line::from(vec![
            Span::raw("Okay, cool, then we’ll need a library. Yes, an "),
            Span::styled("actual library", theme.keyword),
            Span::raw("."),
        ]),
    ]
}

fn blurb_friends(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from("It’s always good to see friends."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Fetching "),
            Span::styled("social-skills", theme.keyword),
            Span::raw(" and "),
            Span::styled("conversationutils", theme.keyword),
            Span::raw("..."),
        ]),
    ]
}

// ============================================================================
// SCREENS: TABLE FLOW
// ============================================================================

fn render_table_flow(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    match model.state {
        ViewState::SubnetTable => render_table(model, theme, frame, area),
        ViewState::EditValue => render_form(model, theme, frame, area),
        ViewState::PickSubnetType => render_picker(model, theme, frame, area),
        // Reachable through esc from the table; nothing to show.
        ViewState::MainMenu | ViewState::Search => {}
    }
}

fn render_table(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(model.table.render_height()),
        Constraint::Length(1), // gap
        Constraint::Length(1), // summary
        Constraint::Min(0),
    ])
    .split(area);

    model.table.render(frame, chunks[0], theme);
    frame.render_widget(Paragraph::new(table_summary(model)), chunks[2]);
}

/// Line under the table: where the highlighted row leads once committed.
pub fn table_summary(model: &Model) -> String {
    match (model.selected, model.table.selected_row()) {
        (true, Some(row)) => format!("Lets go to {}", row.city),
        _ => "Not Selected".to_string(),
    }
}

fn render_form(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // address
        Constraint::Length(1), // description
        Constraint::Length(1), // type
        Constraint::Length(1), // continue
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(Paragraph::new("Edit IP Address"), rows[0]);

    let fields = [
        (FIELD_ADDRESS, "Ip Address:"),
        (FIELD_DESCRIPTION, "Description:"),
        (FIELD_TYPE, "Type:"),
    ];
    for (row, (field, label)) in rows[1..4].iter().zip(fields) {
        let cols = Layout::horizontal([Constraint::Length(label.len() as u16), Constraint::Min(0)])
            .split(*row);
        frame.render_widget(Paragraph::new(Span::styled(label, theme.input_label)), cols[0]);
        model.inputs[field].render(frame, cols[1], theme);
    }

    frame.render_widget(
        Paragraph::new(Span::styled("Continue ->", theme.continue_hint)),
        rows[4],
    );
}

fn render_picker(model: &Model, theme: &Theme, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // gap
        Constraint::Length(LIST_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);
    model.list.render(frame, chunks[1], theme);
}

// ============================================================================
// TESTS
// ============================================================================
