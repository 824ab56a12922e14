//! Widget adapters: configured wrappers around ratatui's table and list,
//! plus a single-line text input.
//!
//! The state machine treats every widget as an opaque sub-model behind the
//! [`Widget`] trait: feed it a key, get back a [`Command`], ask it to draw.
//! Rendering never mutates the adapter; ratatui's stateful widgets are drawn
//! from a copy of their state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, HighlightSpacing, List, ListItem, ListState, Padding, Paragraph, Row, Table, TableState,
};

use crate::data::{COLUMNS, CityRow};

use super::state::Command;
use super::theme::{DOT, Theme};

// ============================================================================
// TRAIT
// ============================================================================

/// Which concrete widget sits behind a `dyn Widget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    List,
    Table,
    TextInput,
}

/// Capability shared by all widget adapters.
pub trait Widget {
    /// Handle one key press, returning any follow-up command.
    fn update(&mut self, key: KeyEvent) -> Command;

    /// Draw into `area`. Must not change what the widget shows next time.
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);

    fn kind(&self) -> WidgetKind;
}

fn ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

// ============================================================================
// TABLE
// ============================================================================

/// Visible body rows of the city table.
pub const TABLE_HEIGHT: usize = 7;

/// Scrollable, focusable view over the static city rows.
#[derive(Debug, Clone)]
pub struct CityTable {
    rows: &'static [CityRow],
    state: TableState,
    height: usize,
    focused: bool,
}

impl CityTable {
    /// Focused table with the first row highlighted.
    pub fn new(rows: &'static [CityRow], height: usize) -> Self {
        CityTable {
            rows,
            state: TableState::default().with_selected(Some(0)),
            height: height.max(1),
            focused: true,
        }
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Switch between focused and blurred.
    pub fn toggle_focus(&mut self) {
        self.focused = !self.focused;
    }

    /// Index of the highlighted row.
    pub fn cursor(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    /// First row inside the viewport.
    pub fn offset(&self) -> usize {
        self.state.offset()
    }

    /// The highlighted row, if the table has any rows.
    pub fn selected_row(&self) -> Option<&CityRow> {
        self.rows.get(self.cursor())
    }

    /// Height in terminal lines: body, header, and the two border lines.
    pub fn render_height(&self) -> u16 {
        (self.height + 3) as u16
    }

    fn move_by(&mut self, delta: isize) {
        let target = self.cursor().saturating_add_signed(delta);
        self.move_to(target);
    }

    fn move_to(&mut self, index: usize) {
        if self.rows.is_empty() {
            return;
        }
        let index = index.min(self.rows.len() - 1);
        let offset = self.state.offset();
        let offset = if index < offset {
            index
        } else if index >= offset + self.height {
            index + 1 - self.height
        } else {
            offset
        };
        self.state.select(Some(index));
        *self.state.offset_mut() = offset;
    }
}

impl Widget for CityTable {
    fn update(&mut self, key: KeyEvent) -> Command {
        if !self.focused {
            return Command::Noop;
        }
        let page = self.height as isize;
        let half = (self.height / 2).max(1) as isize;

        match key.code {
            KeyCode::Char('u') if ctrl(&key) => self.move_by(-half),
            KeyCode::Char('d') if ctrl(&key) => self.move_by(half),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::PageUp | KeyCode::Char('b') => self.move_by(-page),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => self.move_by(page),
            KeyCode::Home | KeyCode::Char('g') => self.move_to(0),
            KeyCode::End | KeyCode::Char('G') => self.move_to(usize::MAX),
            _ => {}
        }
        Command::Noop
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let header = Row::new(COLUMNS.iter().map(|c| c.title)).style(theme.table_header);
        let rows = self.rows.iter().map(|row| Row::new(row.cells()));
        let widths = COLUMNS.iter().map(|c| Constraint::Length(c.width));

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::bordered().border_style(theme.table_border))
            .row_highlight_style(theme.table_selected);

        let mut state = self.state.clone();
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Table
    }
}

// ============================================================================
// LIST
// ============================================================================

/// Total lines reserved for the list picker (title, items, help).
pub const LIST_HEIGHT: u16 = 14;

/// Numbered pick-one list with a title and a help footer.
#[derive(Debug, Clone)]
pub struct SubnetTypeList {
    title: &'static str,
    items: &'static [&'static str],
    state: ListState,
}

impl SubnetTypeList {
    /// List with the first item highlighted.
    pub fn new(title: &'static str, items: &'static [&'static str]) -> Self {
        let first = if items.is_empty() { None } else { Some(0) };
        SubnetTypeList {
            title,
            items,
            state: ListState::default().with_selected(first),
        }
    }

    /// Raw highlight index as reported by the underlying list state.
    pub fn index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Overwrite the highlight without bounds checking.
    pub fn select(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    /// Label under the highlight, or None when the highlight is missing or
    /// points past the items.
    pub fn selected_item(&self) -> Option<&'static str> {
        self.state.selected().and_then(|i| self.items.get(i).copied())
    }

    /// Items shown per page: total height minus title and help lines.
    fn per_page(&self) -> usize {
        usize::from(LIST_HEIGHT.saturating_sub(4)).max(1)
    }

    fn move_to(&mut self, index: usize) {
        if self.items.is_empty() {
            self.state.select(None);
            return;
        }
        self.state.select(Some(index.min(self.items.len() - 1)));
    }

    fn move_by(&mut self, delta: isize) {
        let current = self.state.selected().unwrap_or(0);
        self.move_to(current.saturating_add_signed(delta));
    }
}

impl Widget for SubnetTypeList {
    fn update(&mut self, key: KeyEvent) -> Command {
        let page = self.per_page() as isize;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => self.move_by(-page),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => self.move_by(page),
            KeyCode::Home | KeyCode::Char('g') => self.move_to(0),
            KeyCode::End | KeyCode::Char('G') => self.move_to(usize::MAX),
            _ => {}
        }
        Command::Noop
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // title + gap
            Constraint::Min(0),    // items
            Constraint::Length(1), // help
        ])
        .split(area);

        let title = Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", self.title), theme.title),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, label)| ListItem::new(format!("{}. {}", i + 1, label)).style(theme.list_item))
            .collect();
        let list = List::new(items)
            .block(Block::new().padding(Padding::left(2)))
            .highlight_symbol("> ")
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_style(theme.list_selected);
        let mut state = self.state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let help = Line::from(vec![
            Span::raw("    "),
            Span::styled("↑/k up", theme.list_help),
            Span::styled(DOT, theme.dot),
            Span::styled("↓/j down", theme.list_help),
            Span::styled(DOT, theme.dot),
            Span::styled("enter choose", theme.list_help),
            Span::styled(DOT, theme.dot),
            Span::styled("q quit", theme.list_help),
        ]);
        frame.render_widget(Paragraph::new(help), chunks[2]);
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::List
    }
}

// ============================================================================
// TEXT INPUT
// ============================================================================

/// Single-line text field with prompt, placeholder and a character limit.
///
/// Cursor positions count chars, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    prompt: String,
    placeholder: String,
    /// Maximum chars; 0 means unlimited.
    char_limit: usize,
    /// Visible width of the value in cells; 0 means unlimited.
    width: usize,
    focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    // --- Value access ---

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, truncated to the char limit, cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        self.value = if self.char_limit > 0 {
            value.chars().take(self.char_limit).collect()
        } else {
            value
        };
        self.cursor = self.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    // --- Editing ---

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, c: char) {
        if self.char_limit > 0 && self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        let (start, end) = (start.min(end), end.max(start));
        let from = self.byte_offset(start);
        let to = self.byte_offset(end);
        self.value.replace_range(from..to, "");
        self.cursor = start;
    }

    fn delete_char_back(&mut self) {
        if self.cursor > 0 {
            self.delete_range(self.cursor - 1, self.cursor);
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.len() {
            let cursor = self.cursor;
            self.delete_range(cursor, cursor + 1);
        }
    }

    fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.delete_range(start, self.cursor);
    }

    /// First visible char index so the cursor stays inside `width`.
    fn scroll_start(&self) -> usize {
        if self.width == 0 || self.cursor < self.width {
            0
        } else {
            self.cursor + 1 - self.width
        }
    }

    /// Prompt, visible text and cursor as styled spans.
    pub fn spans(&self, theme: &Theme) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(self.prompt.clone(), theme.prompt)];

        if self.value.is_empty() {
            if self.focused {
                let mut chars = self.placeholder.chars();
                let first = chars.next().map(String::from).unwrap_or_else(|| " ".into());
                spans.push(Span::styled(first, theme.cursor));
                spans.push(Span::styled(chars.collect::<String>(), theme.placeholder));
            } else {
                spans.push(Span::styled(self.placeholder.clone(), theme.placeholder));
            }
            return spans;
        }

        let start = self.scroll_start();
        let visible = if self.width == 0 { usize::MAX } else { self.width };
        let chars: Vec<char> = self.value.chars().skip(start).take(visible).collect();
        let cursor = self.cursor - start;

        if !self.focused {
            spans.push(Span::raw(chars.into_iter().collect::<String>()));
            return spans;
        }

        let before: String = chars.iter().take(cursor).collect();
        let at: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".into());
        let after: String = chars.iter().skip(cursor + 1).collect();
        spans.push(Span::raw(before));
        spans.push(Span::styled(at, theme.cursor));
        spans.push(Span::raw(after));
        spans
    }
}

impl Widget for TextInput {
    fn update(&mut self, key: KeyEvent) -> Command {
        if !self.focused {
            return Command::Noop;
        }
        if ctrl(&key) {
            match key.code {
                KeyCode::Char('a') => self.cursor = 0,
                KeyCode::Char('e') => self.cursor = self.len(),
                KeyCode::Char('b') => self.cursor = self.cursor.saturating_sub(1),
                KeyCode::Char('f') => self.cursor = (self.cursor + 1).min(self.len()),
                KeyCode::Char('h') => self.delete_char_back(),
                KeyCode::Char('d') => self.delete_char_forward(),
                KeyCode::Char('u') => self.delete_range(0, self.cursor),
                KeyCode::Char('k') => {
                    let cursor = self.cursor;
                    self.delete_range(cursor, self.len());
                }
                KeyCode::Char('w') => self.delete_word_back(),
                _ => {}
            }
            return Command::Noop;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char_back(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => {}
        }
        Command::Noop
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Paragraph::new(Line::from(self.spans(theme))), area);
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::TextInput
    }
}

// ============================================================================
// TESTS
// ============================================================================
