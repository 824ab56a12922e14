//! TUI styling, built once at startup.
//!
//! `Theme` is plain data: constructed in `main`, borrowed by every renderer,
//! never mutated afterwards.
//!
//! Color semantics:
//! - Green: the menu cursor and input labels
//! - Blue: keywords in the task blurbs
//! - Gray shades: help text, separators, borders
//! - Purple/yellow: highlighted table row

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

const GREEN: Color = Color::Rgb(0x00, 0x99, 0x00);
const DARK_GRAY: Color = Color::Rgb(0x76, 0x76, 0x76);
const KEYWORD_BLUE: Color = Color::Rgb(0x00, 0x5c, 0xe6);
const LABEL_BG: Color = Color::Rgb(0xa0, 0x95, 0x95);

/// Separator placed between help entries.
pub const DOT: &str = " • ";

// ============================================================================
// THEME
// ============================================================================

/// All styles used by the renderers and widget adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Highlighted words inside task descriptions.
    pub keyword: Style,
    /// Help line text.
    pub subtle: Style,
    /// Checked menu entry.
    pub checkbox: Style,
    /// Help separator dot.
    pub dot: Style,
    /// Screen titles (menu header, list title).
    pub title: Style,
    /// Labels in front of the input fields.
    pub input_label: Style,
    /// The "Continue ->" hint.
    pub continue_hint: Style,
    /// Border around the table.
    pub table_border: Style,
    /// Table header row.
    pub table_header: Style,
    /// Highlighted table row.
    pub table_selected: Style,
    /// Unhighlighted list entries.
    pub list_item: Style,
    /// Highlighted list entry.
    pub list_selected: Style,
    /// Pagination dots and help under the list.
    pub list_help: Style,
    /// Placeholder text in empty inputs.
    pub placeholder: Style,
    /// Prompt prefix of an input.
    pub prompt: Style,
    /// Cell under the input cursor.
    pub cursor: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            keyword: Style::new().fg(KEYWORD_BLUE),
            subtle: Style::new().fg(Color::Indexed(241)),
            checkbox: Style::new().fg(GREEN),
            dot: Style::new().fg(Color::Indexed(236)),
            title: Style::new().fg(Color::White).bg(GREEN),
            input_label: Style::new().fg(GREEN).bg(LABEL_BG),
            continue_hint: Style::new().fg(DARK_GRAY),
            table_border: Style::new().fg(Color::Indexed(240)),
            table_header: Style::new().add_modifier(Modifier::UNDERLINED),
            table_selected: Style::new().fg(Color::Indexed(229)).bg(Color::Indexed(57)),
            list_item: Style::new(),
            list_selected: Style::new().fg(Color::Indexed(170)),
            list_help: Style::new().fg(Color::Indexed(241)),
            placeholder: Style::new().fg(Color::Indexed(240)),
            prompt: Style::new(),
            cursor: Style::new().add_modifier(Modifier::REVERSED),
        }
    }
}

impl Theme {
    /// Theme without colors, for `--no-color` and dumb terminals.
    ///
    /// Keeps modifiers so the cursor and highlights stay visible.
    pub fn monochrome() -> Self {
        let plain = Style::new();
        let strong = Style::new().add_modifier(Modifier::BOLD);
        let reversed = Style::new().add_modifier(Modifier::REVERSED);
        Theme {
            keyword: strong,
            subtle: plain,
            checkbox: strong,
            dot: plain,
            title: strong,
            input_label: strong,
            continue_hint: plain,
            table_border: plain,
            table_header: Style::new().add_modifier(Modifier::UNDERLINED),
            table_selected: reversed,
            list_item: plain,
            list_selected: strong,
            list_help: plain,
            placeholder: Style::new().add_modifier(Modifier::DIM),
            prompt: plain,
            cursor: reversed,
        }
    }

    /// Pick the colored or monochrome theme.
    pub fn for_color(color: bool) -> Self {
        if color { Theme::default() } else { Theme::monochrome() }
    }
}

// ============================================================================
// TESTS
// ============================================================================
