//! TUI state: the model record, the screen enumeration, follow-up commands.
//!
//! Everything the renderers read and the transition function writes lives in
//! [`Model`]. Widget adapters are owned here as opaque sub-models.
//!
//! Design principle: `ViewState` is an ordered enumeration. Its order is
//! observable: the default back navigation steps it down by one.

use crate::config::BackMode;
use crate::data::{CITY_ROWS, DEFAULT_SUBNET_TYPE, SUBNET_TYPES};
use crate::error::AppError;

use super::widgets::{CityTable, SubnetTypeList, TABLE_HEIGHT, TextInput, Widget};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Entries on the main menu.
pub const MENU_LEN: usize = 4;

/// Menu entry that leads into the table / form / picker flow.
pub const TABLE_CHOICE: usize = 1;

/// Input field indices, in focus order.
pub const FIELD_ADDRESS: usize = 0;
pub const FIELD_DESCRIPTION: usize = 1;
pub const FIELD_TYPE: usize = 2;

/// Number of input fields.
pub const FIELD_COUNT: usize = 3;

// ============================================================================
// COMMANDS
// ============================================================================

/// Follow-up work returned by an update, interpreted by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Nothing to do; redraw and wait for the next event.
    #[default]
    Noop,
    /// Stop the event loop.
    Quit,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current screen, in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ViewState {
    #[default]
    MainMenu,
    Search,
    SubnetTable,
    EditValue,
    PickSubnetType,
}

impl ViewState {
    /// All screens in enumeration order.
    pub const ALL: [ViewState; 5] = [
        ViewState::MainMenu,
        ViewState::Search,
        ViewState::SubnetTable,
        ViewState::EditValue,
        ViewState::PickSubnetType,
    ];

    /// Position in the enumeration.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One step down the enumeration, stopping at `MainMenu`.
    pub fn decrement(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(ViewState::MainMenu)
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// The single mutable root of the application.
#[derive(Debug)]
pub struct Model {
    /// Menu cursor, 0..MENU_LEN.
    pub choice: usize,
    /// True while the main menu handles input.
    pub main_menu: bool,
    pub state: ViewState,
    /// Set once on the way out; nothing mutates the model afterwards.
    pub quitting: bool,
    pub table: CityTable,
    /// A table row has been committed with enter.
    pub selected: bool,
    /// Address, description, type.
    pub inputs: [TextInput; FIELD_COUNT],
    /// Index of the focused input.
    pub focused: usize,
    pub list: SubnetTypeList,
    /// Last type picked from the list.
    pub subnet_type: String,
    /// Fatal error that ended the session.
    pub error: Option<AppError>,
    pub back_mode: BackMode,
    /// Screens to return to, most recent last. Only used in history mode.
    pub history: Vec<ViewState>,
}

impl Default for Model {
    fn default() -> Self {
        Model::new(BackMode::default())
    }
}

impl Model {
    /// Fresh model on the main menu with the address field focused.
    pub fn new(back_mode: BackMode) -> Self {
        let mut model = Model {
            choice: 0,
            main_menu: true,
            state: ViewState::MainMenu,
            quitting: false,
            table: CityTable::new(&CITY_ROWS, TABLE_HEIGHT),
            selected: false,
            inputs: build_inputs(),
            focused: FIELD_ADDRESS,
            list: SubnetTypeList::new("Type:", &SUBNET_TYPES),
            subnet_type: DEFAULT_SUBNET_TYPE.to_string(),
            error: None,
            back_mode,
            history: Vec::new(),
        };
        model.inputs[FIELD_TYPE].set_value(DEFAULT_SUBNET_TYPE);
        model.apply_focus();
        model
    }

    // --- Focus ---

    /// Blur every input, then focus the one at `focused`.
    pub fn apply_focus(&mut self) {
        for input in &mut self.inputs {
            input.blur();
        }
        self.inputs[self.focused].focus();
    }

    /// Move focus to the next field, wrapping to the first.
    pub fn next_input(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    /// Move focus to the previous field, wrapping to the last.
    pub fn prev_input(&mut self) {
        self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    // --- Navigation ---

    /// Switch to `next`, remembering the current screen in history mode.
    pub fn enter_state(&mut self, next: ViewState) {
        if self.back_mode == BackMode::History {
            self.history.push(self.state);
        }
        self.state = next;
    }

    /// Return to `target` as the completion of a sub-flow. In history mode
    /// the entry pushed when the sub-flow started is dropped.
    pub fn return_to(&mut self, target: ViewState) {
        if self.history.last() == Some(&target) {
            self.history.pop();
        }
        self.state = target;
    }

    /// Handle `esc`. Re-enters main-menu mode when it lands on `MainMenu`.
    pub fn go_back(&mut self) {
        self.state = match self.back_mode {
            BackMode::Decrement => self.state.decrement(),
            BackMode::History => self.history.pop().unwrap_or(ViewState::MainMenu),
        };
        if self.state == ViewState::MainMenu {
            self.main_menu = true;
            self.history.clear();
        }
    }

    /// Write a picked label into the model and the type field.
    pub fn commit_subnet_type(&mut self, label: &str) {
        self.subnet_type = label.to_string();
        self.inputs[FIELD_TYPE].set_value(label);
    }

    /// The widget that receives unhandled keys on the current screen.
    ///
    /// Only the table flow has interactive widgets; other menu entries show
    /// static text.
    pub fn active_widget_mut(&mut self) -> Option<&mut dyn Widget> {
        if self.main_menu || self.choice != TABLE_CHOICE {
            return None;
        }
        match self.state {
            ViewState::SubnetTable => Some(&mut self.table),
            ViewState::EditValue => Some(&mut self.inputs[self.focused]),
            ViewState::PickSubnetType => Some(&mut self.list),
            ViewState::MainMenu | ViewState::Search => None,
        }
    }
}

/// The three form fields with their fixed prompts, placeholders and limits.
fn build_inputs() -> [TextInput; FIELD_COUNT] {
    [
        TextInput::new()
            .with_placeholder("IP")
            .with_char_limit(20)
            .with_width(30)
            .with_prompt("10.25.66."),
        TextInput::new()
            .with_placeholder("FS Switch ")
            .with_char_limit(50)
            .with_width(50),
        TextInput::new().with_char_limit(10).with_width(10),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
