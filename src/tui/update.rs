//! State transitions: (Model, key) → Command.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Global keys are checked first, then the key goes to the main menu or to
//! the handler of the current screen, which forwards it to its widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::BackMode;
use crate::error::AppError;

use super::state::{Command, FIELD_COUNT, FIELD_TYPE, MENU_LEN, Model, TABLE_CHOICE, ViewState};
use super::widgets::Widget;

// ============================================================================
// GLOBAL KEYS
// ============================================================================

/// Keys that mean the same thing on every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKey {
    /// `q` or ctrl+c.
    Quit,
    /// `esc`.
    Back,
}

/// Map a key to its global meaning, if it has one.
pub fn global_key(key: &KeyEvent) -> Option<GlobalKey> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GlobalKey::Quit);
    }
    match key.code {
        KeyCode::Char('q') if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Some(GlobalKey::Quit)
        }
        KeyCode::Esc => Some(GlobalKey::Back),
        _ => None,
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Apply one key press to the model.
///
/// Once the model is quitting this is a no-op that keeps returning `Quit`.
pub fn update(model: &mut Model, key: KeyEvent) -> Command {
    if model.quitting {
        return Command::Quit;
    }

    match global_key(&key) {
        Some(GlobalKey::Quit) => {
            tracing::info!(state = ?model.state, "quit requested");
            model.quitting = true;
            return Command::Quit;
        }
        Some(GlobalKey::Back) => {
            let from = model.state;
            model.go_back();
            tracing::debug!(?from, to = ?model.state, "back");
            // History mode consumes esc; decrement mode lets the screen we
            // landed on see it too.
            if model.back_mode == BackMode::History {
                return Command::Noop;
            }
        }
        None => {}
    }

    let command = if model.main_menu {
        update_main_menu(model, key)
    } else {
        update_tasks(model, key)
    };

    if command == Command::Quit {
        model.quitting = true;
    }
    command
}

// ============================================================================
// MAIN MENU
// ============================================================================

/// Cursor movement over the menu entries, enter commits.
fn update_main_menu(model: &mut Model, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            model.choice = (model.choice + 1).min(MENU_LEN - 1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            model.choice = model.choice.saturating_sub(1);
        }
        KeyCode::Enter => {
            let next = ViewState::from_index(model.choice + 1).unwrap_or(ViewState::MainMenu);
            model.main_menu = false;
            model.enter_state(next);
            tracing::debug!(choice = model.choice, state = ?next, "menu entry chosen");
        }
        _ => {}
    }
    Command::Noop
}

// ============================================================================
// TASK SCREENS
// ============================================================================

/// Route a key to the handler of the current screen. Only the table entry
/// of the menu has interactive screens.
fn update_tasks(model: &mut Model, key: KeyEvent) -> Command {
    if model.choice != TABLE_CHOICE {
        return Command::Noop;
    }
    match model.state {
        ViewState::SubnetTable => update_table(model, key),
        ViewState::EditValue => update_inputs(model, key),
        ViewState::PickSubnetType => update_list(model, key),
        ViewState::MainMenu | ViewState::Search => Command::Noop,
    }
}

/// Hand the key to the widget of the current screen.
fn forward(model: &mut Model, key: KeyEvent) -> Command {
    match model.active_widget_mut() {
        Some(widget) => {
            tracing::trace!(widget = ?widget.kind(), code = ?key.code, "key forwarded");
            widget.update(key)
        }
        None => Command::Noop,
    }
}

/// Table: the widget scrolls, `p` toggles focus, enter commits the row.
fn update_table(model: &mut Model, key: KeyEvent) -> Command {
    let command = forward(model, key);
    match key.code {
        KeyCode::Char('p') => {
            model.table.toggle_focus();
            command
        }
        KeyCode::Enter => {
            model.selected = true;
            model.enter_state(ViewState::EditValue);
            if let Some(row) = model.table.selected_row() {
                tracing::debug!(city = row.city, "row selected");
            }
            Command::Noop
        }
        _ => command,
    }
}

/// Form: tab cycling, enter on the last field opens the type picker, then
/// the key reaches the focused input. The type field always shows the
/// picked label, so edits to it do not stick.
pub(crate) fn update_inputs(model: &mut Model, key: KeyEvent) -> Command {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => {
            if model.focused == FIELD_COUNT - 1 {
                model.enter_state(ViewState::PickSubnetType);
            }
            model.next_input();
        }
        KeyCode::Esc => return Command::Quit,
        KeyCode::Char('c') if ctrl => return Command::Quit,
        KeyCode::BackTab => model.prev_input(),
        KeyCode::Char('p') if ctrl => model.prev_input(),
        KeyCode::Tab => model.next_input(),
        KeyCode::Char('n') if ctrl => model.next_input(),
        _ => {}
    }
    model.apply_focus();

    let command = forward(model, key);
    let picked = model.subnet_type.clone();
    model.inputs[FIELD_TYPE].set_value(&picked);
    command
}

/// Type picker: the list moves, enter writes the label back to the form.
fn update_list(model: &mut Model, key: KeyEvent) -> Command {
    let command = forward(model, key);
    if key.code != KeyCode::Enter {
        return command;
    }

    match model.list.selected_item() {
        Some(label) => {
            tracing::debug!(label, "subnet type picked");
            model.commit_subnet_type(label);
            model.return_to(ViewState::EditValue);
            Command::Noop
        }
        None => {
            let err = AppError::SelectionLost {
                index: model.list.index(),
            };
            tracing::error!(%err, "type picker lost its selection");
            model.error = Some(err);
            Command::Quit
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::{FIELD_ADDRESS, FIELD_DESCRIPTION};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn press(model: &mut Model, codes: &[KeyCode]) {
        for code in codes {
            update(model, key(*code));
        }
    }

    /// Model on the form screen of the table flow, address field focused.
    fn editing() -> Model {
        let mut model = Model::default();
        press(&mut model, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(model.state, ViewState::EditValue);
        model
    }

    // -- Global keys --

    #[test]
    fn global_key_mapping() {
        assert_eq!(global_key(&ctrl('c')), Some(GlobalKey::Quit));
        assert_eq!(global_key(&key(KeyCode::Char('q'))), Some(GlobalKey::Quit));
        assert_eq!(global_key(&key(KeyCode::Esc)), Some(GlobalKey::Back));
        assert_eq!(global_key(&key(KeyCode::Char('c'))), None);
        assert_eq!(global_key(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn q_with_modifiers_does_not_quit() {
        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(global_key(&alt_q), None);
        assert_eq!(global_key(&ctrl('q')), None);

        let mut model = Model::default();
        assert_eq!(update(&mut model, alt_q), Command::Noop);
        assert!(!model.quitting);
    }

    #[test]
    fn quit_from_every_state() {
        for state in ViewState::ALL {
            for quit in [key(KeyCode::Char('q')), ctrl('c')] {
                let mut model = Model::default();
                model.choice = TABLE_CHOICE;
                model.main_menu = state == ViewState::MainMenu;
                model.state = state;

                assert_eq!(update(&mut model, quit), Command::Quit);
                assert!(model.quitting);
                assert_eq!(model.state, state);
            }
        }
    }

    #[test]
    fn no_mutation_after_quit() {
        let mut model = Model::default();
        update(&mut model, key(KeyCode::Char('q')));
        assert_eq!(update(&mut model, key(KeyCode::Down)), Command::Quit);
        assert_eq!(update(&mut model, key(KeyCode::Enter)), Command::Quit);
        assert_eq!(model.choice, 0);
        assert!(model.main_menu);
        assert_eq!(model.state, ViewState::MainMenu);
    }

    // -- Main menu --

    #[test]
    fn menu_cursor_stays_in_bounds() {
        let mut model = Model::default();
        let sequence = [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char('j'),
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char('k'),
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Up,
        ];
        for code in sequence {
            update(&mut model, key(code));
            assert!(model.choice < MENU_LEN);
        }
        assert_eq!(model.choice, 0);

        press(&mut model, &[KeyCode::Down; 10]);
        assert_eq!(model.choice, MENU_LEN - 1);
    }

    #[test]
    fn enter_moves_to_choice_plus_one() {
        for choice in 0..MENU_LEN {
            let mut model = Model::default();
            model.choice = choice;
            update(&mut model, key(KeyCode::Enter));
            assert!(!model.main_menu);
            assert_eq!(model.state.index(), choice + 1);
        }
    }

    #[test]
    fn search_then_escape_returns_to_menu() {
        let mut model = Model::default();
        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::Search);
        assert!(!model.main_menu);

        update(&mut model, key(KeyCode::Esc));
        assert_eq!(model.state, ViewState::MainMenu);
        assert!(model.main_menu);
    }

    #[test]
    fn escape_on_menu_stays_on_menu() {
        let mut model = Model::default();
        assert_eq!(update(&mut model, key(KeyCode::Esc)), Command::Noop);
        assert_eq!(model.state, ViewState::MainMenu);
        assert!(model.main_menu);
    }

    // -- Table --

    #[test]
    fn enter_on_row_selects_and_opens_form() {
        let mut model = Model::default();
        press(&mut model, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(model.state, ViewState::SubnetTable);

        press(&mut model, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert!(model.selected);
        assert_eq!(model.state, ViewState::EditValue);
        assert_eq!(model.table.selected_row().map(|r| r.city), Some("Shanghai"));
    }

    #[test]
    fn p_toggles_table_focus() {
        let mut model = Model::default();
        press(&mut model, &[KeyCode::Down, KeyCode::Enter, KeyCode::Char('p')]);
        assert!(!model.table.focused());
        update(&mut model, key(KeyCode::Down));
        assert_eq!(model.table.cursor(), 0);
        update(&mut model, key(KeyCode::Char('p')));
        assert!(model.table.focused());
    }

    #[test]
    fn other_choices_ignore_keys() {
        let mut model = Model::default();
        model.choice = 3;
        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::PickSubnetType);
        press(&mut model, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(model.state, ViewState::PickSubnetType);
        assert_eq!(model.subnet_type, "Normal");
    }

    // -- Form --

    #[test]
    fn tab_cycles_through_all_fields() {
        let mut model = editing();
        let mut seen = vec![model.focused];
        for _ in 0..FIELD_COUNT {
            update(&mut model, key(KeyCode::Tab));
            seen.push(model.focused);
        }
        assert_eq!(seen, vec![FIELD_ADDRESS, FIELD_DESCRIPTION, FIELD_TYPE, FIELD_ADDRESS]);
        assert!(model.inputs[FIELD_ADDRESS].focused());
        assert!(!model.inputs[FIELD_TYPE].focused());
    }

    #[test]
    fn shift_tab_wraps_backwards() {
        let mut model = editing();
        update(&mut model, key(KeyCode::BackTab));
        assert_eq!(model.focused, FIELD_TYPE);
        update(&mut model, ctrl('p'));
        assert_eq!(model.focused, FIELD_DESCRIPTION);
        update(&mut model, ctrl('n'));
        assert_eq!(model.focused, FIELD_TYPE);
    }

    #[test]
    fn typing_goes_to_focused_field_only() {
        let mut model = editing();
        press(&mut model, &[KeyCode::Char('1'), KeyCode::Char('7')]);
        update(&mut model, key(KeyCode::Tab));
        press(&mut model, &[KeyCode::Char('s'), KeyCode::Char('w')]);
        assert_eq!(model.inputs[FIELD_ADDRESS].value(), "17");
        assert_eq!(model.inputs[FIELD_DESCRIPTION].value(), "sw");
        assert_eq!(model.inputs[FIELD_TYPE].value(), "Normal");
    }

    #[test]
    fn type_field_ignores_typing() {
        let mut model = editing();
        update(&mut model, key(KeyCode::BackTab));
        assert_eq!(model.focused, FIELD_TYPE);

        press(
            &mut model,
            &[KeyCode::Char('x'), KeyCode::Char('y'), KeyCode::Backspace],
        );
        assert_eq!(model.subnet_type, "Normal");
        assert_eq!(model.inputs[FIELD_TYPE].value(), model.subnet_type);
    }

    #[test]
    fn enter_on_last_field_opens_picker() {
        let mut model = editing();
        update(&mut model, key(KeyCode::Enter));
        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::EditValue);
        assert_eq!(model.focused, FIELD_TYPE);

        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::PickSubnetType);
        assert_eq!(model.focused, FIELD_ADDRESS);
    }

    #[test]
    fn form_handler_quits_on_escape() {
        let mut model = editing();
        assert_eq!(update_inputs(&mut model, key(KeyCode::Esc)), Command::Quit);
    }

    // -- Picker --

    #[test]
    fn picking_gateway_sets_type_field() {
        let mut model = editing();
        model.focused = FIELD_TYPE;
        model.apply_focus();
        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::PickSubnetType);

        press(&mut model, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(model.state, ViewState::EditValue);
        assert_eq!(model.subnet_type, "Gateway");
        assert_eq!(model.inputs[FIELD_TYPE].value(), "Gateway");
    }

    #[test]
    fn lost_selection_is_fatal() {
        let mut model = editing();
        model.state = ViewState::PickSubnetType;
        model.list.select(Some(42));

        assert_eq!(update(&mut model, key(KeyCode::Enter)), Command::Quit);
        assert!(model.quitting);
        assert!(matches!(
            model.error,
            Some(AppError::SelectionLost { index: Some(42) })
        ));
    }

    // -- Back navigation --

    #[test]
    fn escape_from_picker_quits_in_decrement_mode() {
        // Decrement lands on the form, which treats the same esc as quit.
        let mut model = editing();
        model.state = ViewState::PickSubnetType;
        assert_eq!(update(&mut model, key(KeyCode::Esc)), Command::Quit);
        assert_eq!(model.state, ViewState::EditValue);
        assert!(model.quitting);
    }

    #[test]
    fn escape_from_form_lands_on_table() {
        let mut model = editing();
        assert_eq!(update(&mut model, key(KeyCode::Esc)), Command::Noop);
        assert_eq!(model.state, ViewState::SubnetTable);
        assert!(!model.main_menu);
    }

    #[test]
    fn decrement_skips_through_unvisited_screens() {
        let mut model = Model::default();
        model.choice = 3;
        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::PickSubnetType);

        let mut path = Vec::new();
        for _ in 0..4 {
            update(&mut model, key(KeyCode::Esc));
            path.push(model.state);
        }
        assert_eq!(
            path,
            vec![
                ViewState::EditValue,
                ViewState::SubnetTable,
                ViewState::Search,
                ViewState::MainMenu,
            ]
        );
        assert!(model.main_menu);
    }

    #[test]
    fn history_mode_walks_back_through_visited_screens() {
        let mut model = Model::new(BackMode::History);
        press(&mut model, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter]);
        model.focused = FIELD_TYPE;
        model.apply_focus();
        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::PickSubnetType);

        assert_eq!(update(&mut model, key(KeyCode::Esc)), Command::Noop);
        assert_eq!(model.state, ViewState::EditValue);
        update(&mut model, key(KeyCode::Esc));
        assert_eq!(model.state, ViewState::SubnetTable);
        update(&mut model, key(KeyCode::Esc));
        assert_eq!(model.state, ViewState::MainMenu);
        assert!(model.main_menu);
        assert!(!model.quitting);
    }

    #[test]
    fn history_mode_menu_entry_three_goes_straight_back() {
        let mut model = Model::new(BackMode::History);
        model.choice = 3;
        update(&mut model, key(KeyCode::Enter));
        update(&mut model, key(KeyCode::Esc));
        assert_eq!(model.state, ViewState::MainMenu);
        assert!(model.main_menu);
    }

    #[test]
    fn history_mode_picker_commit_does_not_grow_history() {
        let mut model = Model::new(BackMode::History);
        press(&mut model, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter]);
        let depth = model.history.len();
        model.focused = FIELD_TYPE;
        model.apply_focus();
        update(&mut model, key(KeyCode::Enter));
        update(&mut model, key(KeyCode::Enter));
        assert_eq!(model.state, ViewState::EditValue);
        assert_eq!(model.history.len(), depth);
    }
}
