use crate::ui::app::{App, FocusPane, InputMode, Modal};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Side effects the event loop performs after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    SendMail,
    CopySummary,
}

/// Apply one key press to the app state.
///
/// Modals take priority, then text input, then the focused pane.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    if let Some(modal) = app.modal.clone() {
        handle_modal_key(app, modal, key.code);
        return Action::None;
    }

    if app.mode != InputMode::Normal {
        handle_input_key(app, key);
        return Action::None;
    }

    match app.focus {
        FocusPane::Summary => handle_summary_key(app, key.code),
        FocusPane::Form => handle_form_key(app, key.code),
    }
}

fn handle_modal_key(app: &mut App, modal: Modal, code: KeyCode) {
    match modal {
        Modal::ConfirmDelete { .. } => match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.dismiss_modal(),
            _ => {}
        },
        Modal::Alert(_) => {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.dismiss_modal();
            }
        }
        Modal::Help => {
            if matches!(code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
                app.dismiss_modal();
            }
        }
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Ctrl+S saves straight from the task editor
        KeyCode::Char('s') if has_ctrl && app.mode == InputMode::EditingTask => {
            app.commit_input();
            app.save_selected();
        }
        KeyCode::Char(_) if has_ctrl => {}
        KeyCode::Char(c) => app.input_char(c),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Enter => app.commit_input(),
        KeyCode::Esc => app.cancel_input(),
        _ => {}
    }
}

fn handle_summary_key(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.focus = FocusPane::Form,
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.next_assigned(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_assigned(),
        KeyCode::PageDown | KeyCode::Char('J') => app.scroll_summary_down(),
        KeyCode::PageUp | KeyCode::Char('K') => app.scroll_summary_up(),
        KeyCode::Char('e') => app.edit_assigned(),
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_assigned(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('m') => return Action::SendMail,
        KeyCode::Char('y') => return Action::CopySummary,
        _ => {}
    }
    Action::None
}

fn handle_form_key(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_member(false),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_member(true),
        KeyCode::Enter | KeyCode::Char('i') => app.begin_task_edit(),
        KeyCode::Char('s') => app.save_selected(),
        KeyCode::Char('e') => app.reopen_selected(),
        KeyCode::Char('a') => app.add_entry(),
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('[') => app.shift_date(false),
        KeyCode::Char(']') => app.shift_date(true),
        KeyCode::Char('t') => app.set_date_today(),
        KeyCode::Char('D') => app.begin_date_edit(),
        KeyCode::Char('m') => return Action::SendMail,
        KeyCode::Char('y') => return Action::CopySummary,
        _ => {}
    }
    Action::None
}
