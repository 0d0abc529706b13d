//! Board renderer thread.
//!
//! Owns the terminal and the pure UI state (focus, selection). Receives
//! complete screen snapshots from the handler and sends semantic actions
//! back; it never touches the session or the network. Key events that only
//! move focus or selection stay local, everything else goes up as an
//! `Action`.

mod ui;

use crate::presentation::view_models::BoardScreenViewModel;
use anyhow::Result;
use crewdir_runtime::{Action, FormField};
use crewdir_types::EmployeeId;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

/// Handler-to-renderer protocol: full snapshots, last one wins.
pub enum BoardEvent {
    Update(Box<BoardScreenViewModel>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Cards,
    Search,
    Form(FormField),
}

struct UiState {
    focus: Focus,
    selected: usize,
    screen: Option<BoardScreenViewModel>,
}

impl UiState {
    fn new() -> Self {
        Self {
            focus: Focus::Cards,
            selected: 0,
            screen: None,
        }
    }

    fn card_count(&self) -> usize {
        self.screen
            .as_ref()
            .map(|s| s.directory.cards.len())
            .unwrap_or(0)
    }

    fn selected_card_id(&self) -> Option<EmployeeId> {
        let screen = self.screen.as_ref()?;
        let last = screen.directory.cards.len().checked_sub(1)?;
        let index = self.selected.min(last);
        Some(EmployeeId::from(screen.directory.cards[index].id.as_str()))
    }

    fn select_next(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn confirm_active(&self) -> bool {
        self.screen.as_ref().is_some_and(|s| s.confirm.is_some())
    }

    fn cancel_visible(&self) -> bool {
        self.screen
            .as_ref()
            .is_some_and(|s| s.form.cancel_visible)
    }

    fn next_focus(&self) -> Focus {
        match self.focus {
            Focus::Cards => Focus::Search,
            Focus::Search => Focus::Form(FormField::Id),
            Focus::Form(FormField::Id) => Focus::Form(FormField::Name),
            Focus::Form(FormField::Name) => Focus::Form(FormField::Role),
            Focus::Form(FormField::Role) => Focus::Form(FormField::Email),
            Focus::Form(FormField::Email) => Focus::Form(FormField::Department),
            Focus::Form(FormField::Department) => Focus::Cards,
        }
    }

    /// Map a key event to a semantic action, or handle it locally.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // The confirm modal swallows everything except its own answers.
        if self.confirm_active() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmDelete),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Action::DeclineDelete)
                }
                _ => None,
            };
        }

        if key.code == KeyCode::Tab {
            self.focus = self.next_focus();
            return None;
        }

        match self.focus {
            Focus::Cards => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('j') | KeyCode::Down => {
                    self.select_next();
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.select_previous();
                    None
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    self.selected_card_id().map(Action::StartEdit)
                }
                KeyCode::Char('d') => self.selected_card_id().map(Action::RequestDelete),
                KeyCode::Char('r') => Some(Action::Refresh),
                KeyCode::Char('f') => Some(Action::CycleDepartment),
                KeyCode::Char('c') => Some(Action::ClearFilters),
                KeyCode::Char('/') => {
                    self.focus = Focus::Search;
                    None
                }
                _ => None,
            },
            Focus::Search => match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.focus = Focus::Cards;
                    None
                }
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Char(c) => Some(Action::SearchInput(c)),
                _ => None,
            },
            Focus::Form(field) => match key.code {
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Esc => {
                    if self.cancel_visible() {
                        Some(Action::Cancel)
                    } else {
                        self.focus = Focus::Cards;
                        None
                    }
                }
                KeyCode::Backspace => Some(Action::FieldBackspace(field)),
                KeyCode::Char(c) => Some(Action::FieldInput(field, c)),
                _ => None,
            },
        }
    }
}

pub struct BoardRenderer;

impl BoardRenderer {
    /// Run the terminal loop until quit or until the handler goes away.
    pub fn run(rx: Receiver<BoardEvent>, actions: Sender<Action>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut ui = UiState::new();
        let poll_timeout = Duration::from_millis(100);

        'main: loop {
            // Drain snapshots; only the newest matters.
            loop {
                match rx.try_recv() {
                    Ok(BoardEvent::Update(screen)) => ui.screen = Some(*screen),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => break 'main,
                }
            }

            terminal.draw(|f| ui::draw(f, &mut ui))?;

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(action) = ui.handle_key(key) {
                        let is_quit = action == Action::Quit;
                        if actions.send(action).is_err() || is_quit {
                            break 'main;
                        }
                    }
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_board_view_model;
    use crewdir_client::RemoteStore;
    use crewdir_runtime::DirectorySession;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ui_with_session(session: &DirectorySession) -> UiState {
        let mut ui = UiState::new();
        ui.screen = Some(build_board_view_model(session));
        ui
    }

    #[test]
    fn test_quit_only_from_cards_focus() {
        let session = DirectorySession::new(RemoteStore::new("http://localhost:8080"));
        let mut ui = ui_with_session(&session);

        assert_eq!(ui.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));

        ui.focus = Focus::Search;
        assert_eq!(
            ui.handle_key(key(KeyCode::Char('q'))),
            Some(Action::SearchInput('q'))
        );
    }

    #[test]
    fn test_confirm_modal_swallows_other_keys() {
        let mut session = DirectorySession::new(RemoteStore::new("http://localhost:8080"));
        session.request_delete("1".into());
        let mut ui = ui_with_session(&session);

        assert_eq!(ui.handle_key(key(KeyCode::Char('q'))), None);
        assert_eq!(
            ui.handle_key(key(KeyCode::Char('y'))),
            Some(Action::ConfirmDelete)
        );
        assert_eq!(
            ui.handle_key(key(KeyCode::Esc)),
            Some(Action::DeclineDelete)
        );
    }

    #[test]
    fn test_tab_cycles_through_form_fields_back_to_cards() {
        let session = DirectorySession::new(RemoteStore::new("http://localhost:8080"));
        let mut ui = ui_with_session(&session);

        let mut seen = vec![ui.focus];
        for _ in 0..7 {
            ui.handle_key(key(KeyCode::Tab));
            seen.push(ui.focus);
        }

        assert_eq!(seen.first(), Some(&Focus::Cards));
        assert!(seen.contains(&Focus::Search));
        assert!(seen.contains(&Focus::Form(FormField::Department)));
        assert_eq!(seen.last(), Some(&Focus::Cards));
    }

    #[test]
    fn test_form_enter_submits_and_chars_route_to_focused_field() {
        let session = DirectorySession::new(RemoteStore::new("http://localhost:8080"));
        let mut ui = ui_with_session(&session);
        ui.focus = Focus::Form(FormField::Name);

        assert_eq!(
            ui.handle_key(key(KeyCode::Char('A'))),
            Some(Action::FieldInput(FormField::Name, 'A'))
        );
        assert_eq!(
            ui.handle_key(key(KeyCode::Backspace)),
            Some(Action::FieldBackspace(FormField::Name))
        );
        assert_eq!(ui.handle_key(key(KeyCode::Enter)), Some(Action::Submit));
    }

    #[test]
    fn test_selection_stays_in_bounds_without_cards() {
        let session = DirectorySession::new(RemoteStore::new("http://localhost:8080"));
        let mut ui = ui_with_session(&session);

        ui.handle_key(key(KeyCode::Down));
        assert_eq!(ui.selected, 0);
        assert_eq!(ui.selected_card_id(), None);
        // Edit/delete on an empty list produce no action
        assert_eq!(ui.handle_key(key(KeyCode::Char('e'))), None);
        assert_eq!(ui.handle_key(key(KeyCode::Char('d'))), None);
    }
}
