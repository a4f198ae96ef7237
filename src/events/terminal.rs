use crate::state::{Focus, State, TaskFilter};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> Result<Event<KeyEvent>> {
        Ok(self.rx.recv()?)
    }
}

/// Handle a terminal event accordingly. Returns true if should continue or
/// false if exit was requested.
///
pub fn handle(event: Event<KeyEvent>, state: &mut State) -> bool {
    match event {
        Event::Input(key) => handle_key(key, state),
        Event::Tick => {
            state.advance_spinner_index();
            true
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.is_editing() {
        edit_key(key, state);
        return true;
    }

    match state.current_focus() {
        Focus::Draft => {
            draft_key(key, state);
            true
        }
        Focus::Tasks => tasks_key(key, state),
    }
}

fn edit_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Char(c) => state.add_edit_char(c),
        KeyCode::Backspace => state.remove_edit_char(),
        KeyCode::Enter => {
            if let Err(e) = state.save_edit() {
                warn!("Cannot save edit: {}", e);
            }
        }
        KeyCode::Esc => {
            debug!("Processing cancel edit event '{:?}'...", key);
            state.cancel_edit();
        }
        _ => (),
    }
}

fn draft_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Char(c) => state.add_draft_char(c),
        KeyCode::Backspace => state.remove_draft_char(),
        KeyCode::Enter => {
            state.submit_draft();
        }
        KeyCode::Esc | KeyCode::Tab => state.focus_tasks(),
        _ => (),
    }
}

fn tasks_key(key: KeyEvent, state: &mut State) -> bool {
    let result = match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_task();
            Ok(())
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_task();
            Ok(())
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            state.focus_draft();
            Ok(())
        }
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => state.toggle_selected(),
        KeyCode::Char('e') => state.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => state.remove_selected(),
        KeyCode::Char('f') => {
            state.next_filter();
            Ok(())
        }
        KeyCode::Char('1') => {
            state.set_filter(TaskFilter::All);
            Ok(())
        }
        KeyCode::Char('2') => {
            state.set_filter(TaskFilter::Completed);
            Ok(())
        }
        KeyCode::Char('3') => {
            state.set_filter(TaskFilter::Pending);
            Ok(())
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
            Ok(())
        }
        KeyCode::Char('r') => {
            state.refresh();
            Ok(())
        }
        _ => Ok(()),
    };
    if let Err(e) = result {
        warn!("Skipping '{:?}': {}", key.code, e);
    }
    true
}
