use crate::state::State;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return a paragraph showing the current spinner frame, vertically
/// centered in an area of the given height.
///
pub fn widget<'a>(state: &State, theme: &Theme, height: u16) -> Paragraph<'a> {
    let frame = FRAMES[state.get_spinner_index() % FRAMES.len()];
    let padding = (height.saturating_sub(2) / 2) as usize;
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(
        format!("{} Loading tasks...", frame),
        super::styling::muted_text_style(theme),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}
