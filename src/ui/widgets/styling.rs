use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the style filling the whole screen.
///
pub fn screen_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.background.to_color())
        .fg(theme.text.to_color())
}

/// Return the style for panels drawn over the screen background.
///
pub fn surface_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.surface.to_color())
        .fg(theme.text.to_color())
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for text inputs.
///
pub fn input_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.input.to_color())
        .fg(theme.text.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for a task row. Completed rows are struck through.
///
pub fn task_row_style(theme: &Theme, completed: bool) -> Style {
    if completed {
        Style::default()
            .bg(theme.completed_row.to_color())
            .fg(theme.completed_text.to_color())
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
            .bg(theme.pending_row.to_color())
            .fg(theme.row_text.to_color())
    }
}

/// Return the style for the highlighted task row.
///
pub fn selected_row_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.info.to_color())
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}
