use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

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

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for placeholders and hints.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default().fg(theme.banner.to_color())
}

/// Return the style of the submit button, highlighted when focused.
///
pub fn button_style(theme: &Theme, focused: bool) -> Style {
    let style = Style::default()
        .fg(theme.button_fg.to_color())
        .bg(theme.button_bg.to_color())
        .add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Return the border style of a notification, by severity.
///
pub fn notification_border_style(theme: &Theme, is_error: bool) -> Style {
    let color = if is_error {
        theme.error.to_color()
    } else {
        theme.success.to_color()
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
