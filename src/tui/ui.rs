use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, editor_area, hint_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(
        app.remap_enabled,
        app.status_message.clone(),
        app.opened_at.format("%H:%M").to_string(),
    );
    title_bar.render(frame, title_area);

    // Note surface
    tui.editor.render(frame, editor_area);

    // Key hint footer
    let hints = Span::styled(
        "Ctrl+T toggle remap · Ctrl+C quit",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    );
    frame.render_widget(hints, hint_area);
}
