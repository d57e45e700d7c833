pub mod info;
pub mod logo;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;

/// Render the complete UI: logo on the left half, info block on the right.
/// The split is re-derived from the frame size on every draw, which is all
/// the resize handling this layout needs.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);

    logo::draw_logo(f, app, halves[0]);
    info::draw_info(f, app, halves[1]);
}
