use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ascii;

/// Left indent of the logo column.
const LOGO_INDENT: u16 = 10;

/// Draw the ASCII logo down the left half of the screen.
pub fn draw_logo(f: &mut Frame, app: &App, area: Rect) {
    let indent = LOGO_INDENT.min(area.width);
    let inner = Rect {
        x: area.x + indent,
        y: area.y,
        width: area.width - indent,
        height: area.height,
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let style = Style::default().fg(app.color_scheme.logo);
    let lines: Vec<Line> = ascii::LINUX_LOGO
        .iter()
        .map(|row| Line::styled(*row, style))
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
