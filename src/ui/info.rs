//! Right-hand info block: identity line, live stats, color swatch.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::color_scheme::ColorScheme;
use crate::system::uptime;

/// Rows above the identity line.
const TOP_MARGIN: u16 = 5;
/// Icon column, relative to the start of the right half.
const ICON_INDENT: usize = 5;
/// Value column, relative to the start of the right half.
const VALUE_INDENT: usize = 10;

const ICON_OS: &str = "\u{f31a}";
const ICON_KERNEL: &str = "\u{f0aae}";
const ICON_UPTIME: &str = "\u{f017}";
const ICON_MEMORY: &str = "\u{f035b}";
const ICON_CLOCK: &str = "\u{f0954}";
const ICON_PALETTE: &str = "\u{e22b}";

/// Draw the field block anchored below `TOP_MARGIN` in the right half.
pub fn draw_info(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOP_MARGIN), Constraint::Min(0)])
        .split(area);

    let cs = &app.color_scheme;
    let d = &app.details;
    let indent = " ".repeat(ICON_INDENT);

    let mut lines = vec![
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                d.host_name.clone(),
                Style::default().fg(cs.host_text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" @ "),
            Span::styled(
                d.device_name.clone(),
                Style::default().fg(cs.device_text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::styled("---------------", Style::default().fg(cs.separator)),
        ]),
        Line::default(),
        field_line(ICON_OS, d.pretty_name.clone(), cs),
        field_line(
            ICON_KERNEL,
            format!("{} {}", d.kernel_name, d.kernel_release),
            cs,
        ),
        field_line(ICON_UPTIME, uptime::humanize(app.uptime_seconds), cs),
        field_line(ICON_MEMORY, app.memory.to_string(), cs),
        field_line(
            ICON_CLOCK,
            app.clock.format("%a %b %e %H:%M:%S %Y").to_string(),
            cs,
        ),
        swatch_line(cs),
    ];

    // Drop rows that no longer fit rather than letting the paragraph wrap.
    lines.truncate(rows[1].height as usize);

    f.render_widget(Paragraph::new(lines), rows[1]);
}

/// One `icon  value` row, with the value column at a fixed offset so rows
/// line up regardless of the icon's display width.
fn field_line(icon: &'static str, value: String, cs: &ColorScheme) -> Line<'static> {
    let gap = VALUE_INDENT.saturating_sub(ICON_INDENT + icon.width()).max(1);

    Line::from(vec![
        Span::raw(" ".repeat(ICON_INDENT)),
        Span::styled(
            icon,
            Style::default().fg(cs.icon).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(value, Style::default().fg(cs.field_value)),
    ])
}

/// The fixed eight-color swatch strip.
fn swatch_line(cs: &ColorScheme) -> Line<'static> {
    let gap = VALUE_INDENT
        .saturating_sub(ICON_INDENT + ICON_PALETTE.width())
        .max(1);

    let mut spans = vec![
        Span::raw(" ".repeat(ICON_INDENT)),
        Span::styled(
            ICON_PALETTE,
            Style::default().fg(cs.icon).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
    ];
    for color in cs.swatch {
        spans.push(Span::styled("████", Style::default().fg(color)));
    }
    Line::from(spans)
}
