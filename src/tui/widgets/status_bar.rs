//! Status bar widget: one-line display of where confirmed bookings go.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Strategy name, e.g. `local` or `remote`.
    pub strategy: String,
    /// Receipt path or endpoint URL.
    pub target: String,
    /// Whether a submission is in flight.
    pub submitting: bool,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - Idle:       `[local] /home/desk/booking-confirmation.pdf`
/// - In flight:  `[remote] http://host/api/bookings  Submitting...` (Submitting in Yellow)
///
/// Renders nothing if `ctx.strategy` is empty.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.strategy.is_empty() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans = vec![
        Span::styled(format!("[{}] ", ctx.strategy), cyan),
        Span::styled(ctx.target.clone(), cyan),
    ];
    if ctx.submitting {
        spans.push(Span::styled("  Submitting...", yellow));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
