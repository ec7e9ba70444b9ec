//! Status bar widget: persistent one-line calorie totals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::CalorieSummary;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Calorie totals over all activities.
    pub summary: CalorieSummary,
    /// Number of recorded activities.
    pub activity_count: usize,
}

/// Renders a one-line status bar.
///
/// Display format: `Consumed 700  Burned 300  Net 400  (3 activities)`.
/// Net is green when at or below zero, yellow otherwise.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);
    let net_style = if ctx.summary.net <= 0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let noun = if ctx.activity_count == 1 {
        "activity"
    } else {
        "activities"
    };

    let spans = vec![
        Span::styled(format!("Consumed {}", ctx.summary.consumed), cyan),
        Span::raw("  "),
        Span::styled(format!("Burned {}", ctx.summary.burned), cyan),
        Span::raw("  "),
        Span::styled(format!("Net {}", ctx.summary.net), net_style),
        Span::styled(format!("  ({} {noun})", ctx.activity_count), dim),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_totals() {
        let ctx = StatusBarContext {
            summary: CalorieSummary {
                consumed: 700,
                burned: 300,
                net: 400,
            },
            activity_count: 3,
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("Consumed 700"));
        assert!(output.contains("Burned 300"));
        assert!(output.contains("Net 400"));
        assert!(output.contains("(3 activities)"));
    }

    #[test]
    fn renders_negative_net() {
        let ctx = StatusBarContext {
            summary: CalorieSummary {
                consumed: 0,
                burned: 250,
                net: -250,
            },
            activity_count: 1,
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("Net -250"));
        assert!(output.contains("(1 activity)"));
    }

    #[test]
    fn renders_empty() {
        let output = render_status_bar(&StatusBarContext::default(), 60);
        assert!(output.contains("Consumed 0"));
        assert!(output.contains("(0 activities)"));
    }
}
