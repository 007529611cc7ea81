//! Status bar widget: one-line endpoint and submission state display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::controller::ContactController;

/// Outcome shown on the right of the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitIndicator {
    /// Nothing sent yet, or the form was reset.
    #[default]
    Ready,
    /// A request is in flight.
    Sending,
    /// The last request succeeded.
    Sent,
    /// The last request failed.
    Failed,
}

impl SubmitIndicator {
    /// Derives the indicator from controller state.
    pub fn from_controller(controller: &ContactController) -> Self {
        if controller.in_progress() {
            Self::Sending
        } else if controller.success().is_some() {
            Self::Sent
        } else if controller.errors().submit().is_some() {
            Self::Failed
        } else {
            Self::Ready
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Sending => "Sending\u{2026}",
            Self::Sent => "Sent",
            Self::Failed => "Failed",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Ready => Color::Cyan,
            Self::Sending => Color::Yellow,
            Self::Sent => Color::Green,
            Self::Failed => Color::Red,
        }
    }
}

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Host of the collection endpoint.
    pub host: String,
    /// Current submission indicator.
    pub indicator: SubmitIndicator,
}

/// Extracts the host from `endpoint`, falling back to the raw string.
pub fn endpoint_host(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| endpoint.to_string())
}

/// Renders a one-line status bar.
///
/// Display format: `→ vernanbackend.ezlab.in  Ready`, with the state colored.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let spans = vec![
        Span::styled("\u{2192} ", dim),
        Span::styled(ctx.host.clone(), dim),
        Span::raw("  "),
        Span::styled(
            ctx.indicator.label(),
            Style::default().fg(ctx.indicator.color()),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
