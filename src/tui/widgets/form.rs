//! Form widget: focus management and rendering of labelled text inputs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{ContactForm, FieldErrors, FormField};

/// Static description of a single input within a [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    /// The contact form field this input edits.
    pub field: FormField,
    /// Display label shown in the input's border.
    pub label: &'static str,
    /// Short hint rendered after the label.
    pub hint: &'static str,
    /// Placeholder shown while the input is empty and unfocused.
    pub placeholder: &'static str,
    /// Whether `Enter` inserts a newline instead of submitting.
    pub multiline: bool,
}

/// An ordered set of inputs with a single focused entry.
#[derive(Debug, Clone)]
pub struct Form {
    inputs: &'static [InputSpec],
    focus: usize,
}

impl Form {
    /// Creates a new form over `inputs`. Focus starts on the first input.
    pub fn new(inputs: &'static [InputSpec]) -> Self {
        Self { inputs, focus: 0 }
    }

    /// Returns the index of the currently focused input.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the focused input, if the form has any inputs.
    pub fn focused(&self) -> Option<&InputSpec> {
        self.inputs.get(self.focus)
    }

    /// Moves focus to the next input, wrapping around.
    pub fn focus_next(&mut self) {
        if self.inputs.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    /// Moves focus to the previous input, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.inputs.is_empty() {
            return;
        }
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Moves focus to the input editing `field`. No-op if the form lacks it.
    pub fn focus_field(&mut self, field: FormField) {
        if let Some(idx) = self.inputs.iter().position(|i| i.field == field) {
            self.focus = idx;
        }
    }

    /// Moves focus back to the first input.
    pub fn reset_focus(&mut self) {
        self.focus = 0;
    }

    /// Returns the inputs in display order.
    pub fn inputs(&self) -> &[InputSpec] {
        self.inputs
    }
}

fn input_lines<'a>(input: &InputSpec, value: &'a str, focused: bool) -> Vec<Line<'a>> {
    if value.is_empty() && !focused {
        return vec![Line::from(Span::styled(
            input.placeholder,
            Style::default().fg(Color::DarkGray),
        ))];
    }
    let mut lines: Vec<Line<'a>> = value.split('\n').map(Line::from).collect();
    if focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    lines
}

/// Renders `form` with the given values and errors within `area`.
///
/// Single-line inputs take three rows; multiline inputs share what is left.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(
    form: &Form,
    values: &ContactForm,
    errors: &FieldErrors,
    frame: &mut Frame,
    area: Rect,
) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .inputs
        .iter()
        .map(|input| {
            if input.multiline {
                Constraint::Min(row_height + 2)
            } else {
                Constraint::Length(row_height)
            }
        })
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, input) in form.inputs.iter().enumerate() {
        let is_focused = i == form.focus;
        let error = errors.field(input.field);

        let border_color = if error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let title = Line::from(vec![
            Span::raw(format!("{} *", input.label)),
            Span::styled(format!(" {}", input.hint), Style::default().fg(Color::DarkGray)),
        ]);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let lines = input_lines(input, values.get(input.field), is_focused);
        let mut paragraph = Paragraph::new(lines).block(block);
        if input.multiline {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        frame.render_widget(paragraph, rows[i]);

        // Error sits on the bottom border of its input
        if let Some(err) = error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + rows[i].height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
