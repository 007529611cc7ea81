//! Contact screen: the landing page with its embedded contact form.

use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use serde_json::Value;

use crate::client::SubmitError;
use crate::controller::ContactController;
use crate::model::{FormField, MESSAGE_MAX};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, InputSpec, draw_form};

static CONTACT_INPUTS: &[InputSpec] = &[
    InputSpec {
        field: FormField::Name,
        label: "Name",
        hint: "\u{2014} who are you?",
        placeholder: "Your full name",
        multiline: false,
    },
    InputSpec {
        field: FormField::Email,
        label: "Email",
        hint: "\u{2014} where we can reply",
        placeholder: "you@example.com",
        multiline: false,
    },
    InputSpec {
        field: FormField::Phone,
        label: "Phone",
        hint: "For urgent matters",
        placeholder: "123456789",
        multiline: false,
    },
    InputSpec {
        field: FormField::Message,
        label: "Message",
        hint: "",
        placeholder: "Message to EZ Labs",
        multiline: true,
    },
];

const SUBTITLE: &str = "We are looking to hire a front-end intern with demonstrated ability to \
    show initiative, be capable of taking ownership, have intellectual curiosity and good \
    problem-solving skills.";

const ABOUT: &str = "A minimal responsive landing page created for the Front\u{2011}End intern \
    assignment. Use the contact form to send us a short message \u{2014} we\u{2019}ll reply as \
    soon as we can.";

/// State for the contact screen.
#[derive(Debug, Clone)]
pub struct ContactState {
    controller: ContactController,
    form: Form,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactState {
    /// Creates a contact screen with an empty form, focused on the name input.
    pub fn new() -> Self {
        Self {
            controller: ContactController::new(),
            form: Form::new(CONTACT_INPUTS),
        }
    }

    /// Returns the form controller.
    pub fn controller(&self) -> &ContactController {
        &self.controller
    }

    /// Returns the focus state for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the field that currently has focus.
    pub fn focused_field(&self) -> FormField {
        self.form.focused().map_or(FormField::Name, |s| s.field)
    }

    /// Applies the outcome of a submission started from this screen.
    pub fn finish_submit(&mut self, result: Result<Value, SubmitError>) {
        self.controller.finish_submit(result);
    }

    /// Clears the form, errors and success banner, and refocuses the first input.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.form.reset_focus();
    }

    fn insert_char(&mut self, ch: char) {
        let field = self.focused_field();
        let mut value = self.controller.form().get(field).to_string();
        value.push(ch);
        self.controller.update_field(field, value);
    }

    fn delete_char(&mut self) {
        let field = self.focused_field();
        let mut value = self.controller.form().get(field).to_string();
        if value.pop().is_some() {
            self.controller.update_field(field, value);
        }
    }

    fn submit(&mut self) -> Action {
        match self.controller.begin_submit() {
            Some(payload) => Action::Submit(payload),
            None => {
                if let Some(first) = self.controller.errors().fields().next() {
                    self.form.focus_field(first);
                }
                Action::None
            }
        }
    }
}

impl ScreenState for ContactState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Exact match: AltGr arrives as Ctrl+Alt on some platforms and must still type
        if key.modifiers == KeyModifiers::CONTROL {
            return match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => {
                    self.reset();
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Enter => {
                if self.form.focused().is_some_and(|s| s.multiline) {
                    self.insert_char('\n');
                    Action::None
                } else {
                    self.submit()
                }
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}

fn message_help_line(controller: &ContactController) -> Line<'_> {
    match controller.errors().field(FormField::Message) {
        Some(err) => Line::from(Span::styled(err, Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            format!("Max {MESSAGE_MAX} characters"),
            Style::default().fg(Color::DarkGray),
        )),
    }
}

fn actions_line(controller: &ContactController) -> Line<'static> {
    let submit = if controller.in_progress() {
        Span::styled(
            "[ Sending\u{2026} ]",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            "[ Send message ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        submit,
        Span::raw("  "),
        Span::styled("[ Reset ]", Style::default().fg(Color::Gray)),
    ])
}

fn aside_lines() -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let strong = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled("Email us directly at ", muted),
            Span::styled("hello@ezlabs", strong),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Call us at "),
            Span::styled("+91 (555) 444-3333", strong),
            Span::raw("."),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Office hours: ", muted),
            Span::styled("Mon\u{2013}Fri, 9am\u{2013}5pm", strong),
        ]),
    ]
}

/// Renders the landing page and contact form.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_contact(state: &ContactState, frame: &mut Frame, area: Rect) {
    let controller = state.controller();
    let cyan = Style::default().fg(Color::Cyan);
    let muted = Style::default().fg(Color::DarkGray);

    let block = Block::default()
        .title(" EZ Labs ")
        .borders(Borders::ALL)
        .border_style(cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [hero_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "EZ Labs",
            cyan.add_modifier(Modifier::BOLD),
        )),
        Line::from(SUBTITLE),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, hero_area);

    let [main_area, aside_area] =
        Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)])
            .areas(body_area);

    let [about_area, card_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(main_area);

    let about = Paragraph::new(vec![
        Line::from(Span::styled("About", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(ABOUT),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(about, about_area);

    let card = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(cyan);
    let card_inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    let [
        intro_area,
        form_area,
        help_area,
        submit_err_area,
        actions_area,
        success_area,
        keys_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(14),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(card_inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Share a few details and we\u{2019}ll follow up quickly.",
            muted,
        )),
        intro_area,
    );

    draw_form(
        state.form(),
        controller.form(),
        controller.errors(),
        frame,
        form_area,
    );

    let [help_left, counter_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(9)]).areas(help_area);
    frame.render_widget(Paragraph::new(message_help_line(controller)), help_left);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{}/{MESSAGE_MAX}", controller.message_len()),
            muted,
        ))
        .right_aligned(),
        counter_area,
    );

    if let Some(err) = controller.errors().submit() {
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
            submit_err_area,
        );
    }

    frame.render_widget(Paragraph::new(actions_line(controller)), actions_area);

    if let Some(msg) = controller.success() {
        frame.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(Color::Green))),
            success_area,
        );
    }

    frame.render_widget(
        Paragraph::new("Tab/Shift+Tab: field  Enter/Ctrl+S: send  Ctrl+R: reset  F1: help  Esc: quit")
            .style(muted),
        keys_area,
    );

    let aside = Paragraph::new(aside_lines())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Need help? ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(aside, aside_area);

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            "\u{a9} {} EZ \u{2014} Front\u{2011}End Intern Assignment",
            Local::now().year()
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(footer, footer_area);
}
