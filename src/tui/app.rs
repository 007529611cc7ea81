use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client::{SubmitError, Submitter};
use crate::model::ContactForm;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ContactState, HelpState, draw_contact, draw_help};
use super::widgets::{StatusBarContext, SubmitIndicator, draw_status_bar, endpoint_host};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Landing page with the contact form.
    Contact,
    /// Show keybinding help.
    Help,
}

type SubmitResult = Result<Value, SubmitError>;

/// Top-level application state.
pub struct App<S> {
    screen: Screen,
    contact: ContactState,
    help: HelpState,
    submitter: S,
    host: String,
    pending: Option<ContactForm>,
    should_quit: bool,
}

impl<S> App<S>
where
    S: Submitter + Clone + Send + Sync + 'static,
{
    /// Creates a new `App` on the [`Screen::Contact`] screen.
    ///
    /// `endpoint` is only used for display; `submitter` does the delivery.
    pub fn new(submitter: S, endpoint: &str) -> Self {
        Self {
            screen: Screen::Contact,
            contact: ContactState::new(),
            help: HelpState::new(),
            submitter,
            host: endpoint_host(endpoint),
            pending: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → wait for a key or a submission result → dispatch.
    ///
    /// Submissions run on their own task so the UI keeps redrawing while a
    /// request is in flight. A result that arrives after quitting is dropped.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut events = EventStream::new();
        let (results_tx, mut results_rx) = mpsc::unbounded_channel::<SubmitResult>();

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.should_quit = true,
                },
                Some(result) = results_rx.recv() => self.finish_submission(result),
            }

            if let Some(payload) = self.take_pending_submission() {
                let submitter = self.submitter.clone();
                let tx = results_tx.clone();
                tokio::spawn(async move {
                    let result = submitter.submit(&payload).await;
                    if tx.send(result).is_err() {
                        debug!("submission finished after shutdown; result dropped");
                    }
                });
            }
        }
        Ok(())
    }

    /// Renders the current screen with the status bar underneath.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Contact => draw_contact(&self.contact, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        draw_status_bar(&self.status_context(), frame, status_area);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Contact => self.contact.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(payload) => {
                info!(host = %self.host, "contact form queued for delivery");
                self.pending = Some(payload);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Takes the payload of a submission that has been started but not yet sent.
    pub fn take_pending_submission(&mut self) -> Option<ContactForm> {
        self.pending.take()
    }

    /// Applies the outcome of a delivered submission to the contact form.
    pub fn finish_submission(&mut self, result: SubmitResult) {
        self.contact.finish_submit(result);
    }

    /// Builds the status bar context from the current state.
    pub fn status_context(&self) -> StatusBarContext {
        StatusBarContext {
            host: self.host.clone(),
            indicator: SubmitIndicator::from_controller(self.contact.controller()),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact screen state.
    pub fn contact(&self) -> &ContactState {
        &self.contact
    }

    /// Returns the submitter used for delivery.
    pub fn submitter(&self) -> &S {
        &self.submitter
    }
}
