use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::model::BookingDraft;
use crate::submit::{Outcome, Strategy, SubmitError};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{BookingFormState, HelpState, draw_booking_form, draw_help};
use super::widgets::{NoticeKind, StatusBarContext, draw_notice, draw_status_bar};

/// How often the event loop wakes to check on an in-flight submission.
const TICK: Duration = Duration::from_millis(100);

/// Returns `true` for Esc and Ctrl+C.
fn is_quit_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter and confirm an advance booking.
    BookingForm,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::BookingForm => "Booking Form",
            Self::Help => "Help",
        }
    }
}

/// Where the form is in its edit/submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// The operator is filling in the form.
    Editing,
    /// A submission is in flight; further submits are ignored.
    Submitting,
    /// The last submission succeeded with this message.
    Success(String),
    /// The last submission failed with this message.
    Failure(String),
}

type Pending = oneshot::Receiver<Result<Outcome, SubmitError>>;

/// Top-level application state.
pub struct App {
    screen: Screen,
    form: BookingFormState,
    help: HelpState,
    strategy: Strategy,
    runtime: Handle,
    state: SubmissionState,
    pending: Option<Pending>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the booking form, submitting with `strategy`.
    ///
    /// Submissions are spawned onto `runtime` so the UI keeps drawing while
    /// they run.
    pub fn new(strategy: Strategy, runtime: Handle) -> Self {
        Self {
            screen: Screen::BookingForm,
            form: BookingFormState::new(),
            help: HelpState::new(),
            strategy,
            runtime,
            state: SubmissionState::Editing,
            pending: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → collect finished submission → read event → dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.poll_submission();
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the status bar, the current screen, and any result notice.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::BookingForm => draw_booking_form(&self.form, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }
        draw_status_bar(&self.status_context(), frame, status_area);

        match &self.state {
            SubmissionState::Success(msg) => {
                draw_notice(NoticeKind::Success, msg, frame, frame.area());
            }
            SubmissionState::Failure(msg) => {
                draw_notice(NoticeKind::Failure, msg, frame, frame.area());
            }
            SubmissionState::Editing | SubmissionState::Submitting => {}
        }
    }

    fn status_context(&self) -> StatusBarContext {
        StatusBarContext {
            strategy: self.strategy.kind().to_string(),
            target: self.strategy.target(),
            submitting: self.state == SubmissionState::Submitting,
        }
    }

    /// Handles a key event: notice dismissal first, then global keys, then the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if matches!(
            self.state,
            SubmissionState::Success(_) | SubmissionState::Failure(_)
        ) {
            self.state = SubmissionState::Editing;
            return;
        }

        // The draft in flight stays on screen unchanged until its result arrives
        if self.state == SubmissionState::Submitting {
            if is_quit_key(key) {
                self.should_quit = true;
            }
            return;
        }

        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            self.apply_action(Action::Navigate(Screen::Help));
            return;
        }

        let action = match self.screen {
            Screen::BookingForm => self.form.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply_action(action);
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(Screen::Help) => {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(draft) => self.start_submission(draft),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Spawns a submission of `draft`, unless one is already in flight.
    fn start_submission(&mut self, draft: BookingDraft) {
        if self.state == SubmissionState::Submitting {
            log::debug!("submission already in flight, ignoring");
            return;
        }

        log::info!(
            "submitting booking for {} via {}",
            draft.customer_name,
            self.strategy.kind()
        );
        let (tx, rx) = oneshot::channel();
        let strategy = self.strategy.clone();
        self.runtime.spawn(async move {
            let result = strategy.submit(&draft).await;
            // The receiver is gone only if the app already quit.
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        self.state = SubmissionState::Submitting;
    }

    /// Collects the result of an in-flight submission if it has finished.
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.finish(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.pending = None;
                self.finish(Err(SubmitError::Transport(
                    "submission was interrupted".to_string(),
                )));
            }
        }
    }

    /// Applies a finished submission's result to the form and notice.
    fn finish(&mut self, result: Result<Outcome, SubmitError>) {
        match result {
            Ok(outcome) => {
                log::info!("booking submitted: {}", outcome.message);
                if outcome.reset_draft {
                    self.form.reset_draft();
                }
                self.state = SubmissionState::Success(outcome.message);
            }
            Err(err) => {
                log::warn!("booking submission failed: {err}");
                self.state = SubmissionState::Failure(err.to_string());
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the submission state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Returns the booking form state.
    pub fn form(&self) -> &BookingFormState {
        &self.form
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
