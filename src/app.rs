//! Application state and core logic

use crate::config::DemoConfig;
use crate::state::{AppState, Field, Slot, SubmitOutcome};
use crate::submission::{Completion, DelayedSubmission};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Event poll interval for the UI loop
    pub tick_rate: Duration,
    /// Whether the app should quit
    quit: bool,
    /// Outstanding delayed submissions keyed by panel index
    pending: HashMap<usize, DelayedSubmission>,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &DemoConfig) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config.form_settings()),
            tick_rate: config.tick_rate(),
            quit: false,
            pending: HashMap::new(),
            completions_tx,
            completions_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[allow(dead_code)]
    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The acknowledgement dialog is modal
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('r') if ctrl => self.remount(),
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.type_char(c)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => self.handle_enter(),
            _ => {}
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let panel_count = self.state.panels.len();
        let previous = self.state.focus;
        self.state.focus = if forward {
            previous.next(panel_count)
        } else {
            previous.prev(panel_count)
        };

        // Leaving an input is a blur on that input
        if let Some(field) = previous.slot.field() {
            if let Some(panel) = self.state.panels.get_mut(previous.panel) {
                panel.blur(field);
            }
        }
    }

    fn type_char(&mut self, c: char) {
        let Some(field) = self.state.focus.slot.field() else {
            return;
        };
        if let Some(panel) = self.state.focused_panel_mut() {
            panel.type_char(field, c);
        }
    }

    fn backspace(&mut self) {
        let Some(field) = self.state.focus.slot.field() else {
            return;
        };
        if let Some(panel) = self.state.focused_panel_mut() {
            panel.backspace(field);
        }
    }

    fn handle_enter(&mut self) {
        let focus = self.state.focus;
        let Some(panel) = self.state.panels.get(focus.panel) else {
            return;
        };
        let submits = match focus.slot {
            Slot::Submit => true,
            Slot::Input(_) => panel.kind().submits_on_enter(),
        };
        if submits {
            self.submit(focus.panel);
        }
    }

    /// Submit the form in panel `index`
    pub fn submit(&mut self, index: usize) {
        let generation = self.state.generation;
        let Some(panel) = self.state.panels.get_mut(index) else {
            return;
        };
        let variant = panel.kind();

        match panel.submit() {
            SubmitOutcome::Accepted(ack) => {
                tracing::info!("{variant:?} form accepted");
                self.state.push_alert(ack);
            }
            SubmitOutcome::Rejected => {
                let failing: Vec<_> = Field::ALL
                    .into_iter()
                    .filter(|f| panel.visible_error(*f).is_some())
                    .map(|f| f.name())
                    .collect();
                tracing::info!("{variant:?} form rejected: {failing:?}");
            }
            SubmitOutcome::Deferred { values, delay } => {
                tracing::debug!("{variant:?} form completes in {delay:?}");
                let completion = Completion {
                    panel: index,
                    variant,
                    generation,
                    values,
                };
                let task =
                    DelayedSubmission::spawn(delay, completion, self.completions_tx.clone());
                self.pending.insert(index, task);
            }
            SubmitOutcome::Ignored => {
                tracing::debug!("{variant:?} submit ignored while submitting");
            }
        }
    }

    /// Drain completions that arrived since the last call
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.complete(completion);
        }
    }

    /// Wait for the next completion and apply it. Returns false on timeout.
    #[allow(dead_code)]
    pub async fn wait_for_completion(&mut self, timeout: Duration) -> bool {
        match tokio::time::timeout(timeout, self.completions_rx.recv()).await {
            Ok(Some(completion)) => {
                self.complete(completion);
                true
            }
            _ => false,
        }
    }

    fn complete(&mut self, completion: Completion) {
        if completion.generation != self.state.generation {
            tracing::warn!(
                "discarding {:?} completion from generation {}",
                completion.variant,
                completion.generation
            );
            return;
        }
        self.pending.remove(&completion.panel);

        let Some(panel) = self.state.panels.get_mut(completion.panel) else {
            return;
        };
        tracing::debug!("{:?} form submission completed", completion.variant);
        if let Some(ack) = panel.finish_submission(completion.values) {
            self.state.push_alert(ack);
        }
    }

    /// Remount every form, as a page refresh would
    pub fn remount(&mut self) {
        for (index, task) in self.pending.drain() {
            tracing::debug!("cancelling pending submission for panel {index}");
            task.cancel();
        }
        self.state.remount();
        tracing::info!("remounted forms (generation {})", self.state.generation);
    }

    /// Commit one render pass across all panels. Returns how many rendered.
    pub fn render_pass(&mut self) -> usize {
        let rendered = self
            .state
            .panels
            .iter_mut()
            .map(|panel| panel.render_pass())
            .filter(|rendered| *rendered)
            .count();
        if rendered > 0 {
            tracing::trace!("render pass: {rendered} panel(s)");
        }
        rendered
    }
}
