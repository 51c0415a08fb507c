//! Picker REPL
//!
//! Reads lines with rustyline, turns them into [`PickerCommand`]s and hands
//! them to the controller. Events are rendered while a command is still
//! running, so every animation frame of a draw reaches the terminal as it
//! happens.

use crate::config::ReplConfig;
use crate::repl::presenter::ReplPresenter;
use colored::Colorize;
use picker_application::{CommandAction, PickerCommand, PickerController, UiEvent};
use rustyline::{DefaultEditor, Result as RlResult};
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tracing::debug;

const PROMPT: &str = "names> ";

/// Interactive picker session
pub struct PickerRepl {
    controller: PickerController,
    rx: mpsc::UnboundedReceiver<UiEvent>,
    presenter: ReplPresenter,
    config: ReplConfig,
}

impl PickerRepl {
    pub fn new(
        controller: PickerController,
        rx: mpsc::UnboundedReceiver<UiEvent>,
        presenter: ReplPresenter,
    ) -> Self {
        Self {
            controller,
            rx,
            presenter,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn controller(&self) -> &PickerController {
        &self.controller
    }

    /// Run the REPL until `/quit` or end of input
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.controller.send_welcome();
        self.drain();

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if self.handle_line(line).await == CommandAction::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C (type /quit to exit)".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    println!("{} {:?}", "Error:".red().bold(), err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Parse one input line and execute it
    pub async fn handle_line(&mut self, line: &str) -> CommandAction {
        match line.parse::<PickerCommand>() {
            Ok(command) => self.execute(command).await,
            Err(e) => {
                debug!("Unparseable input {:?}: {}", line, e);
                self.presenter.render(&UiEvent::CommandError {
                    message: e.to_string(),
                });
                CommandAction::Continue
            }
        }
    }

    /// Execute a command, rendering its events as they arrive
    pub async fn execute(&mut self, command: PickerCommand) -> CommandAction {
        let Self {
            controller,
            rx,
            presenter,
            ..
        } = self;

        let dispatch = controller.dispatch(command);
        tokio::pin!(dispatch);

        let action = loop {
            tokio::select! {
                action = &mut dispatch => break action,
                Some(event) = rx.recv() => presenter.render(&event),
            }
        };

        while let Ok(event) = rx.try_recv() {
            presenter.render(&event);
        }
        action
    }

    /// Render every event already queued
    fn drain(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.presenter.render(&event);
        }
    }
}
