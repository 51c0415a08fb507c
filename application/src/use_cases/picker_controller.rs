//! Picker Controller
//!
//! Owns the name pool, the question note and the draw state machine.
//! Applies user commands, mirrors state into storage after every mutation,
//! and emits UiEvent messages to a channel for the presentation layer.

use crate::commands::PickerCommand;
use crate::config::PickerConfig;
use crate::persistence::PickerStorage;
use crate::ports::confirmation::{AutoDecline, ConfirmationPort};
use crate::ports::event_logger::{EventLogger, NoEventLogger, PickerEvent};
use crate::ports::key_value_store::KeyValueStore;
use crate::ports::random_source::RandomSource;
use crate::ports::scheduler::Scheduler;
use crate::ports::ui_event::{
    HighlightEvent, PoolSnapshot, SettingsSnapshot, StatusKind, UiEvent, WelcomeInfo, WinnerEvent,
};
use picker_domain::{DrawMachine, DrawOutcome, DrawPhase, NamePool, PoolError, QuestionNote};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

const CLEAR_PROMPT: &str = "Clear all names from the pool?";

/// Result of handling a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Continue the REPL loop
    Continue,
    /// Exit the REPL
    Exit,
}

/// Picker controller managing all state behind the REPL
///
/// This controller lives in the application layer and handles:
/// - Pool edits with validation (add, batch add, remove, clear)
/// - The draw lifecycle, including the busy lock while animating
/// - The question note
/// - Best-effort persistence after every mutation
/// - Emitting UiEvents to a channel for the presentation layer
pub struct PickerController {
    pool: NamePool,
    note: QuestionNote,
    persist: bool,
    draw: DrawMachine,
    /// Winner of the most recent draw, until the pool is cleared
    last_winner: Option<String>,
    storage: PickerStorage,
    random: Arc<dyn RandomSource>,
    scheduler: Arc<dyn Scheduler>,
    confirmation: Arc<dyn ConfirmationPort>,
    event_logger: Arc<dyn EventLogger>,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl PickerController {
    /// Create a controller, hydrating state from `store`.
    ///
    /// The pool is only loaded when persistence is enabled; with it disabled
    /// any stored pool is dropped. The question is always loaded.
    pub fn new(
        config: PickerConfig,
        store: Arc<dyn KeyValueStore>,
        random: Arc<dyn RandomSource>,
        scheduler: Arc<dyn Scheduler>,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let storage = PickerStorage::new(store);

        let pool = match storage.load_names() {
            Some(names) if config.persist => NamePool::from_names(names, config.options),
            _ => NamePool::new(config.options),
        };
        let note = storage
            .load_question()
            .map(|text| QuestionNote::new(&text))
            .unwrap_or_default();

        debug!(
            pool_size = pool.len(),
            persist = config.persist,
            "Picker state hydrated"
        );

        let controller = Self {
            pool,
            note,
            persist: config.persist,
            draw: DrawMachine::new(config.schedule),
            last_winner: None,
            storage,
            random,
            scheduler,
            confirmation: Arc::new(AutoDecline),
            event_logger: Arc::new(NoEventLogger),
            tx,
        };
        controller.save_pool();
        controller
    }

    /// Set the confirmation handler used by `clear`
    pub fn with_confirmation(mut self, confirmation: Arc<dyn ConfirmationPort>) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Set the structured event logger
    pub fn with_event_logger(mut self, logger: Arc<dyn EventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub fn pool(&self) -> &NamePool {
        &self.pool
    }

    pub fn note(&self) -> &QuestionNote {
        &self.note
    }

    pub fn persist(&self) -> bool {
        self.persist
    }

    pub fn draw_phase(&self) -> DrawPhase {
        self.draw.phase()
    }

    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.as_deref()
    }

    pub fn settings(&self) -> SettingsSnapshot {
        let options = self.pool.options();
        SettingsSnapshot {
            persist: self.persist,
            allow_duplicates: options.allow_duplicates,
            remove_after_pick: options.remove_after_pick,
            animation_steps: self.draw.schedule().steps,
        }
    }

    /// Emit the welcome screen
    pub fn send_welcome(&self) {
        self.send(UiEvent::Welcome(WelcomeInfo {
            pool: PoolSnapshot::new(self.pool.names()),
            question: self.note.display().to_string(),
            settings: self.settings(),
        }));
    }

    /// Apply a command.
    ///
    /// Failures never escape: they are reported as a status line message.
    pub async fn dispatch(&mut self, command: PickerCommand) -> CommandAction {
        let result = match command {
            PickerCommand::Add(name) => self.add(&name).map(drop),
            PickerCommand::AddBatch(raw) => self.add_batch(&raw).map(drop),
            PickerCommand::RemoveAt(index) => self.remove_at(index).map(drop),
            PickerCommand::Clear => self.clear().map(drop),
            PickerCommand::Draw => self.draw().await.map(drop),
            PickerCommand::List => {
                self.send(UiEvent::PoolListed(PoolSnapshot::new(self.pool.names())));
                Ok(())
            }
            PickerCommand::SetPersist(enabled) => {
                self.set_persist(enabled.unwrap_or(!self.persist));
                Ok(())
            }
            PickerCommand::SetAllowDuplicates(allow) => {
                let allow = allow.unwrap_or(!self.pool.options().allow_duplicates);
                self.set_allow_duplicates(allow)
            }
            PickerCommand::SetRemoveAfterPick(remove) => {
                self.set_remove_after_pick(
                    remove.unwrap_or(!self.pool.options().remove_after_pick),
                );
                Ok(())
            }
            PickerCommand::SaveQuestion(text) => {
                self.save_question(&text);
                Ok(())
            }
            PickerCommand::ClearQuestion => {
                self.clear_question();
                Ok(())
            }
            PickerCommand::ShowOptions => {
                self.send(UiEvent::SettingsDisplay(self.settings()));
                Ok(())
            }
            PickerCommand::Help => {
                self.send(UiEvent::Help);
                Ok(())
            }
            PickerCommand::Quit => {
                self.send(UiEvent::Exit);
                return CommandAction::Exit;
            }
        };

        if let Err(e) = result {
            debug!("Command rejected: {}", e);
            self.status(e.to_string(), StatusKind::Error);
        }
        CommandAction::Continue
    }

    // ==================== Pool edits ====================

    /// Add a single name
    pub fn add(&mut self, name: &str) -> Result<String, PoolError> {
        self.ensure_idle()?;
        let added = self.pool.add(name)?.to_string();

        debug!("Added '{}'", added);
        self.log_event(
            "name_added",
            json!({ "name": added, "pool_size": self.pool.len() }),
        );
        self.pool_changed();
        self.send(UiEvent::StatusCleared);
        Ok(added)
    }

    /// Add 3-10 names from comma or newline separated text
    pub fn add_batch(&mut self, raw: &str) -> Result<Vec<String>, PoolError> {
        self.ensure_idle()?;
        let added = self.pool.add_batch(raw)?;

        debug!("Added batch of {} names", added.len());
        self.log_event(
            "batch_added",
            json!({ "names": added, "pool_size": self.pool.len() }),
        );
        self.pool_changed();
        self.send(UiEvent::StatusCleared);
        Ok(added)
    }

    /// Remove the name at a 0-based position
    pub fn remove_at(&mut self, index: usize) -> Result<String, PoolError> {
        self.ensure_idle()?;
        let removed = self.pool.remove_at(index)?;

        debug!("Removed '{}' at {}", removed, index);
        self.log_event(
            "name_removed",
            json!({ "name": removed, "index": index, "pool_size": self.pool.len() }),
        );
        self.pool_changed();
        Ok(removed)
    }

    /// Empty the pool after confirmation.
    ///
    /// Returns `false` when the pool was already empty or the user declined.
    pub fn clear(&mut self) -> Result<bool, PoolError> {
        self.ensure_idle()?;
        if self.pool.is_empty() {
            return Ok(false);
        }
        if !self.confirmation.confirm(CLEAR_PROMPT) {
            self.status("Clear cancelled.".to_string(), StatusKind::Info);
            return Ok(false);
        }

        let count = self.pool.clear();
        self.last_winner = None;

        debug!("Cleared {} names", count);
        self.log_event("pool_cleared", json!({ "removed": count }));
        self.pool_changed();
        self.send(UiEvent::WinnerCleared);
        Ok(true)
    }

    // ==================== Draw ====================

    /// Run a complete draw: animate, pick the winner, show the result.
    pub async fn draw(&mut self) -> Result<DrawOutcome, PoolError> {
        self.begin_draw()?;
        while self.animate_step().await.is_some() {}
        let outcome = self.finalize_draw()?;

        if outcome.removed {
            self.scheduler.delay(self.draw.schedule().reveal_hold).await;
            self.emit_pool();
        }
        Ok(outcome)
    }

    /// Lock the pool and enter the animation.
    pub fn begin_draw(&mut self) -> Result<(), PoolError> {
        self.draw.start(self.pool.len())?;

        let steps = self.draw.schedule().steps;
        info!(pool_size = self.pool.len(), steps, "Draw started");
        self.send(UiEvent::StatusCleared);
        self.send(UiEvent::DrawStarted {
            pool_size: self.pool.len(),
            steps,
        });
        Ok(())
    }

    /// Wait for and run the next highlight step.
    ///
    /// The highlighted index is cosmetic and discarded. Returns the step
    /// number, or `None` once the animation is over.
    pub async fn animate_step(&mut self) -> Option<u32> {
        let delay = self.draw.next_delay()?;
        self.scheduler.delay(delay).await;

        let index = self.random.uniform_int(self.pool.len());
        let step = self.draw.complete_step()?;
        let name = self.pool.get(index).unwrap_or_default().to_string();

        self.send(UiEvent::Highlight(HighlightEvent {
            step,
            total_steps: self.draw.schedule().steps,
            index,
            name,
        }));
        Some(step)
    }

    /// Pick the winner with a fresh draw over the current pool and unlock it.
    pub fn finalize_draw(&mut self) -> Result<DrawOutcome, PoolError> {
        match self.draw.phase() {
            DrawPhase::Finalizing => {}
            DrawPhase::Animating { .. } => return Err(PoolError::DrawInProgress),
            DrawPhase::Idle => return Err(PoolError::NotDrawing),
        }

        let pool_size = self.pool.len();
        let index = self.random.uniform_int(pool_size);
        let settled = self.pool.settle_draw(index);
        self.draw.finish();
        let outcome = settled?;

        info!(
            winner = %outcome.name,
            index = outcome.index,
            removed = outcome.removed,
            "Draw finished"
        );
        self.log_event(
            "winner_drawn",
            json!({
                "name": outcome.name,
                "index": outcome.index,
                "pool_size": pool_size,
                "removed": outcome.removed,
            }),
        );
        self.last_winner = Some(outcome.name.clone());
        self.send(UiEvent::Winner(WinnerEvent {
            name: outcome.name.clone(),
            index: outcome.index,
            removed: outcome.removed,
        }));

        if outcome.removed {
            self.save_pool();
        }
        Ok(outcome)
    }

    // ==================== Settings ====================

    /// Switch persistence for both the pool and the question
    pub fn set_persist(&mut self, enabled: bool) {
        self.persist = enabled;
        self.save_pool();
        self.storage.sync_question(self.note.text(), enabled);

        debug!("Persistence {}", if enabled { "enabled" } else { "disabled" });
        self.send(UiEvent::SettingsChanged(self.settings()));
    }

    /// Switch the duplicate rule.
    ///
    /// Disallowing duplicates removes existing repeats, so it is refused
    /// while a draw holds the pool.
    pub fn set_allow_duplicates(&mut self, allow: bool) -> Result<(), PoolError> {
        if !allow {
            self.ensure_idle()?;
        }
        let dropped = self.pool.set_allow_duplicates(allow);
        self.send(UiEvent::SettingsChanged(self.settings()));

        if dropped > 0 {
            self.log_event(
                "duplicates_removed",
                json!({ "removed": dropped, "pool_size": self.pool.len() }),
            );
            self.pool_changed();
            self.status(
                format!("Removed {} duplicate name(s).", dropped),
                StatusKind::Info,
            );
        }
        Ok(())
    }

    /// Switch removal of winners; applies to the draw being finalized next
    pub fn set_remove_after_pick(&mut self, remove: bool) {
        self.pool.set_remove_after_pick(remove);
        self.send(UiEvent::SettingsChanged(self.settings()));
    }

    // ==================== Question ====================

    /// Replace the question; blank text clears it
    pub fn save_question(&mut self, text: &str) {
        self.note.set(text);
        self.storage.sync_question(self.note.text(), self.persist);

        self.log_event("question_saved", json!({ "question": self.note.text() }));
        self.send(UiEvent::QuestionChanged {
            display: self.note.display().to_string(),
            is_set: self.note.is_set(),
        });
    }

    pub fn clear_question(&mut self) {
        self.save_question("");
    }

    // ==================== Helpers ====================

    fn ensure_idle(&self) -> Result<(), PoolError> {
        if self.draw.is_busy() {
            return Err(PoolError::DrawInProgress);
        }
        Ok(())
    }

    fn save_pool(&self) {
        self.storage.sync_names(self.pool.names(), self.persist);
    }

    fn pool_changed(&self) {
        self.save_pool();
        self.emit_pool();
    }

    fn emit_pool(&self) {
        self.send(UiEvent::PoolChanged(PoolSnapshot::new(self.pool.names())));
    }

    fn status(&self, message: String, kind: StatusKind) {
        self.send(UiEvent::Status { message, kind });
    }

    fn log_event(&self, event_type: &'static str, payload: serde_json::Value) {
        self.event_logger.log(PickerEvent::new(event_type, payload));
    }

    fn send(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}
