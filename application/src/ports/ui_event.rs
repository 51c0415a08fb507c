//! UI event types emitted by PickerController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The REPL presenter receives them and renders them as
//! they arrive, including one event per animation frame.

/// Events emitted by PickerController for the presentation layer to render
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // === Welcome & Info ===
    /// Display welcome screen with current state
    Welcome(WelcomeInfo),
    /// Display help text for all available commands
    Help,
    /// Display current settings
    SettingsDisplay(SettingsSnapshot),

    // === Pool ===
    /// Pool contents changed; re-render the list
    PoolChanged(PoolSnapshot),
    /// The user asked to see the pool
    PoolListed(PoolSnapshot),

    // === Status line ===
    /// Replace the status line with a message
    Status { message: String, kind: StatusKind },
    /// Clear the status line after a successful action
    StatusCleared,

    // === Draw ===
    /// Draw accepted; input is locked until `Winner`
    DrawStarted { pool_size: usize, steps: u32 },
    /// Cosmetic highlight for one animation step
    Highlight(HighlightEvent),
    /// Authoritative result of the draw; input is unlocked
    Winner(WinnerEvent),
    /// Forget the previously announced winner
    WinnerCleared,

    // === Question ===
    /// Question display text changed
    QuestionChanged { display: String, is_set: bool },

    // === Settings ===
    /// A setting was switched
    SettingsChanged(SettingsSnapshot),

    // === Control ===
    /// Command could not be parsed
    CommandError { message: String },
    /// Exit message
    Exit,
}

// === Supporting Types ===

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Information for rendering the welcome screen
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeInfo {
    pub pool: PoolSnapshot,
    pub question: String,
    pub settings: SettingsSnapshot,
}

/// Pool contents for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub names: Vec<String>,
    pub count: usize,
}

impl PoolSnapshot {
    pub fn new(names: &[String]) -> Self {
        Self {
            names: names.to_vec(),
            count: names.len(),
        }
    }
}

/// Current switches for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsSnapshot {
    pub persist: bool,
    pub allow_duplicates: bool,
    pub remove_after_pick: bool,
    pub animation_steps: u32,
}

/// One animation frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightEvent {
    /// 0-based step number
    pub step: u32,
    pub total_steps: u32,
    pub index: usize,
    pub name: String,
}

/// Draw result for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerEvent {
    pub name: String,
    pub index: usize,
    /// Whether the winner left the pool
    pub removed: bool,
}
