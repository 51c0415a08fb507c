//! Interactive picker session
//!
//! Line editing, event rendering and the interactive confirmation prompt.

pub mod confirmation;
pub mod picker_repl;
pub mod presenter;

pub use confirmation::TerminalConfirmation;
pub use picker_repl::PickerRepl;
pub use presenter::ReplPresenter;
