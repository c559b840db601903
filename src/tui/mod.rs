//! Terminal User Interface module
//!
//! The interactive single-screen tracker: balance and totals on top, the
//! transaction list below, and modal dialogs for adding and deleting.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_tui;
