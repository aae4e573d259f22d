//! Backroom Console - headless manager screens
//!
//! One [`screen::Screen`] per entity: owns the fetched collection, the
//! active filter and sort, the editing draft, and dialog/busy state, and
//! orchestrates the API calls. Rendering is left to the embedding shell;
//! everything here is plain state that a UI reads and mutates.

pub mod confirm;
pub mod input;
pub mod screen;
pub mod screens;

pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use screen::{
    DialogMode, DialogState, LoadState, Notice, NoticeKind, Screen, ScreenSpec, SortOrder,
};
