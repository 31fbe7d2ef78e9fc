pub mod change;
pub mod classify;
pub mod event;
pub mod failure;
pub mod format;
