//! Application shell: state, terminal and timer events, and the actions
//! the main loop performs on their behalf.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
