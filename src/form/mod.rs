//! Contact form: fields, validation rules, and the submit workflow.

pub mod field;
pub mod rules;
pub mod snapshot;
pub mod workflow;
