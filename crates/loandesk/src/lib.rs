//! Document classification and filing engine for commercial lending workflows.
//!
//! The heart of the crate is [`workflows::filing`]: a rule-based pipeline that
//! takes a filename and/or extracted textual content and decides a canonical
//! document type, a category, a target folder, and which outstanding checklist
//! requirements the document satisfies. Persistence, upload mechanics, and UI
//! concerns live with callers; the classifiers here are pure functions over
//! static catalog tables.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
