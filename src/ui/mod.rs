//! UI module - reusable rendering components
//!
//! Form rows, stat cards, and the small widgets shared between the
//! form panel and the results panel.

pub mod components;
