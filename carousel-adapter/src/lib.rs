//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the snapping math and drag state machine.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Pointer gesture recognition with velocity-projected release (`DragRecognizer`)
//! - Binding an item collection and a content function to the engine (`Controller`)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod recognizer;


pub use controller::{ContentFn, Controller, RenderedItem};
pub use recognizer::{DEFAULT_DECELERATION_RATE, DEFAULT_MINIMUM_DISTANCE, DragRecognizer};
