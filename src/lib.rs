//! # reqtui
//!
//! A character-cell terminal widget framework, and the HTTP request builder
//! screen built on it.
//!
//! Widgets live in a slotmap arena and are laid out once, at construction,
//! on fixed column fractions of their parent. A single widget holds focus;
//! keys go to it or descend from the root, with containers seeing them
//! before their children. Every frame is rendered into a cell grid and only
//! the cells that changed reach the terminal.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — Region, column edges, text fitting, shortcut markers
//! - **[`dom`]** — Slotmap-backed widget arena with parent handles
//! - **[`event`]** — Decoded keys, key handler tables, widget commands
//! - **[`widget`]** — Widget trait and list scroll state
//! - **[`widgets`]** — Label, LabeledField, ScrollBox, View, MultiView
//! - **[`focus`]** — Single-focus bookkeeping with serialized transitions
//! - **[`screen`]** — Mounting, key dispatch, focus hooks, frame rendering
//! - **[`render`]** — Cell grid compositor, clipped canvas, terminal backends
//! - **[`app`]** — Configuration and the frame loop
//! - **[`request`]** — The request builder screen
//! - **[`testing`]** — Headless backend, Pilot, snapshot helpers

// Foundation
pub mod error;
pub mod geometry;

// Core systems
pub mod dom;
pub mod focus;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Application
pub mod app;
pub mod request;
pub mod screen;

// Test support
pub mod testing;

pub use error::{Error, Result};
