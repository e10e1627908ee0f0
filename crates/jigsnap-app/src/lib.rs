//! Application layer for the Jigsnap puzzle.
//!
//! Translates user input ([`action::Action`]) into session operations, queues
//! the resulting presentation effects, and builds the view model the browser
//! renders from.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod state;
pub mod transition;
pub mod view_model;
pub mod view_model_builder;
