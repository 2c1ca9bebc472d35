//! Kalaha Service - in-process game registry
//!
//! This crate provides the layer between the rules engine and a client:
//! - Game registry keyed by id, with a player seated on each side
//! - Turn ownership checks (who may move)
//! - Flattened game views for display or storage

mod error;
mod service;
mod view;

pub use error::ServiceError;
pub use service::{GameId, GameService};
pub use view::GameView;
