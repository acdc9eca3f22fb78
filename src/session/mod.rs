//! Display state for interactive generation.
//!
//! A [`Session`] owns the user's choices (classes and length) and the
//! single display slot, which moves through
//! `Idle -> Loading -> {Succeeded | Failed}`. Every request is tagged
//! with a [`Ticket`]; only the latest ticket may write the slot, so a
//! slow response never overwrites the result of a newer request.

mod state;

pub use state::{GenerationState, PendingRequest, Session, Ticket};
