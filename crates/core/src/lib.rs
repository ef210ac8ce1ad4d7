//! Domain logic for the PrepDeck mock-interview platform.
//!
//! Everything in this crate is pure: no database handles, no HTTP, no
//! timers. The API crate wires these pieces to the outside world.

pub mod error;
pub mod feedback;
pub mod questions;
pub mod rating;
pub mod recorder;
pub mod session;
pub mod types;
