//! Hydration engine: skeletal trees → validated, snapshotted trees.

pub mod engine;

pub use engine::{hydrate, HydrationError, HydrationFailure, HydrationReport};
