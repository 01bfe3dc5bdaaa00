//! # Comms Infra
//!
//! Infrastructure adapters: the in-memory `BoardService` implementation and
//! the seed-pool loader. Persistence proper lives behind an external
//! collaborator; this crate supplies what the server needs to run without it.

pub mod memory;
pub mod seed;

pub use memory::InMemoryBoard;
