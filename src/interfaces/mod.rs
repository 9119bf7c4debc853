//! Adapters at the edges of the crate: CSV catalog ingestion and the
//! interactive terminal session.

pub mod csv;
pub mod terminal;
