//! Fast/slow datastore tiers shared by every server instance
//!
//! The pair is opened once per process (or once per [`Connections`] value)
//! and handed out as cheap clones of the underlying pools.

mod connections;

pub use connections::{ConnectionError, ConnectionPair, Connections};
