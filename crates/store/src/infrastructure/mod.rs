//! External dependency boundary.
//!
//! The store is deliberately thin on this side: one port for row access,
//! plus an in-memory fixture implementation. Transport, connections, and
//! schema all live behind the port.

pub mod ports;
