//! Server module for building the HTTP server
//!
//! `ServerBuilder` wires a store into the company, invoice and health routes.

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
