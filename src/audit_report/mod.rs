//! Domain layer for the license audit report.
//!
//! Pure types, policies and services. Nothing here talks to the network or
//! the filesystem; the application layer drives these through the ports.
pub mod domain;
pub mod policies;
pub mod services;
