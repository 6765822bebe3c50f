//! Networking modules for the exercise backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the four REST calls and `types` defines their wire schema.

pub mod api;
pub mod types;
