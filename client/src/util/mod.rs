//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mock` fabricates placeholder exercises for the development backend that
//! the host server can mount.

pub mod mock;
