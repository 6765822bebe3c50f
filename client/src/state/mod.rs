//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each panel owns one plain model (`upload`, `generation`, `qa`) held in a
//! local `RwSignal`; `book` is the only state shared across panels. Reducers
//! live on the models so panel behavior is testable without a browser.

pub mod banner;
pub mod book;
pub mod generation;
pub mod qa;
pub mod upload;
