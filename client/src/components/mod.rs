//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational primitives (`form_group`, `spinner`, `response_box`,
//! `status_indicator`, `exercise_card`) render from props only. Feature panels
//! (`book_upload`, `exercise_generation`, `qa_section`) own their form state
//! and talk to the backend through `net::api`.

pub mod book_upload;
pub mod exercise_card;
pub mod exercise_generation;
pub mod form_group;
pub mod qa_section;
pub mod response_box;
pub mod spinner;
pub mod status_indicator;
