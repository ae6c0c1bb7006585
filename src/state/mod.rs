/// State management module
///
/// This module handles the gallery's in-memory state:
/// - Shared data structures (data.rs)
/// - Date/category selection and render tickets (selection.rs)

pub mod data;
pub mod selection;
