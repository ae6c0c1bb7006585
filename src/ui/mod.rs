/// Gallery widgets
pub mod card;
pub mod controls;
