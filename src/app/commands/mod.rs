pub mod classify;
pub mod switch;
