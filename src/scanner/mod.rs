pub mod api;
pub mod brute;
pub mod classify;
pub mod injection;
