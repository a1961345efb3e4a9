pub mod cancel;
pub mod events;
pub mod orchestrator;
pub mod target;
