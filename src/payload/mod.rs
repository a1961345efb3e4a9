pub mod injector;
pub mod loader;
pub mod set;

pub use set::{PayloadSet, ScannerKind};
