pub mod client;
pub mod response;
