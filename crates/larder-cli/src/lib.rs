pub mod args;
pub mod client;
