pub mod client;
pub mod cmd;
pub mod output;
pub mod render;
pub mod session;
