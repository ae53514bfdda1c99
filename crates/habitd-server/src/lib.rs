pub mod client;
pub mod handlers;
pub mod scheduler;
pub mod server;

pub use client::ClientRegistry;
pub use server::{start, ServerConfig, ServerHandle};
