//! Stateless relay between the translation client and a chat-completion API.
//!
//! The proxy holds no credential. Each request carries its own key, which is
//! injected as a bearer token together with a fixed system prompt.

pub mod error;
pub mod server;

pub use error::ProxyError;
pub use server::ProxyServer;
