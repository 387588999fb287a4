mod serde_api;
mod transport;

pub use transport::{DEFAULT_BASE_URL, HttpChatEndpoint};
