//! Provider catalog, message model, and chat endpoint client.
//!
//! ```rust
//! use mprovider::{ChatPayload, Message, ProviderId, SecretString};
//!
//! let provider = ProviderId::OpenAi;
//! let payload = ChatPayload::new(
//!     provider,
//!     provider.default_model(),
//!     SecretString::new("sk-test"),
//!     vec![Message::user("hello")],
//! );
//! assert_eq!(payload.model, "gpt-4o-mini");
//! ```

mod credentials;
mod endpoint;
mod error;
mod model;

pub mod prelude;

#[cfg(feature = "http-endpoint")]
pub mod http;

pub use credentials::SecretString;
pub use endpoint::{ChatEndpoint, ChatPayload, ChatReply, EndpointFuture};
pub use error::{EndpointError, EndpointErrorKind, ProviderError, ProviderErrorKind};
pub use model::{Message, ProviderId, Role};
