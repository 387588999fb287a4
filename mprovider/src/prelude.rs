//! Common `mprovider` imports for downstream crates.

pub use crate::{
    ChatEndpoint, ChatPayload, ChatReply, EndpointError, EndpointErrorKind, EndpointFuture,
    Message, ProviderError, ProviderErrorKind, ProviderId, Role, SecretString,
};
