//! Production-friendly observability hooks for conversation sessions.
//!
//! ```rust
//! use mobserve::{MetricsConversationHooks, SafeConversationHooks, TracingConversationHooks};
//!
//! let _tracing = SafeConversationHooks::new(TracingConversationHooks);
//! let _metrics = MetricsConversationHooks;
//! ```

mod fanout;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use fanout::FanoutConversationHooks;
pub use metrics_hooks::MetricsConversationHooks;
pub use safe_hooks::SafeConversationHooks;
pub use tracing_hooks::TracingConversationHooks;

pub mod prelude {
    pub use crate::{
        FanoutConversationHooks, MetricsConversationHooks, SafeConversationHooks,
        TracingConversationHooks,
    };
}
