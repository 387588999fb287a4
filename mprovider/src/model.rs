//! Provider catalog and provider-agnostic message types.
//!
//! ```rust
//! use mprovider::{Message, ProviderId, Role};
//!
//! let provider: ProviderId = "anthropic".parse().expect("known provider");
//! assert_eq!(provider.default_model(), "claude-3-5-sonnet-20241022");
//! assert!(provider.supports_model("claude-3-haiku-20240307"));
//!
//! let message = Message::new(Role::User, "hello");
//! assert_eq!(message.role.as_str(), "user");
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::ProviderError;

const OPENAI_MODELS: &[&str] = &["gpt-4o-mini", "gpt-4o", "gpt-4.1-mini", "gpt-3.5-turbo"];

const ANTHROPIC_MODELS: &[&str] = &[
    "claude-3-5-sonnet-20241022",
    "claude-3-opus-20240229",
    "claude-3-haiku-20240307",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenAi,
    Anthropic,
}

impl ProviderId {
    pub fn all() -> [ProviderId; 2] {
        [Self::OpenAi, Self::Anthropic]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
        }
    }

    /// Models offered for this provider. The first entry is the default.
    pub fn models(self) -> &'static [&'static str] {
        match self {
            Self::OpenAi => OPENAI_MODELS,
            Self::Anthropic => ANTHROPIC_MODELS,
        }
    }

    pub fn default_model(self) -> &'static str {
        self.models()[0]
    }

    pub fn supports_model(self, model: &str) -> bool {
        self.models().contains(&model)
    }

    /// Resolves `model` against this provider's catalog.
    pub fn resolve_model(self, model: &str) -> Result<&'static str, ProviderError> {
        self.models()
            .iter()
            .copied()
            .find(|candidate| *candidate == model)
            .ok_or_else(|| {
                ProviderError::unknown_model(format!(
                    "model '{model}' is not offered by provider '{self}'"
                ))
            })
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(ProviderError::unknown_provider(format!(
                "unknown provider '{value}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn default_model_is_first_catalog_entry() {
        assert_eq!(ProviderId::OpenAi.default_model(), "gpt-4o-mini");
        assert_eq!(
            ProviderId::Anthropic.default_model(),
            "claude-3-5-sonnet-20241022"
        );
    }

    #[test]
    fn catalog_matches_offered_models_exactly() {
        assert_eq!(
            ProviderId::OpenAi.models(),
            &["gpt-4o-mini", "gpt-4o", "gpt-4.1-mini", "gpt-3.5-turbo"]
        );
        assert_eq!(
            ProviderId::Anthropic.models(),
            &[
                "claude-3-5-sonnet-20241022",
                "claude-3-opus-20240229",
                "claude-3-haiku-20240307"
            ]
        );
    }

    #[test]
    fn models_are_not_shared_across_providers() {
        for model in ProviderId::OpenAi.models() {
            assert!(!ProviderId::Anthropic.supports_model(model));
        }
    }

    #[test]
    fn provider_parse_is_case_insensitive_and_trims() {
        assert_eq!(" OpenAI ".parse::<ProviderId>(), Ok(ProviderId::OpenAi));
        assert_eq!("anthropic".parse::<ProviderId>(), Ok(ProviderId::Anthropic));

        let error = "mistral".parse::<ProviderId>().expect_err("unknown provider");
        assert_eq!(error.kind, ProviderErrorKind::UnknownProvider);
    }

    #[test]
    fn resolve_model_rejects_models_of_other_provider() {
        let error = ProviderId::OpenAi
            .resolve_model("claude-3-opus-20240229")
            .expect_err("foreign model");
        assert_eq!(error.kind, ProviderErrorKind::UnknownModel);
        assert_eq!(
            ProviderId::OpenAi.resolve_model("gpt-4o"),
            Ok("gpt-4o")
        );
    }

    #[test]
    fn display_uses_wire_id() {
        assert_eq!(ProviderId::OpenAi.to_string(), "openai");
        assert_eq!(ProviderId::Anthropic.label(), "Anthropic");
    }
}
