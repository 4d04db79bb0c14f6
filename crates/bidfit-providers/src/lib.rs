//! bidfit provider seams and clients
//!
//! The pipeline core delegates all external capabilities through two
//! traits: [`ChatModel`] (prose and schema-constrained generation) and
//! [`SearchProvider`] (ranked document search). This crate defines the
//! seams, their shared error type, and concrete HTTP clients for
//! Gemini and Tavily. Configuration is explicit and injected at
//! construction; nothing reads ambient global state.

pub mod config;
pub mod error;
pub mod gemini;
pub mod model;
pub mod search;
pub mod tavily;

pub use config::{GeminiConfig, TavilyConfig};
pub use error::ProviderError;
pub use gemini::GeminiModel;
pub use model::{schema_for, structured, ChatModel};
pub use search::{SearchHit, SearchProvider};
pub use tavily::TavilyClient;
