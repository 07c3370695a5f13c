//!
//! Skyforge Agent - Model backend clients and the architecture agent
//!
//! The backend seam is a single synchronous-per-request call: one prompt in,
//! one flattened completion string out. Two wire formats live behind it (a
//! direct-completion envelope and a chat envelope); the rest of the system
//! only ever sees the final string.

/// Error types for backend invocation
pub mod error;

/// The model backend trait and invocation options
pub mod backend;

/// Direct-completion backend variant
pub mod completion;

/// Chat-envelope backend variant
pub mod chat;

/// Prompt templates for each agent operation
pub mod prompt;

/// The architecture agent facade
pub mod agent;

// Re-export key types
pub use agent::ArchitectureAgent;
pub use backend::{InvokeOptions, ModelBackend};
pub use chat::ChatCompletionBackend;
pub use completion::CompletionBackend;
pub use error::{AgentError, AgentResult};
