//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod mythicbeasts;

pub use mythicbeasts::{
    CommandVerb, MythicBeastsProvider, MythicBeastsProviderBuilder, RemoteFailure, build_command,
    extract_error,
};
