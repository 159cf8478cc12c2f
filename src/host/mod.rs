// ABOUTME: In-process template host for the twits demo
// ABOUTME: Owns attribute scopes, runs registered context initializers and renders pages

pub mod config;
pub mod error;
pub mod initializer;
pub mod loader;
pub mod renderer;

pub use config::HostConfig;
pub use error::{HostError, Result};
pub use initializer::ContextInitializer;
pub use renderer::{RenderedPage, TemplateHost};
