// ABOUTME: Main library module for the twits template host
// ABOUTME: Exports the context populator, template host and CLI components

pub mod cli;
pub mod host;
pub mod template;
pub mod twits;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use host::{ContextInitializer, HostConfig, HostError, RenderedPage, TemplateHost};
pub use template::{AttributeStore, AttributeWriter, Attributes, TemplateContext, TemplateEngine};
pub use twits::{participants, ParticipantMapping, ParticipantRecord, TwitsPopulator, TWITS_KEY};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
