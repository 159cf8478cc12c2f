// ABOUTME: Template engine module for the twits template host
// ABOUTME: Provides attribute stores, context assembly and Handlebars rendering

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use context::{
    AttributeStore, AttributeWriter, Attributes, ReadOnlyAttributes, Scope, TemplateContext,
};
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
