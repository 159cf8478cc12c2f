// ABOUTME: Context initializer capability invoked by the template host before rendering
// ABOUTME: Components implement this trait and are registered with the host by composition

use super::error::Result;
use crate::template::AttributeStore;

/// Hook that populates an attribute store before a template is rendered.
///
/// The host calls [`ContextInitializer::initialize`] once per render with a
/// freshly created request scope, or once per host with the application
/// scope when registered as an application initializer. Errors are not
/// handled by the host; they abort the render and surface to the caller.
pub trait ContextInitializer: Send + Sync {
    /// Name used in log output
    fn name(&self) -> &str;

    fn initialize(&self, context: &mut dyn AttributeStore) -> Result<()>;
}
