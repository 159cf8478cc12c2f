// ABOUTME: Context initializer that publishes the participant mapping
// ABOUTME: Writes the twits mapping into the host-provided attribute store under a fixed key

use tracing::debug;

use super::record::participants;
use crate::host::{ContextInitializer, HostError, Result};
use crate::template::AttributeStore;

/// Attribute key templates read the mapping from
pub const TWITS_KEY: &str = "twits";

#[derive(Debug, Clone, Copy, Default)]
pub struct TwitsPopulator;

impl TwitsPopulator {
    pub fn new() -> Self {
        Self
    }
}

impl ContextInitializer for TwitsPopulator {
    fn name(&self) -> &str {
        "twits"
    }

    fn initialize(&self, context: &mut dyn AttributeStore) -> Result<()> {
        let writer = context.writer().ok_or_else(|| HostError::MissingCapability {
            capability: "set",
            key: TWITS_KEY.to_string(),
        })?;

        let mapping = participants();
        debug!("Publishing {} participants under '{}'", mapping.len(), TWITS_KEY);
        writer.set(TWITS_KEY, serde_json::to_value(&mapping)?);

        Ok(())
    }
}
