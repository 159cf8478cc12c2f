// ABOUTME: Command implementations for the twits CLI
// ABOUTME: Handles execution of the render and list commands

use anyhow::Result;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use super::args::ListFormat;
use super::config::Config;
use crate::host::{HostConfig, TemplateHost};
use crate::twits::{participants, ParticipantMapping, TwitsPopulator};

/// Create a template host with the twits populator registered
pub fn build_host(config: HostConfig) -> Result<TemplateHost> {
    let mut host = TemplateHost::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to create template host: {}", e))?;
    host.register_initializer(Box::new(TwitsPopulator::new()));
    Ok(host)
}

/// Render a page to stdout or a file
pub async fn render_page(
    page: Option<String>,
    output: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let mut host_config = config.host.clone();
    if template_dir.is_some() {
        host_config.template_dir = template_dir;
    }

    let host = build_host(host_config)?;
    let page = page.unwrap_or_default();

    let rendered = host
        .render(&page)
        .map_err(|e| anyhow::anyhow!("Failed to render page '{}': {}", page, e))?;
    info!(
        "Rendered template '{}' ({})",
        rendered.template, rendered.content_type
    );

    if let Some(output_path) = output {
        tokio::fs::write(&output_path, &rendered.body)
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "Failed to write output file '{}': {}",
                    output_path.display(),
                    e
                )
            })?;
        info!("Page written to: {}", output_path.display());
    } else {
        print!("{}", rendered.body);
    }

    Ok(())
}

/// Print the participant mapping
pub async fn list_participants(format: ListFormat, _config: &Config) -> Result<()> {
    let mapping = participants();
    info!("Listing {} participants", mapping.len());

    print!("{}", format_participants(&mapping, format)?);
    Ok(())
}

/// Format the mapping for terminal output
pub fn format_participants(mapping: &ParticipantMapping, format: ListFormat) -> Result<String> {
    match format {
        ListFormat::Json => {
            let mut out = serde_json::to_string_pretty(mapping)?;
            out.push('\n');
            Ok(out)
        }
        ListFormat::Yaml => Ok(serde_yaml::to_string(mapping)?),
        ListFormat::Text => {
            let mut out = String::new();
            for (name, record) in mapping {
                writeln!(out, "{}", name)?;
                writeln!(out, "  distinguishing fact: {}", record.distinguishing_fact())?;
                writeln!(out, "  notable incident:    {}", record.notable_incident())?;
                writeln!(out, "  result:              {}", record.result_label())?;
            }
            Ok(out)
        }
    }
}
