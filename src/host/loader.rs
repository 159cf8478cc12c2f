// ABOUTME: Template discovery for the template host
// ABOUTME: Registers every .hbs file under a directory, named by its relative path

use std::io;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::{HostError, Result};
use crate::template::TemplateEngine;

pub const TEMPLATE_EXTENSION: &str = "hbs";

/// Template name for a file relative to the template root: `pages/about.hbs` -> `pages/about`
pub fn template_name(relative_path: &Path) -> Option<String> {
    let stem = relative_path.with_extension("");
    let parts: Option<Vec<&str>> = stem.components().map(|c| c.as_os_str().to_str()).collect();
    parts.map(|p| p.join("/"))
}

/// Load all templates below `dir` into the engine, returning how many were registered
pub fn load_templates(engine: &mut TemplateEngine, dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Err(HostError::TemplateDirNotFound(dir.display().to_string()));
    }

    let mut loaded = 0;
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
        {
            continue;
        }

        let relative_path = path
            .strip_prefix(dir)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let Some(name) = template_name(relative_path) else {
            warn!("Skipping template with non UTF-8 path: {}", path.display());
            continue;
        };

        let source = std::fs::read_to_string(path)?;
        engine.register_template(&name, &source)?;
        debug!("Loaded template '{}' from {}", name, path.display());
        loaded += 1;
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_template_name() {
        assert_eq!(
            template_name(&PathBuf::from("twits.hbs")),
            Some("twits".to_string())
        );
        assert_eq!(
            template_name(&PathBuf::from("pages/about.hbs")),
            Some("pages/about".to_string())
        );
    }

    #[test]
    fn test_load_templates_recursively() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("pages")).unwrap();
        fs::write(temp_dir.path().join("index.hbs"), "index").unwrap();
        fs::write(temp_dir.path().join("pages/about.hbs"), "about").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let mut engine = TemplateEngine::new();
        let loaded = load_templates(&mut engine, temp_dir.path()).unwrap();

        assert_eq!(loaded, 2);
        assert!(engine.has_template("index"));
        assert!(engine.has_template("pages/about"));
        assert!(!engine.has_template("notes"));
    }

    #[test]
    fn test_load_templates_missing_dir() {
        let temp_dir = tempdir().unwrap();
        let mut engine = TemplateEngine::new();
        let result = load_templates(&mut engine, &temp_dir.path().join("absent"));
        assert!(matches!(result, Err(HostError::TemplateDirNotFound(_))));
    }

    #[test]
    fn test_load_templates_syntax_error() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("bad.hbs"), "{{#if x}}never closed").unwrap();

        let mut engine = TemplateEngine::new();
        let result = load_templates(&mut engine, temp_dir.path());
        assert!(matches!(result, Err(HostError::Template(_))));
    }
}
