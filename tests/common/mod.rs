// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides scratch directories with template and config files

#![allow(dead_code)]

use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

use twits::{AttributeStore, AttributeWriter};

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn template_dir(&self) -> PathBuf {
        self.path().join("templates")
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.html", name))
    }

    /// Write `<template_dir>/<name>.hbs`, creating parent directories
    pub async fn create_template(&self, name: &str, source: &str) -> PathBuf {
        let path = self.template_dir().join(format!("{}.hbs", name));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .expect("Failed to create template directory");
        }
        fs::write(&path, source)
            .await
            .expect("Failed to write template file");
        path
    }

    pub async fn create_config(&self, contents: &str) -> PathBuf {
        let path = self.path().join("twits.yaml");
        fs::write(&path, contents)
            .await
            .expect("Failed to write config file");
        path
    }
}

/// Attribute store that records set calls in order
#[derive(Default)]
pub struct RecordingStore {
    pub calls: Vec<(String, JsonValue)>,
}

impl AttributeWriter for RecordingStore {
    fn set(&mut self, key: &str, value: JsonValue) {
        self.calls.push((key.to_string(), value));
    }
}

impl AttributeStore for RecordingStore {
    fn get(&self, key: &str) -> Option<&JsonValue> {
        self.calls
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn keys(&self) -> Vec<String> {
        self.calls.iter().map(|(k, _)| k.clone()).collect()
    }

    fn writer(&mut self) -> Option<&mut dyn AttributeWriter> {
        Some(self)
    }
}

/// Attribute store with no write capability at all
#[derive(Default)]
pub struct SealedStore;

impl AttributeStore for SealedStore {
    fn get(&self, _key: &str) -> Option<&JsonValue> {
        None
    }

    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}
