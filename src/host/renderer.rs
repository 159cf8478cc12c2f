// ABOUTME: Template host render pipeline
// ABOUTME: Resolves a page to a template, runs context initializers on fresh scopes and renders

use serde::Serialize;
use std::sync::Mutex;
use tracing::{debug, info};

use super::config::HostConfig;
use super::error::{HostError, Result};
use super::initializer::ContextInitializer;
use super::loader::{self, TEMPLATE_EXTENSION};
use crate::template::{Attributes, Scope, TemplateContext, TemplateEngine};

/// Template shipped with the crate, registered before any template directory is loaded
pub const BUILTIN_TWITS_TEMPLATE: &str = include_str!("templates/twits.hbs");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub template: String,
    pub content_type: String,
    pub body: String,
}

#[derive(Debug)]
struct ApplicationScope {
    attributes: Attributes,
    initialized: bool,
}

pub struct TemplateHost {
    config: HostConfig,
    engine: TemplateEngine,
    initializers: Vec<Box<dyn ContextInitializer>>,
    application_initializers: Vec<Box<dyn ContextInitializer>>,
    application: Mutex<ApplicationScope>,
}

impl TemplateHost {
    /// Create a host with the built-in template plus any templates in the configured directory
    pub fn new(config: HostConfig) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("twits", BUILTIN_TWITS_TEMPLATE)?;

        if let Some(ref dir) = config.template_dir {
            let loaded = loader::load_templates(&mut engine, dir)?;
            info!("Loaded {} templates from {}", loaded, dir.display());
        }

        Ok(Self {
            config,
            engine,
            initializers: Vec::new(),
            application_initializers: Vec::new(),
            application: Mutex::new(ApplicationScope {
                attributes: Attributes::new(Scope::Application),
                initialized: false,
            }),
        })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Register an initializer run against the request scope on every render
    pub fn register_initializer(&mut self, initializer: Box<dyn ContextInitializer>) {
        debug!("Registered context initializer '{}'", initializer.name());
        self.initializers.push(initializer);
    }

    /// Register an initializer run once against the shared application scope
    pub fn register_application_initializer(&mut self, initializer: Box<dyn ContextInitializer>) {
        debug!(
            "Registered application initializer '{}'",
            initializer.name()
        );
        self.application_initializers.push(initializer);
    }

    /// Register an additional template from source
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.engine.register_template(name, source)?;
        Ok(())
    }

    /// Map a page path such as `/twits` or `pages/about.hbs` to a template name
    pub fn page_to_template(&self, page: &str) -> String {
        let trimmed = page.trim_matches('/');
        let trimmed = trimmed
            .strip_suffix(&format!(".{}", TEMPLATE_EXTENSION))
            .unwrap_or(trimmed);

        if trimmed.is_empty() {
            self.config.index_template.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Build the rendering context for one request
    pub fn build_context(&self) -> Result<TemplateContext> {
        let application = self.application_snapshot()?;

        let mut request = Attributes::new(Scope::Request);
        for initializer in &self.initializers {
            debug!("Running context initializer '{}'", initializer.name());
            initializer.initialize(&mut request)?;
        }

        Ok(TemplateContext::new(application, request))
    }

    /// Render a page
    pub fn render(&self, page: &str) -> Result<RenderedPage> {
        let template = self.page_to_template(page);
        debug!("Requested template: '{}'", template);

        if !self.engine.has_template(&template) {
            return Err(HostError::TemplateNotFound(template));
        }

        let context = self.build_context()?;
        let body = self.engine.render(&template, &context)?;

        Ok(RenderedPage {
            template,
            content_type: self.config.response_content_type(),
            body,
        })
    }

    /// Run application initializers on first use and return a copy of the application scope
    fn application_snapshot(&self) -> Result<Attributes> {
        let mut scope = self
            .application
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !scope.initialized {
            for initializer in &self.application_initializers {
                debug!("Running application initializer '{}'", initializer.name());
                initializer.initialize(&mut scope.attributes)?;
            }
            scope.initialized = true;
        }

        Ok(scope.attributes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::AttributeStore;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct SetValue {
        key: &'static str,
        value: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl SetValue {
        fn new(key: &'static str, value: &'static str) -> Self {
            Self {
                key,
                value,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl ContextInitializer for SetValue {
        fn name(&self) -> &str {
            "set-value"
        }

        fn initialize(&self, context: &mut dyn AttributeStore) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let writer = context.writer().ok_or(HostError::MissingCapability {
                capability: "set",
                key: self.key.to_string(),
            })?;
            writer.set(self.key, json!(self.value));
            Ok(())
        }
    }

    struct Failing;

    impl ContextInitializer for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn initialize(&self, _context: &mut dyn AttributeStore) -> Result<()> {
            Err(HostError::MissingCapability {
                capability: "set",
                key: "anything".to_string(),
            })
        }
    }

    #[test]
    fn test_page_to_template() {
        let host = TemplateHost::new(HostConfig::default()).unwrap();

        assert_eq!(host.page_to_template(""), "twits");
        assert_eq!(host.page_to_template("/"), "twits");
        assert_eq!(host.page_to_template("/twits"), "twits");
        assert_eq!(host.page_to_template("pages/about.hbs"), "pages/about");
        assert_eq!(host.page_to_template("/pages/about/"), "pages/about");
    }

    #[test]
    fn test_unknown_template() {
        let host = TemplateHost::new(HostConfig::default()).unwrap();
        let result = host.render("missing");
        assert!(matches!(result, Err(HostError::TemplateNotFound(name)) if name == "missing"));
    }

    #[test]
    fn test_request_scope_shadows_application_scope() {
        let mut host = TemplateHost::new(HostConfig::default()).unwrap();
        host.register_template("title", "{{title}}|{{Application.title}}|{{Request.title}}")
            .unwrap();
        host.register_application_initializer(Box::new(SetValue::new("title", "app")));
        host.register_initializer(Box::new(SetValue::new("title", "req")));

        let page = host.render("title").unwrap();
        assert_eq!(page.body, "req|app|req");
        assert_eq!(page.content_type, "text/html; charset=utf-8");
        assert_eq!(page.template, "title");
    }

    #[test]
    fn test_application_initializer_runs_once() {
        let mut host = TemplateHost::new(HostConfig::default()).unwrap();
        let app_init = SetValue::new("site", "twits");
        let app_calls = Arc::clone(&app_init.calls);
        let req_init = SetValue::new("page", "index");
        let req_calls = Arc::clone(&req_init.calls);

        host.register_template("site", "{{site}}/{{page}}").unwrap();
        host.register_application_initializer(Box::new(app_init));
        host.register_initializer(Box::new(req_init));

        for _ in 0..3 {
            assert_eq!(host.render("site").unwrap().body, "twits/index");
        }

        assert_eq!(app_calls.load(Ordering::SeqCst), 1);
        assert_eq!(req_calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_initializer_error_propagates() {
        let mut host = TemplateHost::new(HostConfig::default()).unwrap();
        host.register_initializer(Box::new(Failing));

        let result = host.render("twits");
        assert!(matches!(result, Err(HostError::MissingCapability { .. })));
    }

    #[test]
    fn test_fresh_request_scope_per_render() {
        let mut host = TemplateHost::new(HostConfig::default()).unwrap();
        host.register_initializer(Box::new(SetValue::new("a", "1")));

        let first = host.build_context().unwrap();
        let second = host.build_context().unwrap();

        assert_eq!(first.request(), second.request());
        assert_eq!(first.request().len(), 1);
        assert!(first.application().is_empty());
    }
}
