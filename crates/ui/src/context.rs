use std::sync::Arc;

use quiz_core::model::QuizSettings;
use quiz_core::{Catalog, Clock};
use services::CertificateExporter;

/// What the binary hands the UI: content, timing, and where certificates go.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn settings(&self) -> QuizSettings;
    fn clock(&self) -> Clock;
    fn certificate_exporter(&self) -> Arc<dyn CertificateExporter>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    clock: Clock,
    certificate_exporter: Arc<dyn CertificateExporter>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            settings: app.settings(),
            clock: app.clock(),
            certificate_exporter: app.certificate_exporter(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn certificate_exporter(&self) -> Arc<dyn CertificateExporter> {
        Arc::clone(&self.certificate_exporter)
    }
}

/// Snapshot the composition root's wiring for `LaunchBuilder::with_context`.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
