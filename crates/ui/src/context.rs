use std::sync::Arc;

use detective_core::model::DetectiveName;
use services::AppServices;

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;

    /// Detective chosen before the window opened, skipping the login prompt.
    fn preset_detective(&self) -> Option<DetectiveName>;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    preset_detective: Option<DetectiveName>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            preset_detective: app.preset_detective(),
        }
    }

    #[must_use]
    pub fn services(&self) -> AppServices {
        self.services.clone()
    }

    #[must_use]
    pub fn preset_detective(&self) -> Option<&DetectiveName> {
        self.preset_detective.as_ref()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
