use std::sync::Arc;

use quiz_core::model::QuestionBank;
use services::ShareService;

pub trait UiApp: Send + Sync {
    fn bank(&self) -> Arc<QuestionBank>;
    fn share(&self) -> Arc<ShareService>;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
    share: Arc<ShareService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.bank(),
            share: app.share(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn share(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
