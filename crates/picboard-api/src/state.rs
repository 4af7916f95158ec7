//! Application state shared by all handlers.
//!
//! Everything in here is immutable after startup; handlers get it as
//! `State<Arc<AppState>>`.

use std::sync::Arc;

use picboard_core::Config;
use picboard_storage::ImageStore;

use crate::services::upload::UploadService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ImageStore>,
    pub upload_service: UploadService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ImageStore>) -> Self {
        let validator = picboard_core::UploadValidator::new(config.upload.clone());
        let upload_service = UploadService::new(validator, store.clone());
        Self {
            config,
            store,
            upload_service,
        }
    }
}
