//! Controller module - Application logic and event handling
//!
//! - `input`: key event handling
//! - `navigation`: query state operations and the fetch effect

mod input;
mod navigation;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, CatalogSource};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    source: Arc<dyn CatalogSource>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, source: Arc<dyn CatalogSource>) -> Self {
        Self { model, source }
    }
}
