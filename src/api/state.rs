use std::sync::Arc;

use crate::layout::{build_layout, html::render_page, Node};
use crate::models::Dataset;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub layout: Arc<Node>,
    pub page: Arc<str>,
}

impl AppState {
    /// Build the layout and pre-render the page for `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        let layout = build_layout(&dataset);
        let page = render_page(&layout);
        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(layout),
            page: Arc::from(page),
        }
    }
}
