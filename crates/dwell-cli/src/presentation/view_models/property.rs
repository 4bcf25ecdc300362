use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PropertyListViewModel {
    pub total: usize,
    pub properties: Vec<PropertyEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct PropertyEntryViewModel {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub view_count: u64,
    pub session_count: u64,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PropertyListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::property::PropertyListView;
        Box::new(PropertyListView::new(self, mode))
    }
}
