use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct InitResultViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub db_path: String,
    pub config_written: bool,
    pub db_created: bool,
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::InitView;
        Box::new(InitView::new(self, mode))
    }
}
