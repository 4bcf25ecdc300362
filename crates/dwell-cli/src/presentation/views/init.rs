use std::fmt;

use crate::presentation::view_models::{InitResultViewModel, ViewMode};

pub struct InitView<'a> {
    data: &'a InitResultViewModel,
    mode: ViewMode,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.data_dir);
        }

        let config_note = if self.data.config_written {
            "written"
        } else {
            "kept"
        };
        let db_note = if self.data.db_created {
            "created"
        } else {
            "up to date"
        };

        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f, "Config:         {} ({})", self.data.config_path, config_note)?;
        writeln!(f, "Database:       {} ({})", self.data.db_path, db_note)?;
        Ok(())
    }
}
