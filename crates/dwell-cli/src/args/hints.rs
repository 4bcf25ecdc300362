pub mod cmd {
    pub const INIT: &str = "dwell init";
    pub const PROPERTY_LIST: &str = "dwell property list";
    pub const REPORT_LIST: &str = "dwell report list";
    pub const MAINTAIN_DRY_RUN: &str = "dwell maintain --dry-run";
}

pub mod fmt {
    pub fn report_show(property_id: &str) -> String {
        format!("dwell report show {}", property_id)
    }

    pub fn maintain_dry_run(task: &str, property: Option<&str>) -> String {
        match property {
            Some(id) => format!("dwell maintain --task {} --property {} --dry-run", task, id),
            None => format!("dwell maintain --task {} --dry-run", task),
        }
    }

    pub fn maintain_execute(task: &str, property: Option<&str>) -> String {
        match property {
            Some(id) => format!("dwell maintain --task {} --property {} --execute", task, id),
            None => format!("dwell maintain --task {} --execute", task),
        }
    }
}
