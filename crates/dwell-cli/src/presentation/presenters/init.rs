use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InitResultViewModel, StatusBadge,
};
use dwell_runtime::InitOutcome;
use std::path::Path;

pub fn present_init_result(
    data_dir: &Path,
    outcome: InitOutcome,
) -> CommandResultViewModel<InitResultViewModel> {
    let badge = if outcome.config_written || outcome.db_created {
        StatusBadge::success("Workspace initialized")
    } else {
        StatusBadge::info("Workspace already initialized")
    };

    let content = InitResultViewModel {
        data_dir: data_dir.display().to_string(),
        config_path: outcome.config_path.display().to_string(),
        db_path: outcome.db_path.display().to_string(),
        config_written: outcome.config_written,
        db_created: outcome.db_created,
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(Guidance::new("List tracked properties").with_command(cmd::PROPERTY_LIST))
        .with_suggestion(
            Guidance::new("Preview pending maintenance").with_command(cmd::MAINTAIN_DRY_RUN),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::StatusLevel;
    use std::path::PathBuf;

    fn outcome(config_written: bool, db_created: bool) -> InitOutcome {
        InitOutcome {
            config_path: PathBuf::from("/data/config.toml"),
            db_path: PathBuf::from("/data/dwell.db"),
            config_written,
            db_created,
        }
    }

    #[test]
    fn test_fresh_init_is_success() {
        let result = present_init_result(Path::new("/data"), outcome(true, true));
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Success);
        assert_eq!(result.content.db_path, "/data/dwell.db");
    }

    #[test]
    fn test_repeat_init_is_info() {
        let result = present_init_result(Path::new("/data"), outcome(false, false));
        assert_eq!(result.badge.unwrap().level, StatusLevel::Info);
    }
}
