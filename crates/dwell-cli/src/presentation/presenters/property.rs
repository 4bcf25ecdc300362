use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PropertyEntryViewModel, PropertyListViewModel, StatusBadge,
};
use dwell_index::PropertySummary;
use dwell_types::format_timestamp;

pub fn present_property_list(
    summaries: Vec<PropertySummary>,
) -> CommandResultViewModel<PropertyListViewModel> {
    let properties: Vec<PropertyEntryViewModel> = summaries
        .into_iter()
        .map(|s| PropertyEntryViewModel {
            id: s.property.id.to_string(),
            title: s.property.title,
            created_at: format_timestamp(&s.property.created_at),
            view_count: s.view_count,
            session_count: s.session_count,
        })
        .collect();

    let content = PropertyListViewModel {
        total: properties.len(),
        properties,
    };

    if content.total == 0 {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No properties tracked yet"));
    }

    let label = format!("{} properties", content.total);
    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("Compare engagement").with_command(cmd::REPORT_LIST))
}
