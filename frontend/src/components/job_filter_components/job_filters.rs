//! Job filter panel: checkbox groups for job type, location and salary.

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdWork, md_communication_icons::MdLocationOn, md_editor_icons::MdAttachMoney, md_navigation_icons::MdClose}};
use jobboard_common::{job_filters::{FilterCategory, OptionSet, OptionsTracker, SelectionState}, job_record::JobRecord};


/// Derives filter options from `jobs` and tracks which ones are checked.
///
/// `on_options_changed` receives the derived options whenever the listing
/// content changes and is non-empty. `on_selection_changed` receives the whole
/// selection after every toggle.
#[component]
pub fn JobFilters(
    jobs: ReadSignal<Vec<JobRecord>>,
    on_options_changed: Callback<OptionSet>,
    on_selection_changed: Callback<SelectionState>,
) -> Element {
    let mut tracker = use_signal(OptionsTracker::default);
    let mut selected_filters = use_signal(SelectionState::default);
    let displayed_options = use_memo(move || OptionSet::derive(&jobs.read()).unwrap_or_default());

    use_effect(move || {
        let derived = tracker.write().observe(&jobs.read());
        if let Some(options) = derived {
            info!(
                "Derived job filter options: {} job types, {} locations",
                options.job_type.len(),
                options.location.len()
            );
            on_options_changed(options);
        }
    });

    let on_toggle = use_callback(move |(category, value): (FilterCategory, String)| {
        let next = {
            let mut selection = selected_filters.write();
            let now_selected = selection.toggle(category, &value);
            debug!("Filter {category}={value:?} selected={now_selected}");
            selection.clone()
        };
        on_selection_changed(next);
    });

    let on_clear = use_callback(move |_: ()| {
        selected_filters.write().clear();
        debug!("Cleared all job filters");
        on_selection_changed(SelectionState::default());
    });

    rsx! {
        div {
            id: "x-job-filters-panel",
            class: "x-job-filters-panel",
            div {
                class: "x-job-filters-header",
                h2 { "Filters" }
                if !selected_filters.read().is_empty() {
                    button {
                        class: "x-job-filters-clear",
                        onclick: move |_| on_clear(()),
                        Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                        "Clear all"
                    }
                }
            }
            div {
                class: "x-job-filters-sections",
                for category in FilterCategory::ALL {
                    FilterSection {
                        key: "{category}",
                        category,
                        options: displayed_options.read().rendered(category),
                        selected_filters,
                        on_toggle,
                    }
                }
            }
        }
    }
}

#[component]
fn FilterSection(
    category: FilterCategory,
    options: Vec<String>,
    selected_filters: Signal<SelectionState>,
    on_toggle: Callback<(FilterCategory, String)>,
) -> Element {
    rsx! {
        div {
            class: "x-job-filter-section",
            h3 {
                class: "x-job-filter-section-title",
                FilterSectionIcon { category }
                "{category.display_name()}"
            }
            for value in options.iter() {
                FilterCheckbox {
                    key: "{value}",
                    category,
                    value: value.clone(),
                    selected_filters,
                    on_toggle,
                }
            }
        }
    }
}

#[component]
fn FilterSectionIcon(category: FilterCategory) -> Element {
    match category {
        FilterCategory::JobType => rsx! { Icon { icon: MdWork, style: "width: 16px; height: 16px; margin-right: 8px;" } },
        FilterCategory::Location => rsx! { Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; margin-right: 8px;" } },
        FilterCategory::Salary => rsx! { Icon { icon: MdAttachMoney, style: "width: 16px; height: 16px; margin-right: 8px;" } },
    }
}

#[component]
fn FilterCheckbox(
    category: FilterCategory,
    value: ReadSignal<String>,
    selected_filters: Signal<SelectionState>,
    on_toggle: Callback<(FilterCategory, String)>,
) -> Element {
    let is_checked = use_memo(move || selected_filters.read().is_selected(category, &value.read()));
    rsx! {
        label {
            class: "x-job-filter-option",
            input {
                r#type: "checkbox",
                checked: is_checked(),
                onchange: move |_| on_toggle((category, value.read().clone())),
            }
            span { "{value}" }
        }
    }
}
