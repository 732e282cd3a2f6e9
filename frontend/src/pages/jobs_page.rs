use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use jobboard_common::{job_filters::{FilterCategory, OptionSet, SelectionState}, job_record::JobRecord};
use crate::{
    components::{error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay}, job_filter_components::{job_filters::JobFilters, job_list::JobList}},
    data_definitions::sample_jobs::load_sample_jobs,
};


/// One line per category that has something checked.
fn selection_summary(selection: &SelectionState) -> Vec<String> {
    FilterCategory::ALL
        .into_iter()
        .filter(|c| !selection.values(*c).is_empty())
        .map(|c| format!("{}: {}", c.display_name(), selection.values(c).join(", ")))
        .collect()
}

fn options_summary(options: &OptionSet) -> String {
    format!(
        "{} job types and {} candidate locations in this listing",
        options.job_type.len(),
        options.location.len()
    )
}

/// Job board page
#[component]
pub fn JobsPage() -> Element {
    let loaded = use_hook(|| {
        load_sample_jobs().map_err(|e| {
            error!("Could not load jobs: {e:#}");
            format!("{e:#}")
        })
    });

    match loaded {
        Ok(jobs) => rsx! {
            document::Title { "Job Board" }
            JobsPageRootComponent { jobs }
        },
        Err(error_txt) => rsx! {
            ComponentErrorDisplay { error_txt }
        },
    }
}

#[component]
fn JobsPageRootComponent(jobs: ReadSignal<Vec<JobRecord>>) -> Element {
    let mut available_options = use_signal(|| None::<OptionSet>);
    let mut selected_filters = use_signal(SelectionState::default);

    let on_options_changed = use_callback(move |options: OptionSet| {
        available_options.set(Some(options));
    });
    let on_selection_changed = use_callback(move |selection: SelectionState| {
        selected_filters.set(selection);
    });

    let summary = selection_summary(&selected_filters.read());
    let options_line = available_options.read().as_ref().map(options_summary);

    rsx! {
        div {
            id: "x-jobs-page-root-component",
            class: "x-jobs-page",
            div {
                id: "x-jobs-left-panel",
                class: "x-jobs-left-panel",
                ComponentErrorBoundary {
                    JobFilters { jobs, on_options_changed, on_selection_changed }
                }
            }
            div {
                id: "x-jobs-right-panel",
                class: "x-jobs-right-panel",
                div {
                    class: "x-jobs-summary",
                    if let Some(line) = options_line {
                        p { "{line}" }
                    }
                    if summary.is_empty() {
                        p { "No filters selected" }
                    }
                    for line in summary.iter() {
                        p { key: "{line}", "{line}" }
                    }
                }
                JobList { jobs }
            }
        }
    }
}
