//! Job listing cards shown next to the filter panel.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenInNew};
use jobboard_common::job_record::JobRecord;


#[component]
pub fn JobList(jobs: ReadSignal<Vec<JobRecord>>) -> Element {
    rsx! {
        ul {
            class: "x-job-list",
            if jobs.read().is_empty() {
                li { class: "x-job-list-empty", "No jobs to show yet." }
            }
            for (index, job) in jobs.read().iter().enumerate() {
                li {
                    key: "{index}",
                    JobCard { job: job.clone() }
                }
            }
        }
    }
}

#[component]
fn JobCard(job: ReadSignal<JobRecord>) -> Element {
    let job = job.read().clone();
    let title = job.title.clone().unwrap_or_else(|| "Untitled position".to_string());
    let company = job.company_name.clone().unwrap_or_default();
    let details = [job.job_type_value(), job.location_value(), job.salary.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" | ");

    rsx! {
        div {
            class: "x-job-card",
            div {
                class: "x-job-card-text",
                div { class: "x-job-card-title", "{title}" }
                div { class: "x-job-card-company", "{company}" }
                div { class: "x-job-card-details", "{details}" }
            }
            if let Some(url) = job.url.clone() {
                a {
                    class: "x-job-card-link",
                    href: url,
                    target: "_blank",
                    Icon { icon: MdOpenInNew, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}
