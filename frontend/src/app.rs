use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::pages::jobs_page::JobsPage;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            JobsPage {}
        }
    }
}
