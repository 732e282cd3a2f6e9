//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render failure in boundary {}: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        class: "x-error-panel",
                        h1 { "Something went wrong" }
                        p { "Boundary: {boundary_name}" }
                        a { href: "/", "Reload job board" }
                        pre { "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

/// Contains a failing panel so the rest of the page keeps working.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-error-retry",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-panel",
            h2 { "Could not show this panel" }
            pre { "{error_txt}" }
            {children}
        }
    }
}
