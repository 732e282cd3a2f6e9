//! Frontend application entry point.

use jobboard_frontend::app::App;

fn main() {
    dioxus::launch(App);
}
