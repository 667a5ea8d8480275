//! Registration page.

use dioxus::prelude::*;
use ui::RegisterView;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        RegisterView {}
    }
}
