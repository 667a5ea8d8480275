use dioxus::prelude::*;

use crate::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-10 justify-center h-screen",
            h1 { class: "text-4xl font-bold", "Loop" }
            Link {
                class: "text-white p-2 rounded-xl bg-violet-600",
                to: Route::Register {},
                "Create an account"
            }
        }
    }
}
