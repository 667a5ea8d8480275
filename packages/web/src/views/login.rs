//! Login page view. Sign-in itself is served by a separate service.

use dioxus::prelude::*;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-10 justify-center h-screen",
            h1 { class: "text-4xl font-bold", "Sign in" }
            p { "Your account is ready. Sign in to start looping." }
            Link {
                class: "text-white p-2 rounded-xl bg-violet-600",
                to: Route::Home {},
                "Back home"
            }
        }
    }
}
