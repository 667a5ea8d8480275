//! Registration page view with username/email/password registration.

use dioxus::prelude::*;

use crate::registration::{use_registration_form, Field, RouterNavigation, ServerRegistration};

const INPUT_CLASS: &str = "w-full p-2 border-2 rounded-md border-gray-300 text-gray-900 focus:border-blue-500 focus:ring-blue-500";

/// Register page component.
#[component]
pub fn RegisterView() -> Element {
    let registration = use_registration_form();
    let navigator = RouterNavigation(use_navigator());

    let on_field = move |field: Field| {
        let mut registration = registration;
        move |evt: FormEvent| registration.update_field(field, evt.value())
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            registration.submit(&ServerRegistration, &navigator).await;
        });
    };

    let submitting = registration.is_submitting();

    rsx! {
        div {
            class: "flex flex-col items-center gap-10 justify-center h-screen",

            h1 {
                class: "text-4xl font-bold text-white",
                "Register"
            }

            form {
                onsubmit: handle_register,
                class: "w-full mt-10 flex flex-col gap-5 max-w-md",

                input {
                    class: INPUT_CLASS,
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: registration.value(Field::Username),
                    oninput: on_field(Field::Username),
                }

                input {
                    class: INPUT_CLASS,
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: registration.value(Field::Email),
                    oninput: on_field(Field::Email),
                }

                input {
                    class: INPUT_CLASS,
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: registration.value(Field::Password),
                    oninput: on_field(Field::Password),
                }

                input {
                    class: INPUT_CLASS,
                    r#type: "password",
                    placeholder: "Confirm Password",
                    required: true,
                    value: registration.value(Field::ConfirmPassword),
                    oninput: on_field(Field::ConfirmPassword),
                }

                button {
                    class: "w-full p-2 bg-violet-500 text-white rounded-md disabled:opacity-50",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Registering..." } else { "Register" }
                }
            }

            if let Some(err) = registration.error() {
                p {
                    class: "text-red-500",
                    "{err}"
                }
            }

            button {
                class: "text-white p-2 rounded-xl bg-violet-600",
                r#type: "button",
                onclick: move |_| registration.go_home(&navigator),
                "Have a "
                span { class: "font-bold", "Loop" }
            }
        }
    }
}
