use crate::auth::{sign_up, use_auth};
use crate::host::BrowserHost;
use crate::routes::Route;
use crate::Services;
use dioxus::prelude::*;
use shared_types::RegisterRequest;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};

/// Account creation. A successful registration signs the new user in.
#[component]
pub fn Register() -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let services = services.clone();
        let host = BrowserHost::new(navigator);
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let request = RegisterRequest {
                username: username(),
                email: email(),
                password: password(),
            };
            match sign_up(&services.session, &services.api, &host, request).await {
                Ok(credential) => auth.apply(Some(&credential)),
                Err(err) => {
                    tracing::warn!(error = %err, "registration failed");
                    error_msg.set(Some(err.message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Register to follow the pass from your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_register,
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                placeholder: "Choose a username",
                                value: username(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Create a password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }

                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
