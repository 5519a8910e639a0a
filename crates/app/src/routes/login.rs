use crate::auth::{sign_in, use_auth};
use crate::host::BrowserHost;
use crate::routes::Route;
use crate::Services;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};

/// Email/password sign-in. On success the server decides where to go next.
#[component]
pub fn Login() -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let services = services.clone();
        let host = BrowserHost::new(navigator);
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let request = LoginRequest {
                email: email(),
                password: password(),
            };
            match sign_in(&services.session, &services.api, &host, request).await {
                Ok(credential) => auth.apply(Some(&credential)),
                Err(err) => {
                    tracing::warn!(error = %err, "sign in failed");
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
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "user@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }

                    p { class: "auth-link",
                        "No account yet? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
