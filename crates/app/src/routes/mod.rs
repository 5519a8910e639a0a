pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

use crate::auth::{sign_out, use_auth};
use crate::host::BrowserHost;
use crate::Services;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogIn, LdLogOut, LdMountain, LdShield, LdUserPlus};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Navbar};

use dashboard::Dashboard;
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top navigation shared by every page.
///
/// Visibility is recomputed from storage whenever the route changes, so a
/// login or logout on one page is reflected on the next.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut auth = use_auth();

    {
        let services = services.clone();
        use_effect(use_reactive((&route,), move |(route,)| {
            let services = services.clone();
            tracing::debug!(?route, "refreshing navigation state");
            spawn(async move {
                let credential = services.session.credential().await;
                auth.apply(credential.as_ref());
            });
        }));
    }

    let handle_logout = move |_: MouseEvent| {
        let services = services.clone();
        let host = BrowserHost::new(navigator);
        spawn(async move {
            sign_out(&services.session, &host).await;
            auth.apply(None);
        });
    };

    let vis = *auth.nav.read();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "app-header",
            Navbar {
                div { class: "navbar-bar",
                    Link { to: Route::Home {}, class: "nav-link nav-brand",
                        Icon::<LdMountain> { icon: LdMountain, width: 18, height: 18 }
                        "Estado del paso"
                    }

                    div { class: "navbar-spacer" }

                    if vis.admin_link {
                        Link { id: "admin-dashboard-link", to: Route::Dashboard {}, class: "nav-link",
                            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                            "Dashboard"
                        }
                    }

                    if vis.unauthenticated_options {
                        div { id: "unauthenticated-options", class: "nav-group",
                            Link { to: Route::Login {}, class: "nav-link",
                                Icon::<LdLogIn> { icon: LdLogIn, width: 18, height: 18 }
                                "Login"
                            }
                            Link { to: Route::Register {}, class: "nav-link",
                                Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 }
                                "Register"
                            }
                        }
                    }

                    if vis.authenticated_options {
                        div { id: "authenticated-options", class: "nav-group",
                            Button {
                                id: "logout-button",
                                variant: ButtonVariant::Ghost,
                                onclick: handle_logout,
                                Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                                "Logout"
                            }
                        }
                    }
                }
            }
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
