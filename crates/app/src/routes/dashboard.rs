use crate::admin_actions::{delete_user, edit_user_role};
use crate::auth::{sign_out, use_auth};
use crate::components::UsersTable;
use crate::dashboard_loader::{load_dashboard, DashboardData, DashboardView};
use crate::host::{BrowserHost, Destination};
use crate::role_gate::RoleGate;
use crate::Services;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::{AppError, UserRecord};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Separator,
};

/// Signed-in landing page. Admins also get the user management table.
#[component]
pub fn Dashboard() -> Element {
    let services = use_context::<Services>();
    let navigator = use_navigator();
    let mut auth = use_auth();

    let view = {
        let services = services.clone();
        use_resource(move || {
            let services = services.clone();
            async move {
                let host = BrowserHost::new(navigator);
                let view = load_dashboard(&services.session, &services.api, &host).await;
                if view == DashboardView::Redirected(Destination::Root) {
                    auth.apply(None);
                }
                view
            }
        })
    };

    let handle_logout = move |_: MouseEvent| {
        let services = services.clone();
        let host = BrowserHost::new(navigator);
        spawn(async move {
            sign_out(&services.session, &host).await;
            auth.apply(None);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "dashboard-heading",
                h2 { class: "dashboard-title", "Dashboard" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: handle_logout,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Logout"
                }
            }

            match view() {
                None => rsx! {
                    p { class: "dashboard-muted", "Loading..." }
                },
                Some(DashboardView::Redirected(to)) => rsx! {
                    p { class: "dashboard-muted", "Redirecting to {to.path()}..." }
                },
                Some(DashboardView::Ready(data)) => rsx! {
                    DashboardBody { data, view }
                },
            }
        }
    }
}

#[component]
fn DashboardBody(data: DashboardData, view: Resource<DashboardView>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Profile" }
            }
            CardContent {
                p { "Username: " span { id: "username", "{data.profile.username}" } }
                p { "Role: " span { id: "role", "{data.profile.role}" } }
            }
        }

        RoleGate {
            role: data.role,
            Separator {}
            section { id: "adminSection", class: "dashboard-admin",
                AdminUsers { users: data.users.clone(), view }
            }
        }
    }
}

#[component]
fn AdminUsers(
    users: Option<Result<Vec<UserRecord>, AppError>>,
    view: Resource<DashboardView>,
) -> Element {
    let mut view = view;
    let services = use_context::<Services>();
    let navigator = use_navigator();

    let on_edit = {
        let services = services.clone();
        move |user_id: String| {
            let services = services.clone();
            let host = BrowserHost::new(navigator);
            spawn(async move {
                let outcome = edit_user_role(&services.session, &services.api, &host, &user_id).await;
                if outcome.report(&host).await {
                    view.restart();
                }
            });
        }
    };

    let on_delete = move |user_id: String| {
        let services = services.clone();
        let host = BrowserHost::new(navigator);
        spawn(async move {
            let outcome = delete_user(&services.session, &services.api, &host, &user_id).await;
            if outcome.report(&host).await {
                view.restart();
            }
        });
    };

    match users {
        None => rsx! {},
        Some(Ok(users)) => rsx! {
            h3 { class: "dashboard-section-title", "Users" }
            UsersTable { users, on_edit, on_delete }
        },
        Some(Err(err)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Error" }
                    CardDescription { "Failed to load users." }
                }
                CardContent {
                    p { class: "dashboard-error-text", "{err}" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| view.restart(),
                        "Retry"
                    }
                }
            }
        },
    }
}
