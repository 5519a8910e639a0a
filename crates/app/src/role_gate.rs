use dioxus::prelude::*;
use shared_types::Role;

/// Render children only for admins; everyone else sees nothing.
#[component]
pub fn RoleGate(role: Role, children: Element) -> Element {
    if role.is_admin() {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}
