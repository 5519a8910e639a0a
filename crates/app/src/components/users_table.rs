use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::UserRecord;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow,
};

fn role_badge_variant(role: &str) -> BadgeVariant {
    match role {
        "admin" => BadgeVariant::Primary,
        _ => BadgeVariant::Secondary,
    }
}

/// Admin user-management table. Each row raises edit/delete with the user id.
#[component]
pub fn UsersTable(
    users: Vec<UserRecord>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users_table.css") }

        DataTable {
            DataTableHeader {
                DataTableColumn { "Username" }
                DataTableColumn { "Email" }
                DataTableColumn { "Role" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                for user in users {
                    UserRow { key: "{user.id}", user, on_edit, on_delete }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: UserRecord,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_id = user.id.clone();
    let delete_id = user.id.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "{user.username}" }
            DataTableCell { "{user.email}" }
            DataTableCell {
                Badge { variant: role_badge_variant(&user.role), "{user.role}" }
            }
            DataTableCell {
                div { class: "users-row-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_edit.call(edit_id.clone()),
                        Icon::<LdPencil> { icon: LdPencil, width: 14, height: 14 }
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                        "Delete"
                    }
                }
            }
        }
    }
}
