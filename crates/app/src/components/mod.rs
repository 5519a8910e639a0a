pub mod pass_status_panel;
pub mod users_table;

pub use pass_status_panel::PassStatusPanel;
pub use users_table::UsersTable;
