// Plain elements
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;

// Primitive wrappers
pub mod label;
pub mod navbar;
pub mod separator;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use separator::*;
