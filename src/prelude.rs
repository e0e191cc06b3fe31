pub use crate::cli::{Console, ContactManager, command, run_app};
pub use crate::domain::{
    Command,
    contact::{self, Contact},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, MemStore, TxtStore, memory};
pub use crate::validation::{is_valid_email, is_valid_phone_number};
