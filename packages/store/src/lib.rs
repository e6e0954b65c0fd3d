pub mod list;
pub mod models;
pub mod row;
pub mod validation;

pub use list::{ListStatus, UserList};
pub use models::{CreateUserRequest, ErrorBody, MessageBody, UpdateUserRequest, User};
pub use row::{RowEditor, SaveAction};
pub use validation::{validate_new_name, NameError};
