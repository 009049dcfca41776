mod create_user;
pub mod dto;
mod get_user;
mod get_users;
mod soft_delete_user;
mod update_user;

pub use create_user::*;
pub use dto::{UserPayload, UserResponse};
pub use get_user::*;
pub use get_users::*;
pub use soft_delete_user::*;
pub use update_user::*;
