mod create_user_use_case;
mod get_user_use_case;
mod list_users_use_case;
mod soft_delete_user_use_case;
mod update_user_use_case;

pub use create_user_use_case::{CreateUserError, CreateUserUseCase};
pub use get_user_use_case::{GetUserError, GetUserUseCase};
pub use list_users_use_case::{ListUsersError, ListUsersUseCase};
pub use soft_delete_user_use_case::{SoftDeleteUserError, SoftDeleteUserUseCase};
pub use update_user_use_case::{UpdateUserError, UpdateUserUseCase};
