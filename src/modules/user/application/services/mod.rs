pub mod create_user_service;
pub mod get_user_service;
pub mod list_users_service;
pub mod soft_delete_user_service;
pub mod update_user_service;

pub use create_user_service::CreateUserService;
pub use get_user_service::GetUserService;
pub use list_users_service::ListUsersService;
pub use soft_delete_user_service::SoftDeleteUserService;
pub use update_user_service::UpdateUserService;
