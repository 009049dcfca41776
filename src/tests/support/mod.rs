pub mod app_state_builder;
pub mod in_memory_user_store;
pub mod stubs;
