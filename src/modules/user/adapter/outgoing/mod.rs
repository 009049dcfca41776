pub mod schema;
pub mod sea_orm_entity;
mod user_query_postgres;
mod user_repository_postgres;

pub use schema::ensure_schema;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
