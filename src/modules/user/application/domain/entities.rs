/// A persisted user record.
///
/// `status == true` marks an active user; `false` marks a soft-deleted one
/// that is kept only for history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub status: bool,
}
