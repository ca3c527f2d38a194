//! Request extractors.

mod user;
pub use user::{RequestedUser, USER_ID_HEADER, USER_ID_QUERY};
pub(crate) use user::parse_numeric_id;
