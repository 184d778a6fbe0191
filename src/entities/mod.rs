pub mod courses;
pub mod tokens;
pub mod users;
