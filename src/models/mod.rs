pub mod course;
pub mod token;
pub mod user;
