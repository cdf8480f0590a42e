pub mod application;
pub mod course;
pub mod job;
pub mod user;
