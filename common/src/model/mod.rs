pub mod job;
pub mod notification;
pub mod person;
pub mod upload;
