pub mod console;
pub mod etl;
pub mod notification;
pub mod person_form;
pub mod persons;
