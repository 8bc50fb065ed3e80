pub mod person;
pub mod session;
pub mod status;
pub mod view;
