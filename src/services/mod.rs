pub mod collectors;
pub mod decoder;
pub mod dispatcher;
pub mod editors;
pub mod encoder;
pub mod formatter;
pub mod registry;
pub mod resetter;
pub mod session_service;
pub mod submission_service;
