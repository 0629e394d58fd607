/// Public calendar endpoints
pub mod calendar;
/// Admin dashboard endpoints
pub mod dashboard;
/// REST error type
pub mod error;
/// Public event listing endpoints
pub mod events;
