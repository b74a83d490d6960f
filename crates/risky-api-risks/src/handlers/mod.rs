//! HTTP handlers for the Risk API.

pub mod create;
pub mod get;
pub mod list;

pub use create::create_risk_handler;
pub use get::get_risk_handler;
pub use list::list_risks_handler;
