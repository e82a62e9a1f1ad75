//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User record and creation input
//! - `repository`: Storage trait for user records
//! - `report`: Plain-text report rendering
//! - `service`: User service trait and default implementation
//!
//! # Usage
//!
//! ```ignore
//! use roster_core::user::{DefaultUserService, NewUser, UserService};
//! ```

mod model;
mod report;
mod repository;
mod service;

// Re-export public API
pub use model::{NewUser, User, UserStatus};
pub use report::{EMPTY_REPORT_LINE, REPORT_HEADER, render_report};
pub use repository::UserRepository;
pub use service::{DefaultUserService, UserService};
