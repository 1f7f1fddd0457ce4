//! Actix plumbing shared by the server binary.

pub mod middleware;

pub use middleware::SecurityHeaders;
