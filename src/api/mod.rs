//! Lambda handlers and request/response plumbing.

pub mod email;
pub mod helpers;
pub mod parsing;
pub mod payment;
