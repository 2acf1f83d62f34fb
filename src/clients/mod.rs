//! Client modules for external API interactions

pub mod brevo;
pub mod stripe;

pub use brevo::BrevoClient;
pub use stripe::StripeClient;
