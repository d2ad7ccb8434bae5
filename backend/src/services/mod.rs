pub mod company;
pub mod notifications;
pub mod orders;
pub mod templates;
pub mod verification;
