pub mod documents;
pub mod notification;
pub mod order;
pub mod profile;
pub mod settings;
pub mod template;
