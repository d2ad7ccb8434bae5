pub mod badges;
pub mod company_page;
pub mod confirm_dialog;
pub mod dashboard;
pub mod document_card;
pub mod feedback;
pub mod notifications;
pub mod order_detail;
pub mod templates_page;
pub mod verification;
