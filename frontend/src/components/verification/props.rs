use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VerificationProps {
    /// Verification token from the `/verificar/{token}` path.
    pub token: String,
}
