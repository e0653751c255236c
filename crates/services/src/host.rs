use std::sync::Arc;

use crate::api::TokenSource;

/// Capabilities supplied by the application shell hosting the client.
pub trait HostShell {
    /// Opaque identity proof; empty when running unauthenticated.
    fn identity_token(&self) -> String;

    /// Show a plain-text alert to the user.
    fn show_alert(&self, message: &str);

    /// Use the full available viewport.
    fn expand(&self) {}

    /// Ask before the user closes the app.
    fn enable_closing_confirmation(&self) {}
}

impl<H: HostShell + ?Sized> HostShell for Arc<H> {
    fn identity_token(&self) -> String {
        (**self).identity_token()
    }

    fn show_alert(&self, message: &str) {
        (**self).show_alert(message);
    }

    fn expand(&self) {
        (**self).expand();
    }

    fn enable_closing_confirmation(&self) {
        (**self).enable_closing_confirmation();
    }
}

/// Token source asking `host` for its identity token on every request.
#[must_use]
pub fn host_token_source<H>(host: Arc<H>) -> TokenSource
where
    H: HostShell + Send + Sync + 'static,
{
    Arc::new(move || host.identity_token())
}
