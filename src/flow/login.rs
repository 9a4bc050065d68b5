//! Login flow: authenticate and navigate to the application root.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{AuthGateway, Navigator};
use crate::net::api::ApiError;
use crate::net::types::User;

/// Submit a credential pair to the auth service.
///
/// On success, exactly one navigation to `/` occurs and the session user is
/// returned. On failure no navigation happens; the caller surfaces the error
/// and leaves the form state intact for retry.
///
/// # Errors
///
/// Propagates the auth service's [`ApiError`] unchanged.
pub async fn submit_login<A: AuthGateway, N: Navigator>(
    auth: &A,
    nav: &N,
    email: &str,
    secret: &str,
) -> Result<User, ApiError> {
    let user = auth.login(email, secret).await?;
    nav.navigate("/");
    Ok(user)
}
