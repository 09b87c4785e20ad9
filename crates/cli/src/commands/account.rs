//! Identity commands.

use shopfront_storefront::error::Result;
use shopfront_storefront::services::AuthEvent;
use shopfront_storefront::state::AppState;

fn render(event: &AuthEvent) -> String {
    format!("{}: {}", event.title(), event.description())
}

/// Sign in with a demo account.
///
/// # Errors
///
/// Returns `AppError::Auth` when the credentials match no account.
pub async fn login(state: &mut AppState, email: &str, password: &str) -> Result<String> {
    let event = state.auth_mut().login(email, password).await?;
    Ok(render(&event))
}

/// Create a standard account and sign it in.
///
/// # Errors
///
/// Returns `AppError::Auth` when the email belongs to a demo account.
pub async fn register(
    state: &mut AppState,
    email: &str,
    password: &str,
    name: &str,
) -> Result<String> {
    let event = state.auth_mut().register(email, password, name).await?;
    Ok(render(&event))
}

/// Sign out.
pub fn logout(state: &mut AppState) -> String {
    render(&state.auth_mut().logout())
}

/// Describe the signed-in user.
pub fn whoami(state: &AppState) -> String {
    state.auth().current_user().map_or_else(
        || "Not signed in".to_owned(),
        |user| format!("{} <{}> ({})", user.name, user.email, user.role),
    )
}
