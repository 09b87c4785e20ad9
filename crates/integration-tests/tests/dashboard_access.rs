//! Admin gating of the analytics dashboard.

use shopfront_integration_tests::TestContext;
use shopfront_storefront::dashboard::DashboardReport;
use shopfront_storefront::error::AppError;

#[tokio::test]
async fn test_dashboard_follows_identity() {
    let ctx = TestContext::in_memory();
    let mut state = ctx.boot().await;

    let signed_out = DashboardReport::build(state.auth().current_user(), state.catalog());
    assert!(matches!(signed_out, Err(AppError::Unauthorized(_))));

    state
        .auth_mut()
        .login("user@example.com", "user")
        .await
        .expect("user login");
    let shopper = DashboardReport::build(state.auth().current_user(), state.catalog());
    assert!(matches!(shopper, Err(AppError::Forbidden(_))));

    state
        .auth_mut()
        .login("admin@example.com", "admin")
        .await
        .expect("admin login");
    let report = DashboardReport::build(state.auth().current_user(), state.catalog())
        .expect("admin report");
    assert_eq!(report.stats.len(), 4);
    assert_eq!(report.monthly_sales.len(), 12);
}

#[tokio::test]
async fn test_admin_session_restored_after_reboot() {
    let ctx = TestContext::in_memory();
    ctx.boot()
        .await
        .auth_mut()
        .login("admin@example.com", "admin")
        .await
        .expect("admin login");

    let state = ctx.boot().await;

    assert!(DashboardReport::build(state.auth().current_user(), state.catalog()).is_ok());
}
