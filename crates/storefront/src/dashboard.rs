//! Admin analytics dashboard.
//!
//! The report is gated on an administrative identity. Sales figures are
//! fixed demo data; the product count comes from the live catalog.

use rust_decimal::Decimal;

use shopfront_core::Price;

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::format::format_count;
use crate::models::User;

const MONTHLY_SALES: [(&str, i64); 12] = [
    ("Jan", 1800),
    ("Feb", 2200),
    ("Mar", 2700),
    ("Apr", 2400),
    ("May", 3100),
    ("Jun", 2800),
    ("Jul", 3500),
    ("Aug", 3200),
    ("Sep", 3800),
    ("Oct", 4000),
    ("Nov", 4500),
    ("Dec", 5200),
];

const CATEGORY_SALES: [(&str, i64); 3] = [
    ("Electronics", 5400),
    ("Furniture", 3200),
    ("Home & Living", 2100),
];

const TOTAL_REVENUE: i64 = 28_500;
const TOTAL_ORDERS: u64 = 384;
const TOTAL_CUSTOMERS: u64 = 1_294;

/// Sales total for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: &'static str,
    pub total: Decimal,
}

/// Sales total for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySales {
    pub name: &'static str,
    pub value: Decimal,
}

/// Direction of a stat card's change indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Positive,
    Neutral,
    Negative,
}

/// A headline metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub change_kind: ChangeKind,
}

/// Everything the admin dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardReport {
    pub stats: Vec<StatCard>,
    pub monthly_sales: Vec<MonthlySales>,
    pub category_sales: Vec<CategorySales>,
}

impl DashboardReport {
    /// Build the report for `viewer`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` when nobody is signed in and
    /// `AppError::Forbidden` when the viewer is not an administrator.
    pub fn build(viewer: Option<&User>, catalog: &Catalog) -> Result<Self> {
        let user = viewer.ok_or_else(|| AppError::Unauthorized("dashboard".to_string()))?;
        if !user.is_admin() {
            tracing::warn!(user_id = %user.id, "Dashboard access denied");
            return Err(AppError::Forbidden(format!(
                "user {} is not an administrator",
                user.id
            )));
        }

        let product_count = u64::try_from(catalog.len()).unwrap_or(u64::MAX);

        Ok(Self {
            stats: vec![
                StatCard {
                    title: "Total Revenue",
                    value: Price::usd(Decimal::from(TOTAL_REVENUE)).display(),
                    change: "+12.5%",
                    change_kind: ChangeKind::Positive,
                },
                StatCard {
                    title: "Total Orders",
                    value: format_count(TOTAL_ORDERS),
                    change: "+8.2%",
                    change_kind: ChangeKind::Positive,
                },
                StatCard {
                    title: "Total Products",
                    value: format_count(product_count),
                    change: "0",
                    change_kind: ChangeKind::Neutral,
                },
                StatCard {
                    title: "Total Customers",
                    value: format_count(TOTAL_CUSTOMERS),
                    change: "+18.7%",
                    change_kind: ChangeKind::Positive,
                },
            ],
            monthly_sales: MONTHLY_SALES
                .iter()
                .map(|&(month, total)| MonthlySales {
                    month,
                    total: Decimal::from(total),
                })
                .collect(),
            category_sales: CATEGORY_SALES
                .iter()
                .map(|&(name, value)| CategorySales {
                    name,
                    value: Decimal::from(value),
                })
                .collect(),
        })
    }

    /// Sum of the monthly sales series.
    #[must_use]
    pub fn annual_sales(&self) -> Decimal {
        self.monthly_sales.iter().map(|m| m.total).sum()
    }

    /// Each category's share of category sales, as a percentage.
    #[must_use]
    pub fn category_shares(&self) -> Vec<(&'static str, Decimal)> {
        let total: Decimal = self.category_sales.iter().map(|c| c.value).sum();
        if total.is_zero() {
            return Vec::new();
        }
        self.category_sales
            .iter()
            .map(|c| (c.name, (c.value * Decimal::ONE_HUNDRED / total).round_dp(1)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::{Role, UserId};

    use super::*;

    fn user(role: Role) -> User {
        User {
            id: UserId::new("u"),
            email: "u@example.com".to_owned(),
            name: "U".to_owned(),
            role,
        }
    }

    #[test]
    fn test_signed_out_is_unauthorized() {
        let err = DashboardReport::build(None, &Catalog::sample()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_shopper_is_forbidden() {
        let err = DashboardReport::build(Some(&user(Role::User)), &Catalog::sample()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_admin_report_contents() {
        let report = DashboardReport::build(Some(&user(Role::Admin)), &Catalog::sample()).unwrap();

        let values: Vec<(&str, &str)> = report
            .stats
            .iter()
            .map(|s| (s.title, s.value.as_str()))
            .collect();
        assert_eq!(
            values,
            [
                ("Total Revenue", "$28,500.00"),
                ("Total Orders", "384"),
                ("Total Products", "8"),
                ("Total Customers", "1,294"),
            ]
        );
        assert_eq!(report.monthly_sales.len(), 12);
        assert_eq!(report.annual_sales(), Decimal::from(39_200));
        assert_eq!(report.category_sales.len(), 3);
    }

    #[test]
    fn test_product_count_tracks_catalog() {
        let catalog = Catalog::new(Catalog::sample().products()[..2].to_vec());
        let report = DashboardReport::build(Some(&user(Role::Admin)), &catalog).unwrap();
        assert_eq!(report.stats[2].value, "2");
        assert_eq!(report.stats[2].change_kind, ChangeKind::Neutral);
    }

    #[test]
    fn test_category_shares() {
        let report = DashboardReport::build(Some(&user(Role::Admin)), &Catalog::sample()).unwrap();
        let shares = report.category_shares();
        assert_eq!(shares[0], ("Electronics", Decimal::new(505, 1)));
        assert_eq!(shares[2], ("Home & Living", Decimal::new(196, 1)));
    }
}
