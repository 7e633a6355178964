use sea_orm::DatabaseConnection;

use crate::server::{billing::BillingCalculator, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub calculator: BillingCalculator,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            calculator: BillingCalculator::new(config.negative_amount_policy),
        }
    }
}

/// State with the default calculator, which preserves negative amounts
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            calculator: BillingCalculator::default(),
        }
    }
}
