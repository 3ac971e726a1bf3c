//! Static seed data compiled into the binary.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::navigation::MenuSection;
use crate::orders::OrderRecord;

const ORDERS_JSON: &str = include_str!("../fixtures/orders.json");
const DASHBOARD_CARDS_JSON: &str =
    include_str!("../fixtures/dashboard_cards.json");
const NOTIFICATIONS_JSON: &str = include_str!("../fixtures/notifications.json");
const ACTIVITIES_JSON: &str = include_str!("../fixtures/activities.json");
const CONTACTS_JSON: &str = include_str!("../fixtures/contacts.json");
const MENU_JSON: &str = include_str!("../fixtures/menu.json");
const TOP_PRODUCTS_JSON: &str = include_str!("../fixtures/top_products.json");
const REVENUE_BY_LOCATION_JSON: &str =
    include_str!("../fixtures/revenue_by_location.json");
const PROJECTIONS_JSON: &str = include_str!("../fixtures/projections.json");

/// Errors raised while decoding embedded fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture `{name}` is malformed: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Dashboard metric card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricCard {
    pub id: u32,
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// Entry of the notification, activity and contact lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationRevenue {
    pub city: String,
    pub revenue_k: u32,
}

/// Projection and actual values for one month, in millions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonthlyProjection {
    pub month: String,
    pub actual: u32,
    pub projection: u32,
}

/// All seed data used by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub orders: Vec<OrderRecord>,
    pub metric_cards: Vec<MetricCard>,
    pub notifications: Vec<FeedItem>,
    pub activities: Vec<FeedItem>,
    pub contacts: Vec<FeedItem>,
    pub menu: Vec<MenuSection>,
    pub top_products: Vec<TopProduct>,
    pub revenue_by_location: Vec<LocationRevenue>,
    pub projections: Vec<MonthlyProjection>,
}

fn parse<T: DeserializeOwned>(
    name: &'static str,
    raw: &str,
) -> Result<T, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Parse {
        name,
        source,
    })
}

impl Fixtures {
    pub fn load() -> Result<Self, FixtureError> {
        let fixtures = Self {
            orders: parse("orders", ORDERS_JSON)?,
            metric_cards: parse("dashboard_cards", DASHBOARD_CARDS_JSON)?,
            notifications: parse("notifications", NOTIFICATIONS_JSON)?,
            activities: parse("activities", ACTIVITIES_JSON)?,
            contacts: parse("contacts", CONTACTS_JSON)?,
            menu: parse("menu", MENU_JSON)?,
            top_products: parse("top_products", TOP_PRODUCTS_JSON)?,
            revenue_by_location: parse(
                "revenue_by_location",
                REVENUE_BY_LOCATION_JSON,
            )?,
            projections: parse("projections", PROJECTIONS_JSON)?,
        };
        log::debug!(
            "loaded fixtures: {} orders, {} cards",
            fixtures.orders.len(),
            fixtures.metric_cards.len()
        );
        Ok(fixtures)
    }
}
