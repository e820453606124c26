//! Data shown by the dashboard shell.
//!
//! None of these values are computed; a data source supplies them as
//! fixtures and the TUI renders them as-is.

use serde::{Deserialize, Serialize};

use crate::navigation::{IconHandle, NavigationCatalog};

/// Direction of a price or indicator movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    /// Compact marker used in tables and the ticker.
    pub fn symbol(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "–",
        }
    }
}

/// The signed-in user as shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    /// Up to two uppercase initials, used in place of an avatar image.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    /// Relative time label, e.g. "Há 15 minutos".
    pub time: String,
}

/// One entry of the scrolling price ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerQuote {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub change: String,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Headline indicator card on the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub title: String,
    pub icon: IconHandle,
    pub value: String,
    pub delta: String,
    #[serde(default)]
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSlice {
    pub name: String,
    /// Revenue in whole reais.
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitPoint {
    pub month: String,
    pub profit: u64,
}

/// Row of the current commodity quotes table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommodityQuote {
    pub name: String,
    pub price: String,
    pub change: String,
    #[serde(default)]
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub icon: IconHandle,
}

/// Everything the shell needs to render, supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFixtures {
    pub user: UserProfile,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub ticker: Vec<TickerQuote>,
    #[serde(default)]
    pub kpis: Vec<KpiCard>,
    #[serde(default)]
    pub sales_by_product: Vec<SalesSlice>,
    #[serde(default)]
    pub profit_trend: Vec<ProfitPoint>,
    #[serde(default)]
    pub commodity_quotes: Vec<CommodityQuote>,
    #[serde(default)]
    pub quick_actions: Vec<QuickAction>,
    pub navigation: NavigationCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let user = UserProfile {
            name: "usuário admin extra".into(),
            email: "admin@locks.com.br".into(),
        };
        assert_eq!(user.initials(), "UA");
    }

    #[test]
    fn ticker_quote_defaults_trend_and_unit() {
        let quote: TickerQuote = serde_json::from_str(r#"{"id":1,"name":"USD/BRL","price":"5.4572","change":"+0.0015"}"#).expect("quote");
        assert_eq!(quote.trend, Trend::Stable);
        assert!(quote.unit.is_none());
    }
}
