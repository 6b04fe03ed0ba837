use crate::shared::indicators::{IndicatorId, IndicatorStatus, IndicatorValue, ValueFormat};
use serde::{Deserialize, Serialize};

/// Точка ряда для графиков: подпись и значение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Именованный ряд графика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSalesRow {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub amount: f64,
}

/// Элемент ленты правой панели (уведомления, действия)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub icon: String,
    pub title: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewData {
    pub kpis: Vec<IndicatorValue>,
    pub projections: ChartSeries,
    pub actuals: ChartSeries,
    pub revenue_current_week: ChartSeries,
    pub revenue_previous_week: ChartSeries,
    pub revenue_by_location: ChartSeries,
    pub total_sales: ChartSeries,
    pub top_products: Vec<ProductSalesRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFeed {
    pub notifications: Vec<FeedItem>,
    pub activities: Vec<FeedItem>,
    pub contacts: Vec<Contact>,
}

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn series(name: &str, labels: &[&str], values: &[f64]) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        points: labels
            .iter()
            .zip(values)
            .map(|(label, value)| ChartPoint::new(label, *value))
            .collect(),
    }
}

fn kpi(id: &str, label: &str, icon: &str, format: ValueFormat, value: f64, change: f64) -> IndicatorValue {
    IndicatorValue {
        id: IndicatorId::new(id),
        label: label.to_string(),
        icon: icon.to_string(),
        format,
        value: Some(value),
        change_percent: Some(change),
        status: IndicatorStatus::from_change(Some(change)),
        subtitle: None,
    }
}

/// Данные главного дашборда
pub fn overview_data() -> OverviewData {
    OverviewData {
        kpis: vec![
            kpi("customers", "Customers", "customers", ValueFormat::Integer, 3781.0, 11.01),
            kpi("orders", "Orders", "orders", ValueFormat::Integer, 1219.0, -0.03),
            kpi(
                "revenue",
                "Revenue",
                "cash",
                ValueFormat::Money { currency: "$".to_string() },
                695.0,
                15.03,
            ),
            kpi("growth", "Growth", "activity", ValueFormat::Percent { decimals: 1 }, 30.1, 6.08),
        ],
        projections: series("Projections", &MONTHS, &[20.0, 24.0, 21.0, 27.0, 18.0, 24.0]),
        actuals: series("Actuals", &MONTHS, &[17.0, 20.0, 18.0, 23.0, 15.0, 20.0]),
        revenue_current_week: series(
            "Current Week",
            &MONTHS,
            &[12.0, 9.0, 11.0, 17.0, 21.0, 20.0],
        ),
        revenue_previous_week: series(
            "Previous Week",
            &MONTHS,
            &[8.0, 17.0, 14.0, 11.0, 14.0, 23.0],
        ),
        revenue_by_location: series(
            "Revenue by Location",
            &["New York", "San Francisco", "Sydney", "Singapore"],
            &[72.0, 39.0, 25.0, 61.0],
        ),
        total_sales: series(
            "Total Sales",
            &["Direct", "Affiliate", "Sponsored", "E-mail"],
            &[300.56, 135.18, 154.02, 48.96],
        ),
        top_products: vec![
            product("ASOS Ridley High Waist", 79.49, 82, 6518.18),
            product("Marco Lightweight Shirt", 128.50, 37, 4754.50),
            product("Half Sleeve Shirt", 39.99, 64, 2559.36),
            product("Lightweight Jacket", 20.00, 184, 3680.00),
            product("Marco Shoes", 79.49, 64, 1965.81),
        ],
    }
}

fn product(name: &str, price: f64, quantity: u32, amount: f64) -> ProductSalesRow {
    ProductSalesRow {
        name: name.to_string(),
        price,
        quantity,
        amount,
    }
}

fn feed(icon: &str, title: &str, time_label: &str) -> FeedItem {
    FeedItem {
        icon: icon.to_string(),
        title: title.to_string(),
        time_label: time_label.to_string(),
    }
}

/// Ленты правой панели
pub fn activity_feed() -> ActivityFeed {
    ActivityFeed {
        notifications: vec![
            feed("bug", "You have a bug that needs to be fixed.", "Just now"),
            feed("user", "New user registered", "59 minutes ago"),
            feed("bug", "You have a bug that needs to be fixed.", "12 hours ago"),
            feed("radio", "Andi Lane subscribed to you", "Today, 11:59 AM"),
        ],
        activities: vec![
            feed("user", "You have a bug that needs to be fixed.", "Just now"),
            feed("user", "Released a new version", "59 minutes ago"),
            feed("user", "Submitted a bug", "12 hours ago"),
            feed("user", "Modified A data in Page X", "Today, 11:59 AM"),
            feed("user", "Deleted a page in Project X", "Feb 2, 2023"),
        ],
        contacts: ["Natali Craig", "Drew Cano", "Orlando Diggs", "Andi Lane", "Kate Morrison", "Koray Okumus"]
            .iter()
            .map(|name| Contact {
                name: name.to_string(),
                initials: initials(name),
            })
            .collect(),
    }
}

/// Инициалы из первых букв слов имени
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
