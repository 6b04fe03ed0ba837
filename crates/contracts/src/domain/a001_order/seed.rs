//! Встроенный набор заказов.
//!
//! Данные лежат в `seed.json` рядом с модулем и вшиваются в бинарник.
//! Ошибка разбора — ошибка авторинга данных, а не рабочая ситуация.

use super::aggregate::OrderRecord;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;

const SEED_JSON: &str = include_str!("seed.json");

/// Загружает встроенный список заказов
pub fn load_orders() -> Result<Vec<OrderRecord>> {
    parse_orders(SEED_JSON).context("embedded order seed is invalid")
}

/// Разбирает список заказов из JSON и проверяет уникальность идентификаторов
pub fn parse_orders(json: &str) -> Result<Vec<OrderRecord>> {
    let orders: Vec<OrderRecord> =
        serde_json::from_str(json).context("failed to parse order records")?;

    let mut seen = HashSet::new();
    for order in &orders {
        if order.id.trim().is_empty() {
            bail!("order record with empty id");
        }
        if !seen.insert(order.id.as_str()) {
            bail!("duplicate order id {}", order.id);
        }
    }

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::OrderStatus;

    #[test]
    fn test_embedded_seed_loads() {
        let orders = load_orders().unwrap();
        assert_eq!(orders.len(), 10);
        assert_eq!(orders[0].id, "#CM9801");
        assert_eq!(orders[9].id, "#CM9810");
        assert_eq!(orders[3].status, OrderStatus::Approved);
    }

    #[test]
    fn test_missing_avatar_is_none() {
        let orders = load_orders().unwrap();
        let orlando = orders.iter().find(|o| o.id == "#CM9809").unwrap();
        assert_eq!(orlando.user.avatar, None);
        assert_eq!(orlando.user.initials, "OD");

        let without_avatar: Vec<&str> = orders
            .iter()
            .filter(|o| o.user.avatar.is_none())
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(without_avatar, vec!["#CM9809", "#CM9810"]);

        let andi = orders.iter().find(|o| o.id == "#CM9805").unwrap();
        assert!(andi.user.avatar.is_some());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r##"[
            {"id": "#A1", "user": {"name": "A", "initials": "A"}, "project": "P",
             "address": "X", "date_label": "Now", "status": "pending"},
            {"id": "#A1", "user": {"name": "B", "initials": "B"}, "project": "Q",
             "address": "Y", "date_label": "Now", "status": "complete"}
        ]"##;
        let err = parse_orders(json).unwrap_err();
        assert!(err.to_string().contains("duplicate order id #A1"));
    }

    #[test]
    fn test_unknown_status_is_a_parse_error() {
        let json = r##"[{"id": "#A1", "user": {"name": "A", "initials": "A"}, "project": "P",
            "address": "X", "date_label": "Now", "status": "shipped"}]"##;
        assert!(parse_orders(json).is_err());
    }
}
