use serde::{Deserialize, Serialize};

/// Статус заказа в списке заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// Код статуса (совпадает с сериализованной формой)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Complete => "complete",
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// Цветовой тег, используется как BEM-модификатор `status-badge--{tag}`
    pub fn color_tag(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "blue",
            OrderStatus::Complete => "green",
            OrderStatus::Pending => "amber",
            OrderStatus::Approved => "cyan",
            OrderStatus::Rejected => "red",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::InProgress,
            OrderStatus::Complete,
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Rejected,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in-progress" => Some(OrderStatus::InProgress),
            "complete" => Some(OrderStatus::Complete),
            "pending" => Some(OrderStatus::Pending),
            "approved" => Some(OrderStatus::Approved),
            "rejected" => Some(OrderStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_covers_all_variants() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("shipped"), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: OrderStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, OrderStatus::Rejected);
    }

    #[test]
    fn test_color_tags() {
        assert_eq!(OrderStatus::InProgress.color_tag(), "blue");
        assert_eq!(OrderStatus::Complete.color_tag(), "green");
        assert_eq!(OrderStatus::Pending.color_tag(), "amber");
        assert_eq!(OrderStatus::Approved.color_tag(), "cyan");
        assert_eq!(OrderStatus::Rejected.color_tag(), "red");
    }

    #[test]
    fn test_color_tags_are_distinct() {
        let mut tags: Vec<_> = OrderStatus::all().iter().map(|s| s.color_tag()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), 5);
    }
}
