use crate::enums::OrderStatus;
use crate::shared::list_query::Searchable;
use serde::{Deserialize, Serialize};

/// Заказчик, отображаемый в строке заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    pub initials: String,
    /// Путь к картинке аватара; при отсутствии показываются инициалы
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Запись заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub user: OrderUser,
    pub project: String,
    pub address: String,
    /// Относительная метка даты ("Just now", "Yesterday", ...)
    pub date_label: String,
    pub status: OrderStatus,
}

impl Searchable for OrderRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.user.name, &self.project, &self.id]
    }
}
