use serde::{Deserialize, Serialize};

/// Настройки списочных форм
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ListSettings {
    /// Фиксированный размер страницы
    pub page_size: usize,
    /// Задержка перед применением поискового запроса, мс
    pub search_debounce_ms: u32,
    /// Идентификатор, выбранный при открытии списка
    pub preselected_id: Option<String>,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            search_debounce_ms: 200,
            preselected_id: Some("#CM9804".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: ListSettings = serde_json::from_str(r#"{ "page_size": 25 }"#).unwrap();
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.search_debounce_ms, 200);
        assert_eq!(settings.preselected_id.as_deref(), Some("#CM9804"));
    }
}
