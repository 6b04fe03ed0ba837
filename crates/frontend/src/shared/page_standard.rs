//! Категории страниц.
//!
//! Корневой элемент каждой страницы несёт `id` вида `{module}--{category}`
//! (`a001_order--list`, `d100_overview--dashboard`) и атрибут
//! `data-page-category`. По `id` из инспектора браузера легко найти модуль
//! страницы в `domain/` или `dashboards/`.

/// Категория страницы приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Таблица записей с поиском и пагинацией
    List,
    /// Дашборд с карточками и графиками
    Dashboard,
    /// Прочие страницы (например, "не найдено")
    Custom,
}

impl PageCategory {
    /// Значение для `data-page-category` и суффикс `id`
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Dashboard => "dashboard",
            PageCategory::Custom => "custom",
        }
    }

    /// Базовый CSS-класс корня страницы
    pub fn base_class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Dashboard => "page page--dashboard",
            PageCategory::Custom => "page page--custom",
        }
    }
}

/// Проверяет формат `{module}--{category}` для id страницы
pub fn is_valid_page_id(page_id: &str, category: PageCategory) -> bool {
    match page_id.split_once("--") {
        Some((module, suffix)) => !module.is_empty() && suffix == category.as_str(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_of_routed_pages() {
        assert!(is_valid_page_id("a001_order--list", PageCategory::List));
        assert!(is_valid_page_id("d100_overview--dashboard", PageCategory::Dashboard));
        assert!(is_valid_page_id("not_found--custom", PageCategory::Custom));
        assert!(!is_valid_page_id("a001_order--dashboard", PageCategory::List));
        assert!(!is_valid_page_id("--list", PageCategory::List));
        assert!(!is_valid_page_id("a001_order", PageCategory::List));
    }
}
