//! Клиентский поиск и постраничная выдача для списочных форм.
//!
//! Страницы нумеруются с 1. Функции чистые: на вход полный список,
//! на выход новая выборка, исходный порядок сохраняется.

use serde::{Deserialize, Serialize};

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Значения полей, по которым выполняется поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, содержит ли хотя бы одно поле подстроку `filter` (без учёта регистра)
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Фильтрует список по поисковому запросу.
///
/// Запрос сравнивается как есть, включая пробелы; пустой запрос возвращает весь список.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Количество страниц: ceil(total_count / page_size), 0 для пустого списка
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Возвращает срез `[(page-1)*page_size, page*page_size)`.
///
/// Страница за пределами выборки (и страница 0) даёт пустой результат.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Приводит номер страницы к диапазону `[1, max(total_pages, 1)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Описание текущей страницы для подвала таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    /// Позиция первой записи страницы (с 1), 0 если страница пуста
    pub first_item: usize,
    /// Позиция последней записи страницы (с 1), 0 если страница пуста
    pub last_item: usize,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total_count: usize) -> Self {
        let pages = total_pages(total_count, page_size);
        let (first_item, last_item) = if page == 0 || page > pages {
            (0, 0)
        } else {
            let first = (page - 1) * page_size + 1;
            let last = (page * page_size).min(total_count);
            (first, last)
        };

        Self {
            page,
            page_size,
            total_count,
            total_pages: pages,
            first_item,
            last_item,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Номера страниц для кнопок пагинации
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        code: String,
        title: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.code, &self.title]
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                code: format!("R{:03}", i),
                title: if i % 2 == 0 { "Even Row".into() } else { "odd row".into() },
            })
            .collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let items = rows(5);
        assert_eq!(filter_list(&items, ""), items);
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        let items = rows(4);
        assert!(filter_list(&items, "   ").is_empty());
        assert!(filter_list(&items, " R001").is_empty());
        assert!(filter_list(&items, "R001 ").is_empty());
        assert_eq!(filter_list(&items, "odd row").len(), 2);
        assert_eq!(filter_list(&items, "n r").len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_keeps_order() {
        let items = rows(6);
        let upper = filter_list(&items, "EVEN");
        let lower = filter_list(&items, "even");
        assert_eq!(upper, lower);
        let codes: Vec<_> = upper.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["R002", "R004", "R006"]);
    }

    #[test]
    fn test_filter_result_is_subsequence() {
        let items = rows(9);
        for query in ["r00", "row", "7", "x", "ODD"] {
            let found = filter_list(&items, query);
            let mut cursor = items.iter();
            for row in &found {
                assert!(cursor.any(|r| r == row), "{query}: order broken");
            }
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_last_page_size() {
        for n in 1..=35 {
            let items = rows(n);
            let pages = total_pages(n, 10);
            let last = paginate(&items, pages, 10);
            let expected = if n % 10 == 0 { 10 } else { n % 10 };
            assert_eq!(last.len(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items = rows(7);
        assert_eq!(paginate(&items, 1, 10).len(), 7);
        assert!(paginate(&items, 2, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
    }

    #[test]
    fn test_pages_partition_the_list() {
        let items = rows(23);
        let joined: Vec<Row> = (1..=total_pages(23, 10))
            .flat_map(|p| paginate(&items, p, 10))
            .collect();
        assert_eq!(joined, items);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_page_info() {
        let info = PageInfo::new(2, 10, 23);
        assert_eq!(info.total_pages, 3);
        assert_eq!((info.first_item, info.last_item), (11, 20));
        assert!(info.has_prev());
        assert!(info.has_next());

        let last = PageInfo::new(3, 10, 23);
        assert_eq!((last.first_item, last.last_item), (21, 23));
        assert!(!last.has_next());
        assert_eq!(last.page_numbers(), vec![1, 2, 3]);

        let empty = PageInfo::new(1, 10, 0);
        assert_eq!((empty.first_item, empty.last_item), (0, 0));
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
        assert!(empty.page_numbers().is_empty());
    }
}
