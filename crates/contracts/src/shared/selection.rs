use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Множество выбранных идентификаторов строк таблицы
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создаёт множество с заранее выбранными идентификаторами
    pub fn with_selected<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Переключает выбор: добавляет отсутствующий id, удаляет присутствующий.
    /// Возвращает новое состояние (`true` — выбран).
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("#CM9801"));
        assert!(selection.is_selected("#CM9801"));
        assert!(!selection.toggle("#CM9801"));
        assert!(!selection.is_selected("#CM9801"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let original = SelectionSet::with_selected(["#CM9804"]);
        for id in ["#CM9804", "#CM9805"] {
            let mut selection = original.clone();
            selection.toggle(id);
            selection.toggle(id);
            assert_eq!(selection, original);
        }
    }

    #[test]
    fn test_with_selected_ignores_duplicates() {
        let selection = SelectionSet::with_selected(vec!["a", "b", "a"]);
        assert_eq!(selection.len(), 2);
        let mut ids: Vec<_> = selection.iter().collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
