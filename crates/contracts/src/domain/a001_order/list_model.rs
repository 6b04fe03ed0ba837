//! Состояние и view-model списка заказов.
//!
//! `OrderListState` — единственный владелец поискового запроса, номера
//! страницы и выбора строк. Изменяется только через методы ниже; после
//! каждого изменения номер страницы лежит в `[1, max(total_pages, 1)]`.

use super::aggregate::OrderRecord;
use super::seed::load_orders;
use crate::shared::list_query::{clamp_page, filter_list, paginate, PageInfo};
use crate::shared::list_settings::ListSettings;
use crate::shared::selection::SelectionSet;
use serde::{Deserialize, Serialize};

/// Строка таблицы заказов, готовая к отрисовке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    pub user_name: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub project: String,
    pub address: String,
    pub date_label: String,
    pub status_label: String,
    pub status_color: String,
    pub selected: bool,
}

impl OrderRow {
    fn from_record(record: &OrderRecord, selected: bool) -> Self {
        Self {
            id: record.id.clone(),
            user_name: record.user.name.clone(),
            initials: record.user.initials.clone(),
            avatar: record.user.avatar.clone(),
            project: record.project.clone(),
            address: record.address.clone(),
            date_label: record.date_label.clone(),
            status_label: record.status.display_name().to_string(),
            status_color: record.status.color_tag().to_string(),
            selected,
        }
    }
}

/// Всё, что нужно странице списка для одного прохода отрисовки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListViewModel {
    pub query: String,
    pub rows: Vec<OrderRow>,
    pub page_info: PageInfo,
    pub page_numbers: Vec<usize>,
    pub selected_count: usize,
}

#[derive(Clone, Debug)]
pub struct OrderListState {
    records: Vec<OrderRecord>,
    query: String,
    page: usize,
    page_size: usize,
    selection: SelectionSet,
}

impl OrderListState {
    pub fn new(records: Vec<OrderRecord>, page_size: usize, preselected: Option<&str>) -> Self {
        let selection = SelectionSet::with_selected(preselected);
        let mut state = Self {
            records,
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            selection,
        };
        state.clamp();
        state
    }

    /// Состояние над встроенным набором заказов
    pub fn from_seed(settings: &ListSettings) -> anyhow::Result<Self> {
        let records = load_orders()?;
        Ok(Self::new(
            records,
            settings.page_size,
            settings.preselected_id.as_deref(),
        ))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Переход на страницу; номер за пределами выборки приводится к ближайшей существующей
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Переключает выбор строки, возвращает новое состояние
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Записи, удовлетворяющие текущему запросу
    pub fn filtered(&self) -> Vec<OrderRecord> {
        filter_list(&self.records, &self.query)
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.page, self.page_size, self.filtered().len())
    }

    pub fn view_model(&self) -> OrderListViewModel {
        let filtered = self.filtered();
        let page_info = PageInfo::new(self.page, self.page_size, filtered.len());
        let rows = paginate(&filtered, self.page, self.page_size)
            .iter()
            .map(|record| OrderRow::from_record(record, self.is_selected(&record.id)))
            .collect();

        OrderListViewModel {
            query: self.query.clone(),
            rows,
            page_numbers: page_info.page_numbers(),
            page_info,
            selected_count: self.selection.len(),
        }
    }

    fn clamp(&mut self) {
        let info = PageInfo::new(self.page, self.page_size, self.filtered().len());
        self.page = clamp_page(self.page, info.total_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::OrderUser;
    use crate::enums::OrderStatus;

    fn seeded() -> OrderListState {
        OrderListState::from_seed(&ListSettings::default()).unwrap()
    }

    fn ids(vm: &OrderListViewModel) -> Vec<&str> {
        vm.rows.iter().map(|r| r.id.as_str()).collect()
    }

    fn synthetic(n: usize) -> Vec<OrderRecord> {
        (1..=n)
            .map(|i| OrderRecord {
                id: format!("#T{:04}", i),
                user: OrderUser {
                    name: if i <= 3 { "Kate".into() } else { "Drew".into() },
                    initials: "XX".into(),
                    avatar: None,
                },
                project: "Project".into(),
                address: "Somewhere".into(),
                date_label: "Today".into(),
                status: OrderStatus::Pending,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = seeded();
        let vm = state.view_model();
        assert_eq!(state.page(), 1);
        assert_eq!(vm.rows.len(), 10);
        assert_eq!(vm.page_info.total_pages, 1);
        assert_eq!(vm.selected_count, 1);
        assert!(state.is_selected("#CM9804"));
        let preselected = vm.rows.iter().find(|r| r.id == "#CM9804").unwrap();
        assert!(preselected.selected);
        assert_eq!(preselected.status_label, "Approved");
        assert_eq!(preselected.status_color, "cyan");
    }

    #[test]
    fn test_filter_kate_returns_two_rows_on_one_page() {
        let mut state = seeded();
        state.set_query("Kate");
        let vm = state.view_model();
        assert_eq!(ids(&vm), vec!["#CM9802", "#CM9807"]);
        assert_eq!(vm.page_info.total_pages, 1);
        assert_eq!(vm.page_numbers, vec![1]);
    }

    #[test]
    fn test_filter_by_id_fragment() {
        let mut state = seeded();
        state.set_query("9804");
        assert_eq!(ids(&state.view_model()), vec!["#CM9804"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut state = seeded();
        state.set_query("LANDING");
        let upper = state.view_model().rows;
        state.set_query("landing");
        let lower = state.view_model().rows;
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 4);
    }

    #[test]
    fn test_set_page_beyond_range_redirects_to_last_page() {
        let mut state = seeded();
        state.set_query("Kate");
        state.set_page(2);
        assert_eq!(state.page(), 1);
        assert_eq!(state.view_model().rows.len(), 2);
    }

    #[test]
    fn test_narrowing_query_clamps_page() {
        let mut state = OrderListState::new(synthetic(25), 10, None);
        state.set_page(3);
        assert_eq!(state.page(), 3);
        assert_eq!(state.view_model().rows.len(), 5);

        state.set_query("kate");
        assert_eq!(state.page(), 1);
        assert_eq!(state.view_model().rows.len(), 3);

        state.clear_query();
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_info().total_pages, 3);
    }

    #[test]
    fn test_padded_query_is_not_trimmed() {
        let mut state = seeded();
        state.set_query(" Kate");
        assert!(state.view_model().rows.is_empty());
        state.set_query("Craig ");
        assert!(state.view_model().rows.is_empty());
        state.set_query("   ");
        assert!(state.view_model().rows.is_empty());
        assert_eq!(state.page(), 1);

        state.set_query("Natali Craig");
        assert_eq!(ids(&state.view_model()), vec!["#CM9801", "#CM9806"]);
    }

    #[test]
    fn test_no_matches_keeps_page_one() {
        let mut state = seeded();
        state.set_query("nobody");
        let vm = state.view_model();
        assert_eq!(state.page(), 1);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.page_info.total_pages, 0);
        assert_eq!((vm.page_info.first_item, vm.page_info.last_item), (0, 0));
    }

    #[test]
    fn test_next_and_prev_page_stay_in_range() {
        let mut state = OrderListState::new(synthetic(15), 10, None);
        state.prev_page();
        assert_eq!(state.page(), 1);
        state.next_page();
        assert_eq!(state.page(), 2);
        state.next_page();
        assert_eq!(state.page(), 2);
        assert_eq!(ids(&state.view_model()).first(), Some(&"#T0011"));
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut state = seeded();
        let before = state.selection().clone();
        assert!(state.toggle_selection("#CM9801"));
        assert_eq!(state.view_model().selected_count, 2);
        assert!(!state.toggle_selection("#CM9801"));
        assert_eq!(state.selection(), &before);
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut state = seeded();
        state.toggle_selection("#CM9802");
        state.set_query("Drew");
        assert_eq!(state.view_model().selected_count, 2);
        state.clear_query();
        assert!(state.is_selected("#CM9802"));
    }
}
