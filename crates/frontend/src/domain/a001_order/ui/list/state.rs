use contracts::domain::a001_order::list_model::OrderListState;
use contracts::shared::list_settings::ListSettings;
use leptos::prelude::*;

/// Создаёт состояние списка заказов из встроенного набора данных.
///
/// При ошибке загрузки возвращает пустое состояние и текст ошибки.
pub fn create_state(settings: &ListSettings) -> (RwSignal<OrderListState>, Option<String>) {
    match OrderListState::from_seed(settings) {
        Ok(state) => {
            log::info!("a001_order: loaded {} orders", state.records().len());
            (RwSignal::new(state), None)
        }
        Err(e) => {
            log::error!("a001_order: failed to load orders: {:#}", e);
            let empty = OrderListState::new(
                Vec::new(),
                settings.page_size,
                settings.preselected_id.as_deref(),
            );
            (RwSignal::new(empty), Some(format!("{:#}", e)))
        }
    }
}
