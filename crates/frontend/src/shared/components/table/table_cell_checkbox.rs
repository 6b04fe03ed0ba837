//! Чекбокс выбора строки в ячейке таблицы
//!
//! # Пример
//!
//! ```ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     checked=row.selected
//!     on_toggle=Callback::new(move |id| toggle_selection(id))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Ячейка с чекбоксом.
///
/// Клик по ячейке не всплывает до строки (stop_propagation).
#[component]
pub fn TableCellCheckbox(
    /// ID строки
    #[prop(into)]
    item_id: String,

    /// Состояние чекбокса
    #[prop(into)]
    checked: Signal<bool>,

    /// Callback с ID строки при каждом переключении
    on_toggle: Callback<String>,
) -> impl IntoView {
    let label = format!("Select {}", item_id);

    view! {
        <TableCell class="table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=label
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
