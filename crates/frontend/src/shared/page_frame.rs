//! Корневая обёртка маршрутизируемой страницы.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_order--list" category=PageCategory::List>
//!         <div class="page__header">...</div>
//!         <div class="list-toolbar">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::{is_valid_page_id, PageCategory};
use leptos::prelude::*;

fn frame_class(category: PageCategory, extra: &str) -> String {
    if extra.is_empty() {
        category.base_class().to_string()
    } else {
        format!("{} {}", category.base_class(), extra)
    }
}

/// Корень страницы: `id`, `data-page-category` и класс по категории.
#[component]
pub fn PageFrame(
    /// `{module}--{category}`, например `"d100_overview--dashboard"`
    page_id: &'static str,
    category: PageCategory,
    /// Дополнительные CSS-классы
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id, category) {
        log::warn!("page id {:?} does not match category {:?}", page_id, category);
    }

    view! {
        <div
            id=page_id
            class=frame_class(category, class)
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}
