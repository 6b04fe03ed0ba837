use crate::shared::icons::icon;
use contracts::shared::list_query::PageInfo;
use leptos::prelude::*;

/// "Showing 1–10 of 10" / "No results"
pub fn range_label(info: &PageInfo) -> String {
    if info.total_count == 0 || info.first_item == 0 {
        "No results".to_string()
    } else {
        format!(
            "Showing {}–{} of {}",
            info.first_item, info.last_item, info.total_count
        )
    }
}

/// PaginationControls component - prev / numbered pages / next.
///
/// Pages are 1-based; the fixed page size is part of `page_info`.
#[component]
pub fn PaginationControls(
    /// Current page description
    #[prop(into)]
    page_info: Signal<PageInfo>,

    /// Callback with the requested page number
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination-controls" aria-label="Pagination">
            <span class="pagination-info">
                {move || range_label(&page_info.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let info = page_info.get();
                    if info.has_prev() {
                        on_page_change.run(info.page - 1);
                    }
                }
                disabled=move || !page_info.get().has_prev()
                aria-label="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <For
                each=move || page_info.get().page_numbers()
                key=|page| *page
                children=move |page| {
                    let is_current = move || page_info.get().page == page;
                    view! {
                        <button
                            class="pagination-btn pagination-btn--number"
                            class:pagination-btn--active=is_current
                            aria-current=move || if is_current() { Some("page") } else { None }
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page}
                        </button>
                    }
                }
            />
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let info = page_info.get();
                    if info.has_next() {
                        on_page_change.run(info.page + 1);
                    }
                }
                disabled=move || !page_info.get().has_next()
                aria-label="Next page"
            >
                {icon("chevron-right")}
            </button>
        </nav>
    }
}
