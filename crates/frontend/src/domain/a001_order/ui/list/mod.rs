pub mod state;

use self::state::create_state;
use crate::shared::components::avatar::Avatar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::TableCellCheckbox;
use crate::shared::components::ui::badge::{Badge, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use contracts::domain::a001_order::list_model::OrderRow;
use contracts::shared::list_settings::ListSettings;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Текст бейджа с количеством выбранных строк
fn selected_label(count: usize) -> String {
    match count {
        0 => "Nothing selected".to_string(),
        1 => "1 selected".to_string(),
        n => format!("{} selected", n),
    }
}

/// Классы строки таблицы; выбранная строка подсвечивается
fn row_class(selected: bool) -> &'static str {
    if selected {
        "table__row table__row--appear table__row--selected"
    } else {
        "table__row table__row--appear"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let settings = use_context::<ListSettings>().unwrap_or_default();
    let (state, load_error) = create_state(&settings);

    let view_model = Memo::new(move |_| state.with(|s| s.view_model()));
    let query = Signal::derive(move || view_model.with(|vm| vm.query.clone()));
    let page_info = Signal::derive(move || view_model.with(|vm| vm.page_info.clone()));
    let selected_count = move || view_model.with(|vm| vm.selected_count);

    let on_search = Callback::new(move |value: String| {
        state.update(|s| s.set_query(value));
        state.with_untracked(|s| {
            log::debug!(
                "a001_order: query={:?} matches={} page={}",
                s.query(),
                s.filtered().len(),
                s.page()
            )
        });
    });

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.set_page(page));
        log::debug!("a001_order: page={}", state.with_untracked(|s| s.page()));
    });

    let on_toggle = Callback::new(move |id: String| {
        let mut now_selected = false;
        state.update(|s| now_selected = s.toggle_selection(&id));
        log!("a001_order: toggle {} -> {}", id, now_selected);
    });

    // Строки перерисовываются при смене запроса, чтобы обновить подсветку
    let rows = move || {
        view_model.with(|vm| {
            vm.rows
                .iter()
                .map(|row| (vm.query.clone(), row.clone()))
                .collect::<Vec<_>>()
        })
    };

    let render_row = move |(filter, row): (String, OrderRow)| {
        let OrderRow {
            id,
            user_name,
            initials,
            avatar,
            project,
            address,
            date_label,
            status_label,
            status_color,
            ..
        } = row;

        // Ячейки thaw забирают содержимое по значению, поэтому всё готовим заранее
        let id_view = highlight_matches(&id, &filter);
        let user_view = highlight_matches(&user_name, &filter);
        let project_view = highlight_matches(&project, &filter);

        let checked = Signal::derive({
            let id = id.clone();
            move || state.with(|s| s.is_selected(&id))
        });
        let class = Signal::derive(move || row_class(checked.get()).to_string());

        view! {
            <TableRow class=class>
                <TableCellCheckbox item_id=id checked=checked on_toggle=on_toggle />
                <TableCell>
                    <span class="order-id">{id_view}</span>
                </TableCell>
                <TableCell>
                    <div class="order-user">
                        <Avatar name=user_name initials=initials src=avatar size="small" />
                        <span>{user_view}</span>
                    </div>
                </TableCell>
                <TableCell>{project_view}</TableCell>
                <TableCell>
                    <span class="order-address">{address}</span>
                </TableCell>
                <TableCell>
                    <span class="order-date">
                        {icon("calendar")}
                        {date_label}
                    </span>
                </TableCell>
                <TableCell>
                    <StatusBadge label=status_label color=status_color />
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a001_order--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Order List"</h1>
                </div>
            </div>

            {load_error.map(|err| view! {
                <div class="alert alert--error" role="alert">
                    {icon("alert-triangle")}
                    <span>{format!("Failed to load orders: {}", err)}</span>
                </div>
            })}

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_change=on_search
                    placeholder="Search"
                    debounce_ms=settings.search_debounce_ms
                />
                <Badge
                    variant=Signal::derive(move || {
                        if selected_count() > 0 { "primary".to_string() } else { "neutral".to_string() }
                    })
                >
                    {move || selected_label(selected_count())}
                </Badge>
            </div>

            <div class="table-wrapper">
                <Table class="order-table">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell class="table__cell--checkbox">""</TableHeaderCell>
                            <TableHeaderCell>"Order ID"</TableHeaderCell>
                            <TableHeaderCell>"User"</TableHeaderCell>
                            <TableHeaderCell>"Project"</TableHeaderCell>
                            <TableHeaderCell>"Address"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=rows
                            key=|(filter, row)| (filter.clone(), row.id.clone())
                            children=render_row
                        />
                    </TableBody>
                </Table>

                <Show when=move || page_info.with(|p| p.total_count == 0)>
                    <div class="table-empty">"No orders match the search"</div>
                </Show>
            </div>

            <div class="list-footer">
                <PaginationControls page_info=page_info on_page_change=on_page_change />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_label() {
        assert_eq!(selected_label(0), "Nothing selected");
        assert_eq!(selected_label(1), "1 selected");
        assert_eq!(selected_label(3), "3 selected");
    }

    #[test]
    fn test_row_class() {
        assert!(row_class(true).ends_with("table__row--selected"));
        assert!(!row_class(false).contains("--selected"));
    }
}
