//! Sidebar component with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::page_title_for_path;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (path, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            items: vec![("/", "bar-chart")],
        },
        MenuGroup {
            id: "pages",
            label: "Pages",
            items: vec![("/orders", "orders")],
        },
    ]
}

/// Пункт меню активен, если путь совпадает с текущим (без хвостового `/`)
fn is_active_path(current: &str, item: &str) -> bool {
    let current = current.trim_end_matches('/');
    let item = item.trim_end_matches('/');
    current == item
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let pathname = use_location().pathname;

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string(), "pages".to_string()]);

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="avatar avatar--small">"BW"</span>
                <span class="app-sidebar__brand-title">"ByeWind"</span>
            </div>

            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let is_expanded = move || expanded_groups.get().contains(&group_id);

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__group-title"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            {group.label}
                        </div>

                        <div
                            class="app-sidebar__items"
                            class:app-sidebar__items--collapsed=move || !is_expanded()
                        >
                            {group.items.into_iter().map(|(path, icon_name)| {
                                let active = move || is_active_path(&pathname.get(), path);
                                view! {
                                    <A href=path>
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=active
                                            on:click=move |_| ctx.close_drawer()
                                        >
                                            <span class="app-sidebar__icon">{icon(icon_name)}</span>
                                            <span class="app-sidebar__label">{page_title_for_path(path)}</span>
                                        </div>
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_path() {
        assert!(is_active_path("/", "/"));
        assert!(is_active_path("/orders/", "/orders"));
        assert!(!is_active_path("/orders", "/"));
        assert!(!is_active_path("/", "/orders"));
    }
}
