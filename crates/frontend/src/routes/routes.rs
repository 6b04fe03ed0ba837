use crate::dashboards::OverviewDashboard;
use crate::domain::a001_order::ui::list::OrderList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::right::panel::RightPanel;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes, A};
use leptos_router::path;

/// Путь → заголовок страницы (для хлебных крошек и меню)
pub fn page_title_for_path(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "" => "Overview",
        "/orders" => "Order List",
        _ => "Not Found",
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--custom" category=PageCategory::Custom>
            <div class="not-found">
                {icon("alert-triangle")}
                <h1 class="page__title">"Page not found"</h1>
                <A href="/">"Back to dashboard"</A>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! {
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/orders") view=OrderList />
                </Routes>
            }.into_any()
            right=|| view! { <RightPanel /> }.into_any()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_for_path() {
        assert_eq!(page_title_for_path("/"), "Overview");
        assert_eq!(page_title_for_path("/orders"), "Order List");
        assert_eq!(page_title_for_path("/orders/"), "Order List");
        assert_eq!(page_title_for_path("/settings"), "Not Found");
    }
}
