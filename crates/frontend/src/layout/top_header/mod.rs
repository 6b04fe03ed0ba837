//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Drawer / sidebar toggle
//! - Breadcrumb for the current route
//! - Theme toggle
//! - Notifications (overlay panel on narrow screens)
//! - Right panel toggle

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::page_title_for_path;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Ширина окна, ниже которой сайдбар открывается как drawer
const DRAWER_BREAKPOINT_PX: f64 = 1024.0;

fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < DRAWER_BREAKPOINT_PX)
        .unwrap_or(false)
}

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar/panel visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let pathname = use_location().pathname;

    let toggle_sidebar = move |_| {
        if is_narrow_viewport() {
            ctx.toggle_drawer();
        } else {
            ctx.toggle_left();
        }
    };

    // На широком экране уведомления уже видны в правой панели
    let show_notifications = move |_| {
        if is_narrow_viewport() {
            ctx.toggle_notifications();
        } else {
            ctx.right_open.set(true);
        }
    };

    let toggle_right_panel = move |_| {
        ctx.toggle_right();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    aria-label="Toggle navigation"
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("sidebar")}
                </button>
                <nav class="top-header__breadcrumb" aria-label="Breadcrumb">
                    <span class="top-header__crumb top-header__crumb--muted">"Dashboards"</span>
                    <span class="top-header__crumb-sep">"/"</span>
                    <span class="top-header__crumb">
                        {move || page_title_for_path(&pathname.get())}
                    </span>
                </nav>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <button
                    class="top-header__icon-btn top-header__icon-btn--badge"
                    on:click=show_notifications
                    title="Notifications"
                    aria-label="Notifications"
                    aria-expanded=move || ctx.notifications_open.get().to_string()
                >
                    {icon("bell")}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=toggle_right_panel
                    aria-label="Toggle right panel"
                    title=move || if is_right_panel_visible() { "Hide panel" } else { "Show panel" }
                >
                    {icon("sidebar-right")}
                </button>
            </div>
        </header>
    }
}
