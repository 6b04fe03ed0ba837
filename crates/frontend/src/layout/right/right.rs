use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside
            data-zone="right"
            class="right"
            class:hidden=move || !ctx.right_open.get()
            class:right--overlay-open=move || ctx.notifications_open.get()
        >
            {children()}
        </aside>
    }
}
