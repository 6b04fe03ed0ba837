pub mod global_context;
pub mod left;
pub mod right;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +--------------------------------------------+
/// |  Sidebar  |  TopHeader      |  RightPanel  |
/// |   (Left)  +-----------------+   (Right)    |
/// |           |  Content        |              |
/// +--------------------------------------------+
/// ```
///
/// On narrow screens the sidebar and the right panel turn into overlays
/// over the content; clicking the backdrop closes them.
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div
                class="app-drawer-backdrop"
                class:app-drawer-backdrop--visible=move || ctx.any_overlay_open()
                on:click=move |_| ctx.close_overlays()
            ></div>

            <div class="app-main">
                <TopHeader />
                <main class="app-content">
                    {center()}
                </main>
            </div>

            <right::Right>
                {right()}
            </right::Right>
        </div>
    }
}
