//! Right panel: notifications, activities and contacts feeds.

use crate::shared::components::avatar::Avatar;
use crate::shared::icons::icon;
use contracts::dashboards::d100_overview::dto::{activity_feed, FeedItem};
use leptos::prelude::*;

fn feed_section(title: &'static str, items: Vec<FeedItem>) -> impl IntoView {
    view! {
        <section class="right-panel__section">
            <h3 class="right-panel__title">{title}</h3>
            {items.into_iter().map(|item| view! {
                <div class="right-panel__item">
                    <span class="right-panel__icon">{icon(&item.icon)}</span>
                    <div class="right-panel__text">
                        <div class="right-panel__item-title">{item.title}</div>
                        <div class="right-panel__item-time">{item.time_label}</div>
                    </div>
                </div>
            }).collect_view()}
        </section>
    }
}

#[component]
pub fn RightPanel() -> impl IntoView {
    let feed = activity_feed();

    view! {
        <div class="right-panel">
            {feed_section("Notifications", feed.notifications)}
            {feed_section("Activities", feed.activities)}
            <section class="right-panel__section">
                <h3 class="right-panel__title">"Contacts"</h3>
                {feed.contacts.into_iter().map(|contact| view! {
                    <div class="right-panel__item">
                        <Avatar name=contact.name.clone() initials=contact.initials size="small" />
                        <div class="right-panel__item-title">{contact.name}</div>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
