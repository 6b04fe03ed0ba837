use leptos::prelude::*;

/// Shell visibility state shared by the header, sidebar and right panel.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
    /// Sidebar shown as an overlay drawer (narrow screens)
    pub drawer_open: RwSignal<bool>,
    /// Notifications panel shown as an overlay (narrow screens)
    pub notifications_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(true),
            drawer_open: RwSignal::new(false),
            notifications_open: RwSignal::new(false),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|val| *val = !*val);
    }

    /// Открывает drawer меню; панель уведомлений при этом закрывается
    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|val| *val = !*val);
        if self.drawer_open.get_untracked() {
            self.notifications_open.set(false);
        }
        leptos::logging::log!("drawer open: {}", self.drawer_open.get_untracked());
    }

    /// Открывает панель уведомлений поверх контента; drawer меню закрывается
    pub fn toggle_notifications(&self) {
        self.notifications_open.update(|val| *val = !*val);
        if self.notifications_open.get_untracked() {
            self.drawer_open.set(false);
        }
        leptos::logging::log!(
            "notifications open: {}",
            self.notifications_open.get_untracked()
        );
    }

    pub fn close_drawer(&self) {
        self.drawer_open.set(false);
    }

    /// Закрывает все оверлеи (клик по подложке)
    pub fn close_overlays(&self) {
        self.drawer_open.set(false);
        self.notifications_open.set(false);
    }

    pub fn any_overlay_open(&self) -> bool {
        self.drawer_open.get() || self.notifications_open.get()
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
