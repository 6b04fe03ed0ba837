//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme. The mode lives only for the
//! session; it is mirrored to `data-theme` on `<body>` for the CSS and to
//! the Thaw `ConfigProvider` for the component library.

use leptos::prelude::*;
use web_sys::window;

/// Available theme modes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the mode name as a string (used for the `data-theme` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    fn thaw_theme(&self) -> thaw::Theme {
        match self {
            ThemeMode::Light => thaw::Theme::light(),
            ThemeMode::Dark => thaw::Theme::dark(),
        }
    }
}

/// Set data-theme attribute on body for CSS selectors.
fn apply_theme_attr(mode: ThemeMode) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current mode signal.
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn set_mode(&self, mode: ThemeMode) {
        log::debug!("theme mode -> {}", mode.as_str());
        self.mode.set(mode);
    }

    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.mode.get() == ThemeMode::Dark
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let mode = RwSignal::new(ThemeMode::default());
    let thaw_theme = RwSignal::new(ThemeMode::default().thaw_theme());

    Effect::new(move |_| {
        let current = mode.get();
        apply_theme_attr(current);
        thaw_theme.set(current.thaw_theme());
    });

    provide_context(ThemeContext { mode });

    view! {
        <thaw::ConfigProvider theme=thaw_theme>
            {children()}
        </thaw::ConfigProvider>
    }
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark toggle button for the top header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            aria-label="Toggle color mode"
            title=move || if ctx.is_dark() { "Light mode" } else { "Dark mode" }
        >
            {move || if ctx.is_dark() {
                crate::shared::icons::icon("sun")
            } else {
                crate::shared::icons::icon("moon")
            }}
        </button>
    }
}
