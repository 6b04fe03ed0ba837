//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `app.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```ignore
//! // Каскадная задержка для stagger-эффекта
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=80>  // карточка 2
//!
//! // С дополнительными inline-стилями
//! <CardAnimated style="grid-column: span 2;" delay_ms=0>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками, мс
pub const STAGGER_STEP_MS: u32 = 80;

/// Inline-стиль анимации появления с задержкой `delay_ms`
pub fn appear_style(delay_ms: u32, extra: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

/// Задержка для карточки с порядковым номером `index` в группе
pub fn stagger_delay(index: usize) -> u32 {
    STAGGER_STEP_MS.saturating_mul(index as u32)
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    /// Дополнительные CSS-классы.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = appear_style(delay_ms, &style);

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style() {
        assert_eq!(
            appear_style(0, ""),
            "animation: card-appear 0.28s ease-out 0ms both;"
        );
        assert!(appear_style(160, "max-width: 400px;").ends_with("160ms both; max-width: 400px;"));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 240);
    }
}
