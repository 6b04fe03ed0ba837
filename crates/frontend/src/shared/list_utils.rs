//! Утилиты для списочных форм: поле поиска и подсветка совпадений
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Диапазоны (в байтах `text`) вхождений `filter` без учёта регистра.
///
/// Поиск идёт по тексту в нижнем регистре, найденные позиции переводятся
/// обратно в позиции `text`. Совпадение, которое начинается или кончается
/// внутри символа (нижний регистр дал несколько символов), пропускается.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let filter_lower = filter.to_lowercase();

    // (позиция в lower, позиция в text) для каждой границы символа
    let mut lower = String::with_capacity(text.len());
    let mut bounds: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (i, ch) in text.char_indices() {
        bounds.push((lower.len(), i));
        lower.extend(ch.to_lowercase());
    }
    bounds.push((lower.len(), text.len()));

    let to_text = |pos: usize| {
        bounds
            .binary_search_by_key(&pos, |&(l, _)| l)
            .ok()
            .map(|idx| bounds[idx].1)
    };

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&filter_lower) {
        let start = from + pos;
        let end = start + filter_lower.len();
        match (to_text(start), to_text(end)) {
            (Some(text_start), Some(text_end)) => {
                ranges.push((text_start, text_end));
                from = end;
            }
            _ => {
                from = start + lower[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
    /// Задержка в мс; 0 — применять сразу
    #[prop(optional)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Новый таймер заменяет старый; drop старого отменяет его
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if debounce_ms == 0 {
            on_change.run(new_value);
            return;
        }

        pending.set_value(Some(Timeout::new(debounce_ms, move || {
            on_change.run(new_value);
        })));
    };

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder.clone()
                aria-label=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Clear"
                    aria-label="Clear search"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
