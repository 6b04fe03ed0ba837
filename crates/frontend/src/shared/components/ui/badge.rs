use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Status badge: colored dot + label, color taken from the status color tag
/// (`blue`, `green`, `amber`, `cyan`, `red`).
#[component]
pub fn StatusBadge(
    #[prop(into)]
    label: String,
    #[prop(into)]
    color: String,
) -> impl IntoView {
    let class = format!("status-badge status-badge--{}", color);

    view! {
        <span class=class>
            <span class="status-badge__dot" aria-hidden="true"></span>
            {label}
        </span>
    }
}
