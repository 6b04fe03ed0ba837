use leptos::prelude::*;

fn avatar_class(size: &str) -> &'static str {
    match size {
        "small" => "avatar avatar--small",
        _ => "avatar",
    }
}

/// Путь к картинке, если её стоит показывать; `None` — рисуем инициалы
fn image_src(src: Option<&str>, failed: bool) -> Option<&str> {
    match src {
        Some(path) if !failed && !path.trim().is_empty() => Some(path),
        _ => None,
    }
}

/// Аватар пользователя.
///
/// Показывает картинку, если путь задан и загрузился; иначе — инициалы.
#[component]
pub fn Avatar(
    #[prop(into)]
    name: String,
    #[prop(into)]
    initials: String,
    /// Путь к картинке; строки без аватара передают `None`
    #[prop(optional_no_strip)]
    src: Option<String>,
    /// "small" | "medium" (default)
    #[prop(optional)]
    size: &'static str,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let title = name.clone();

    view! {
        <span class=avatar_class(size) title=title>
            {move || match image_src(src.as_deref(), failed.get()) {
                Some(path) => view! {
                    <img
                        class="avatar__image"
                        src=path.to_string()
                        alt=name.clone()
                        on:error=move |_| failed.set(true)
                    />
                }.into_any(),
                None => view! {
                    <span class="avatar__initials" aria-label=name.clone()>{initials.clone()}</span>
                }.into_any(),
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_image_src_fallback() {
        assert_eq!(image_src(Some("/static/avatars/kate.png"), false), Some("/static/avatars/kate.png"));
        assert_eq!(image_src(Some("/static/avatars/kate.png"), true), None);
        assert_eq!(image_src(Some(""), false), None);
        assert_eq!(image_src(None, false), None);
    }

    #[test]
    fn test_avatar_class() {
        assert_eq!(avatar_class("small"), "avatar avatar--small");
        assert_eq!(avatar_class(""), "avatar");
    }

    #[test]
    fn test_avatar_accepts_optional_src() {
        let owner = Owner::new();
        owner.with(|| {
            let row_avatar: Option<String> = None;
            let _with_none = view! {
                <Avatar name="Orlando Diggs" initials="OD" src=row_avatar size="small" />
            };
            let _with_path = view! {
                <Avatar
                    name="Kate Morrison"
                    initials="KM"
                    src=Some("/static/avatars/kate-morrison.png".to_string())
                />
            };
            let _without_src = view! { <Avatar name="Andi Lane" initials="AL" /> };
        });
    }
}
