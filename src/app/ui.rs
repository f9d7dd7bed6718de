use leptos::prelude::*;

/// Shown in place of an image that fails to load.
pub const FALLBACK_IMAGE: &str = "/images/fallback.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "bg-primary text-background hover:bg-primary/80",
            ButtonVariant::Ghost => "bg-transparent hover:bg-card/60",
            ButtonVariant::Outline => "border border-border/50 bg-transparent hover:bg-card/60",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "inline-flex items-center justify-center rounded-md px-4 py-2 transition-all duration-200 cursor-pointer {} {class}",
        variant.class()
    );
    view! {
        <button type="button" class=class on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}

#[component]
pub fn Badge(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <span class="rounded-md px-2 py-1 bg-card text-xs text-muted-foreground">{text}</span>
    }
}

#[component]
pub fn ImageWithFallback(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (src, set_src) = signal(src);
    view! {
        <img
            src=src
            alt=alt
            class=class
            loading="lazy"
            on:error=move |_| {
                if src.get_untracked() != FALLBACK_IMAGE {
                    log::debug!("image failed to load: {}", src.get_untracked());
                    set_src.set(FALLBACK_IMAGE.to_string());
                }
            }
        />
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
}

/// Entrance animation, delayed by `delay_ms`.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] from: RevealFrom,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let animation = match from {
        RevealFrom::Below => "reveal-up",
        RevealFrom::Left => "reveal-left",
    };
    view! {
        <div class=format!("{animation} {class}") style=format!("animation-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}

/// Staggered delay for the `index`th item of a list.
pub fn stagger(base_ms: u32, index: usize) -> u32 {
    base_ms + 100 * index as u32
}

/// Full-screen dimmed layer; clicking it (but not its content) calls `on_close`.
#[component]
pub fn Backdrop(
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("fixed inset-0 z-50 flex bg-black/60 backdrop-blur-sm overlay-fade {class}")
            on:click=move |_| on_close.run(())
        >
            <div class="contents" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let class = StoredValue::new(format!(
        "relative m-auto w-full rounded-xl border border-border/50 bg-card p-6 shadow-xl dialog-pop {class}"
    ));
    view! {
        <Show when=move || open.get()>
            {
                let children = children.clone();
                view! {
                    <Backdrop on_close class="items-center justify-center px-4">
                        <div role="dialog" aria-modal="true" class=class.get_value()>
                            <CloseButton on_close />
                            {children()}
                        </div>
                    </Backdrop>
                }
            }
        </Show>
    }
}

#[component]
pub fn CloseButton(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-label="Close"
            class="absolute top-3 right-3 text-muted-foreground hover:text-foreground cursor-pointer"
            on:click=move |_| on_close.run(())
        >
            "✕"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(600, 0), 600);
        assert_eq!(stagger(600, 3), 900);
    }
}
