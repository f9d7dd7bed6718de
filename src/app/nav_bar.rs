use leptos::prelude::*;

use crate::content::SITE_CONTENT;
use crate::nav::Section;

use super::scroll::scroll_to_section;

/// Fixed bar shown once the hero has scrolled away; highlights the active section.
#[component]
pub fn NavBar(#[prop(into)] active: Signal<Section>, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let links = SITE_CONTENT
        .navigation
        .iter()
        .map(|item| {
            let section = item.id;
            view! {
                <li>
                    <button
                        type="button"
                        class=move || {
                            if active.get() == section {
                                "px-3 py-2 rounded-md text-primary bg-card/80 cursor-pointer"
                            } else {
                                "px-3 py-2 rounded-md text-muted-foreground hover:text-foreground cursor-pointer"
                            }
                        }
                        aria-current=move || (active.get() == section).then_some("true")
                        on:click=move |_| scroll_to_section(section)
                    >
                        {item.label.as_str()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            class=move || {
                if visible.get() {
                    "fixed top-0 inset-x-0 z-40 h-20 flex items-center justify-center bg-background/80 backdrop-blur-md shadow-lg transition-all duration-300 translate-y-0 opacity-100"
                } else {
                    "fixed top-0 inset-x-0 z-40 h-20 flex items-center justify-center transition-all duration-300 -translate-y-full opacity-0 pointer-events-none"
                }
            }
            aria-hidden=move || (!visible.get()).then_some("true")
        >
            <ul class="flex gap-2">{links}</ul>
        </nav>
    }
}
