use leptos::prelude::*;

use crate::content::SITE_CONTENT;
use crate::nav::Section;

use super::scroll::scroll_to_section;
use super::ui::{stagger, Button, ButtonVariant, Reveal};

fn card_icon(section: Section) -> &'static str {
    match section {
        Section::Home => "⌂",
        Section::Projects => "💼",
        Section::FunFacts => "📖",
        Section::Contact => "✉",
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let profile = &SITE_CONTENT.profile;
    let cards = SITE_CONTENT
        .navigation
        .iter()
        .filter(|item| item.id != Section::Home)
        .enumerate()
        .map(|(index, item)| {
            let section = item.id;
            view! {
                <Reveal delay_ms=stagger(600, index) class="group hover-lift">
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=move |_| scroll_to_section(section)
                        class="w-full h-auto p-8 flex flex-col items-center gap-4 bg-card/70 hover:bg-card/90 border border-border/50 rounded-xl backdrop-blur-sm hover:shadow-lg"
                    >
                        <span class="text-3xl text-primary">{card_icon(section)}</span>
                        <span class="block text-center">
                            <span class="block mb-2 text-lg font-semibold">{item.label.as_str()}</span>
                            <span class="block text-sm text-muted-foreground">
                                {item.description.as_str()}
                            </span>
                        </span>
                    </Button>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center px-6">
            <div class="text-center max-w-2xl">
                <Reveal delay_ms=200>
                    <h1 class="mb-6 text-4xl font-bold">{profile.name.as_str()}</h1>
                    <p class="text-muted-foreground mb-12 text-lg">{profile.tagline.as_str()}</p>
                </Reveal>
                <Reveal delay_ms=400 class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-3xl mx-auto">
                    {cards}
                </Reveal>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_cards_hold_only_phrasing_content() {
        let html = Owner::new().with(|| view! { <HeroSection /> }.to_html());
        let buttons = html.split("<button").skip(1).collect::<Vec<_>>();
        assert_eq!(buttons.len(), 3);
        for button in buttons {
            let inner = button.split("</button>").next().unwrap_or_default();
            for tag in ["<div", "<h3", "<p"] {
                assert!(!inner.contains(tag), "{tag} inside a card button: {inner}");
            }
        }
    }
}
