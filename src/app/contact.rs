use leptos::prelude::*;

use crate::content::SITE_CONTENT;

use super::ui::{stagger, Reveal, RevealFrom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactIcon {
    /// Class from the devicon stylesheet linked in the shell.
    Devicon(&'static str),
    Glyph(&'static str),
}

const LINK_ICON: ContactIcon = ContactIcon::Glyph("🔗");

fn contact_icon(icon: &str) -> ContactIcon {
    match icon {
        "linkedin" => ContactIcon::Devicon("devicon-linkedin-plain"),
        "github" => ContactIcon::Devicon("devicon-github-plain"),
        "email" => ContactIcon::Glyph("✉"),
        _ => LINK_ICON,
    }
}

#[component]
fn Icon(icon: ContactIcon, color: String) -> impl IntoView {
    let class = format!(
        "text-2xl text-muted-foreground transition-colors group-hover:scale-110 {color}"
    );
    match icon {
        ContactIcon::Devicon(name) => view! { <i class=format!("{class} {name}") /> }.into_any(),
        ContactIcon::Glyph(glyph) => view! {
            <span class=class aria-hidden="true">
                {glyph}
            </span>
        }
        .into_any(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <div class="min-h-screen px-6 py-12 flex flex-col justify-center">
            <div class="max-w-2xl mx-auto w-full">
                <Reveal delay_ms=200 class="text-center mb-12">
                    <h2 class="mb-4 text-3xl font-bold">"Let's Connect"</h2>
                    <p class="text-muted-foreground">
                        "Feel free to reach out through any of these platforms"
                    </p>
                </Reveal>
                <Reveal delay_ms=400 class="bg-card/70 backdrop-blur-sm rounded-xl border border-border/50 p-8">
                    <div class="space-y-6">
                        {SITE_CONTENT
                            .contacts
                            .iter()
                            .enumerate()
                            .map(|(index, contact)| {
                                view! {
                                    <Reveal delay_ms=stagger(600, index) from=RevealFrom::Left>
                                        <a
                                            href=contact.url.as_str()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=format!("{} Profile", contact.platform)
                                            class="flex items-center gap-4 p-4 rounded-lg hover:bg-accent/50 transition-all duration-300 group"
                                        >
                                            <Icon
                                                icon=contact_icon(&contact.icon)
                                                color=contact.color.clone()
                                            />
                                            <div class="flex-1">
                                                <h3 class="group-hover:text-primary transition-colors">
                                                    {contact.platform.as_str()}
                                                </h3>
                                                <p class="text-sm text-muted-foreground">
                                                    {contact.handle.as_str()}
                                                </p>
                                            </div>
                                            <span class="text-muted-foreground group-hover:translate-x-1 transition-transform">
                                                "→"
                                            </span>
                                        </a>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal delay_ms=800 class="text-center mt-8">
                    <p class="text-sm text-muted-foreground">
                        {SITE_CONTENT.profile.contact_note.as_str()}
                    </p>
                </Reveal>
            </div>
        </div>
    }
}
