use leptos::{either::Either, prelude::*};

use crate::content::{Fact, SITE_CONTENT};
use crate::segments::{split_trigger, Segment};

use super::ui::{stagger, Dialog, ImageWithFallback, Reveal, RevealFrom};
use super::Overlays;

#[component]
fn FactText(fact: &'static Fact) -> impl IntoView {
    let overlays = expect_context::<Overlays>();
    split_trigger(&fact.text, &fact.link_word)
        .segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Trigger(word) => Either::Left(view! {
                <button
                    type="button"
                    class="text-primary underline hover:text-primary/80 transition-colors cursor-pointer"
                    on:click=move |_| overlays.update(|o| o.open_fact(fact.popup.clone()))
                >
                    {word}
                </button>
            }),
            other => Either::Right(other.text()),
        })
        .collect_view()
}

#[component]
pub fn FunFactsSection() -> impl IntoView {
    view! {
        <div class="min-h-screen px-6 py-12">
            <div class="max-w-3xl mx-auto">
                <Reveal delay_ms=200 class="text-center mb-12">
                    <h2 class="mb-4 text-3xl font-bold">"Fun Facts About Me"</h2>
                    <p class="text-muted-foreground">"Click on the highlighted words to learn more!"</p>
                </Reveal>
                <Reveal delay_ms=400 class="bg-card/70 backdrop-blur-sm rounded-xl border border-border/50 p-8">
                    <ul class="space-y-6">
                        {SITE_CONTENT
                            .facts
                            .iter()
                            .enumerate()
                            .map(|(index, fact)| {
                                view! {
                                    <li>
                                        <Reveal
                                            delay_ms=stagger(600, index)
                                            from=RevealFrom::Left
                                            class="flex items-start gap-3"
                                        >
                                            <span class="text-primary mt-2">"•"</span>
                                            <p class="text-lg leading-relaxed">
                                                <FactText fact />
                                            </p>
                                        </Reveal>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Reveal>
            </div>
        </div>
    }
}

/// Popup for the selected fact.
#[component]
pub fn FactDialog() -> impl IntoView {
    let overlays = expect_context::<Overlays>();
    let open = Signal::derive(move || overlays.with(|o| o.fact().is_some()));
    view! {
        <Dialog open on_close=move |_| overlays.update(|o| o.close()) class="max-w-md">
            {move || {
                overlays
                    .with(|o| o.fact().cloned())
                    .map(|popup| {
                        view! {
                            <div class="space-y-4">
                                <ImageWithFallback
                                    src=popup.image
                                    alt="Fun fact illustration"
                                    class="w-full h-64 object-cover rounded-lg"
                                />
                                <p class="text-center text-muted-foreground">{popup.caption}</p>
                            </div>
                        }
                    })
            }}
        </Dialog>
    }
}
