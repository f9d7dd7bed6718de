use leptos::{either::Either, prelude::*};

use crate::content::{Project, SITE_CONTENT};
use crate::segments::{link_segments, Segment};

use super::ui::{stagger, Backdrop, Badge, CloseButton, ImageWithFallback, Reveal};
use super::Overlays;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let overlays = expect_context::<Overlays>();
    view! {
        <Reveal delay_ms=stagger(400, index)>
            <div
                class="group cursor-pointer project-card"
                style=format!("--tilt: {}deg", project.rotation)
                on:click=move |_| overlays.update(|o| o.open_project(project.clone()))
            >
                <div class="bg-card/80 backdrop-blur-sm rounded-xl border border-border/50 p-6 shadow-lg hover:shadow-xl transition-all duration-300 h-full relative overflow-hidden">
                    <div class="absolute -top-2 -right-2 w-4 h-4 bg-primary rounded-full shadow-md pin" />
                    <div class="space-y-4">
                        <ImageWithFallback
                            src=project.image.as_str()
                            alt=project.title.as_str()
                            class="w-full h-48 object-cover rounded-lg"
                        />
                        <div class="space-y-3">
                            <div class="flex items-start justify-between gap-2">
                                <h3 class="group-hover:text-primary transition-colors">
                                    {project.title.as_str()}
                                </h3>
                                <span class="text-muted-foreground group-hover:text-primary">"↗"</span>
                            </div>
                            <p class="text-sm text-muted-foreground leading-relaxed">
                                {project.description.as_str()}
                            </p>
                            <div class="flex flex-wrap gap-1">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <Badge text=tag.as_str() /> })
                                    .collect_view()}
                            </div>
                            <div class="flex items-center gap-2 text-xs text-muted-foreground pt-2 border-t border-border/30">
                                <span>"📅 " {project.date.as_str()}</span>
                                <span class="ml-auto">{capitalize(&project.kind)}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <div class="min-h-screen px-6 py-12">
            <div class="max-w-6xl mx-auto">
                <Reveal delay_ms=200 class="text-center mb-12">
                    <h2 class="mb-4 text-3xl font-bold">"Projects & Research"</h2>
                    <p class="text-muted-foreground">
                        "A collection of my work at the intersection of technology and nature"
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 auto-rows-max">
                    {SITE_CONTENT
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
                <Reveal delay_ms=800 class="text-center mt-12">
                    <p class="text-muted-foreground">{SITE_CONTENT.profile.projects_note.as_str()}</p>
                </Reveal>
            </div>
        </div>
    }
}

fn description_view(project: &Project) -> impl IntoView {
    link_segments(&project.full_description, &project.link_words, &project.links)
        .into_iter()
        .map(|segment| match segment {
            Segment::Link { label, href } => Either::Left(view! {
                <a
                    href=href.to_string()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-primary underline hover:text-primary/80"
                >
                    {label.to_string()}
                </a>
            }),
            other => Either::Right(other.text().to_string()),
        })
        .collect_view()
}

#[component]
fn BulletList(#[prop(into)] heading: String, items: Vec<String>) -> impl IntoView {
    view! {
        <div>
            <h4 class="mb-2 font-semibold">{heading}</h4>
            <ul class="list-disc pl-5 space-y-1 text-sm text-muted-foreground">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// Slide-in detail panel for the selected project. Holds the page scroll lock while open.
#[component]
pub fn ProjectPanel() -> impl IntoView {
    let overlays = expect_context::<Overlays>();
    let close = Callback::new(move |_: ()| overlays.update(|o| o.close()));
    move || {
        overlays.with(|o| o.project().cloned()).map(|project| {
            view! {
                <Backdrop on_close=close class="justify-end">
                    <aside
                        role="dialog"
                        aria-modal="true"
                        aria-label=project.title.clone()
                        class="relative h-full w-full max-w-xl overflow-y-auto bg-card p-8 shadow-2xl panel-slide"
                    >
                        <CloseButton on_close=close />
                        <div class="space-y-6">
                            <ImageWithFallback
                                src=project.image.clone()
                                alt=project.title.clone()
                                class="w-full h-56 object-cover rounded-lg"
                            />
                            <div>
                                <h2 class="text-2xl font-bold mb-2">{project.title.clone()}</h2>
                                <div class="flex items-center gap-2 text-xs text-muted-foreground">
                                    <span>"📅 " {project.date.clone()}</span>
                                    <span>"·"</span>
                                    <span>{capitalize(&project.kind)}</span>
                                </div>
                            </div>
                            <p class="leading-relaxed">{description_view(&project)}</p>
                            <BulletList heading="Objectives" items=project.objectives.clone() />
                            <BulletList heading="Outcomes" items=project.outcomes.clone() />
                            <div class="flex flex-wrap gap-1">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <Badge text=tag.clone() /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </aside>
                </Backdrop>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("research"), "Research");
        assert_eq!(capitalize("project"), "Project");
        assert_eq!(capitalize(""), "");
    }
}
