mod contact;
mod fun_facts;
mod hero;
mod nav_bar;
mod projects;
mod scroll;
mod ui;

use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE_CONTENT;
use crate::nav::Section;
use crate::overlay::OverlayCoordinator;

use contact::ContactSection;
use fun_facts::{FactDialog, FunFactsSection};
use hero::HeroSection;
use nav_bar::NavBar;
use projects::{ProjectPanel, ProjectsSection};
use scroll::{use_escape_key, use_section_tracker, BodyScrollLock};

/// Shared handle to the page's overlay state.
pub type Overlays = RwSignal<OverlayCoordinator<BodyScrollLock>>;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", SITE_CONTENT.profile.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site as one continuous page.
#[component]
fn PortfolioPage() -> impl IntoView {
    let overlays: Overlays = RwSignal::new(OverlayCoordinator::new(BodyScrollLock));
    provide_context(overlays);

    let (active, sticky) = use_section_tracker();

    use_escape_key(move || overlays.update(|o| o.close()));

    // the coordinator's guard also releases on drop, but the signal may outlive the page
    on_cleanup(move || {
        overlays.try_update(|o| o.close());
    });

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen relative page-background">
            <div class="absolute inset-0 bg-background/55 backdrop-blur-sm" />
            <div class="relative z-10">
                <NavBar active visible=sticky />
                <main>
                    <section id=Section::Home.id()>
                        <HeroSection />
                    </section>
                    <section id=Section::Projects.id()>
                        <ProjectsSection />
                    </section>
                    <section id=Section::FunFacts.id()>
                        <FunFactsSection />
                    </section>
                    <section id=Section::Contact.id()>
                        <ContactSection />
                    </section>
                </main>
                <Footer />
            </div>
            <FactDialog />
            <ProjectPanel />
        </div>
    }
}

/// Year the site was built, from the timestamp `build.rs` stamps in.
fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-sm text-muted-foreground">
            {build_year().map(|year| format!("© {year} ")).unwrap_or_default()}
            {SITE_CONTENT.profile.name.as_str()}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        let year = build_year().expect("build.rs should stamp an RFC 3339 time");
        assert!(year >= 2024);
    }
}
