use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::nav::{scroll_target, Section, SectionLayout, SectionTracker};
use crate::overlay::ScrollLock;

/// Locks page scrolling by hiding overflow on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

fn body_style() -> Option<CssStyleDeclaration> {
    web_sys::window()?.document()?.body().map(|body| body.style())
}

impl ScrollLock for BodyScrollLock {
    fn engage(&self) {
        if let Some(style) = body_style() {
            if style.set_property("overflow", "hidden").is_err() {
                log::warn!("couldn't lock page scrolling");
            }
        }
    }

    fn release(&self) {
        if let Some(style) = body_style() {
            if style.remove_property("overflow").is_err() {
                log::warn!("couldn't unlock page scrolling");
            }
        }
    }
}

fn section_element(section: Section) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn measure_layouts() -> Vec<SectionLayout> {
    Section::TRACKED
        .into_iter()
        .filter_map(|section| {
            let el = section_element(section)?;
            Some(SectionLayout {
                section,
                offset_top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

fn viewport() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((scroll_y, height))
}

/// Smoothly scrolls `section` into place below the sticky nav.
pub fn scroll_to_section(section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let offset_top = match section {
        Section::Home => 0.0,
        _ => match section_element(section) {
            Some(el) => el.offset_top() as f64,
            None => {
                log::warn!("no element for section '{section}'");
                return;
            }
        },
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(section, offset_top));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Tracks the active section and sticky nav visibility from window scrolling.
///
/// Scroll events are coalesced to one recompute per animation frame.
pub fn use_section_tracker() -> (ReadSignal<Section>, ReadSignal<bool>) {
    let (active, set_active) = signal(Section::Home);
    let (sticky, set_sticky) = signal(false);
    let tracker = StoredValue::new(SectionTracker::new());
    let frame_pending = StoredValue::new(false);

    let recompute = move || {
        let Some((scroll_y, height)) = viewport() else {
            return;
        };
        let layouts = measure_layouts();
        let mut changed = false;
        tracker.update_value(|t| changed = t.update(scroll_y, height, &layouts));
        if changed {
            let t = tracker.get_value();
            set_active.set(t.active());
            set_sticky.set(t.sticky());
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        request_animation_frame(move || {
            frame_pending.set_value(false);
            recompute();
        });
    });

    // pick up the position a reload restored
    Effect::new(move |_| recompute());

    (active, sticky)
}

/// Runs `on_escape` whenever Escape is pressed anywhere on the page.
pub fn use_escape_key(on_escape: impl Fn() + Clone + 'static) {
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_escape();
        }
    });
}
