use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config::SECTION_OFFSET_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Courses,
    Tests,
    About,
}

impl Section {
    /// Page order. The tracker picks the first match in this order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Courses,
        Section::Tests,
        Section::About,
    ];

    /// Element id of the section's anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Courses => "courses",
            Section::Tests => "tests",
            Section::About => "about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Courses => "Courses",
            Section::Tests => "Test Series",
            Section::About => "About",
        }
    }
}

/// Vertical edges of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// First section, in page order, whose bounds cross `line`. Sections with no
/// bounds (not in the document) never match.
pub fn find_active<F>(line: f64, mut bounds_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    Section::ALL
        .into_iter()
        .find(|section| bounds_of(*section).map_or(false, |b| b.straddles(line)))
}

fn bounds_in_document(section: Section) -> Option<SectionBounds> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?;
    let rect = element.get_bounding_client_rect();
    Some(SectionBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Tracks which section crosses the offset line while the page scrolls.
/// Starts at [`Section::Home`] and keeps the last match when nothing crosses.
#[hook]
pub fn use_active_section() -> Section {
    let active = use_state_eq(|| Section::Home);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(current) = find_active(SECTION_OFFSET_PX, bounds_in_document) {
                        active.set(current);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        gloo_console::error!("failed to register scroll listener", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            gloo_console::error!("failed to remove scroll listener", e);
                        }
                    }
                }
            },
            (),
        );
    }

    *active
}

pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("no element for section #{}", section.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(
        entries: &[(Section, f64, f64)],
    ) -> impl FnMut(Section) -> Option<SectionBounds> + '_ {
        move |section| {
            entries
                .iter()
                .find(|(s, _, _)| *s == section)
                .map(|(_, top, bottom)| SectionBounds {
                    top: *top,
                    bottom: *bottom,
                })
        }
    }

    #[test]
    fn picks_the_section_crossing_the_line() {
        let page = [
            (Section::Home, -900.0, -200.0),
            (Section::Courses, -200.0, 400.0),
            (Section::Tests, 400.0, 1100.0),
            (Section::About, 1100.0, 1700.0),
        ];
        assert_eq!(find_active(100.0, layout(&page)), Some(Section::Courses));
    }

    #[test]
    fn edges_touching_the_line_count() {
        let top_on_line = [(Section::Tests, 100.0, 800.0)];
        assert_eq!(find_active(100.0, layout(&top_on_line)), Some(Section::Tests));

        let bottom_on_line = [(Section::About, -400.0, 100.0)];
        assert_eq!(find_active(100.0, layout(&bottom_on_line)), Some(Section::About));
    }

    #[test]
    fn overlapping_sections_resolve_in_page_order() {
        let page = [
            (Section::About, 0.0, 500.0),
            (Section::Courses, 50.0, 150.0),
            (Section::Tests, -10.0, 300.0),
        ];
        assert_eq!(find_active(100.0, layout(&page)), Some(Section::Courses));
    }

    #[test]
    fn nothing_crossing_yields_none() {
        let page = [
            (Section::Home, 150.0, 900.0),
            (Section::Courses, 900.0, 1500.0),
        ];
        assert_eq!(find_active(100.0, layout(&page)), None);
        assert_eq!(find_active(100.0, |_| None), None);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let page = [(Section::About, -50.0, 600.0)];
        assert_eq!(find_active(100.0, layout(&page)), Some(Section::About));
    }

    #[test]
    fn every_position_marks_at_most_the_first_straddler() {
        let page = [
            (Section::Home, 0.0, 700.0),
            (Section::Courses, 700.0, 1500.0),
            (Section::Tests, 1500.0, 2200.0),
            (Section::About, 2200.0, 2800.0),
        ];
        for scroll in (0..3000).step_by(37) {
            let scroll = f64::from(scroll);
            let shifted: Vec<_> = page
                .iter()
                .map(|(s, top, bottom)| (*s, top - scroll, bottom - scroll))
                .collect();
            let expected = shifted
                .iter()
                .find(|(_, top, bottom)| *top <= 100.0 && *bottom >= 100.0)
                .map(|(s, _, _)| *s);
            assert_eq!(find_active(100.0, layout(&shifted)), expected, "scroll {}", scroll);
        }
    }

    #[test]
    fn ids_and_labels_follow_page_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "courses", "tests", "about"]);
        assert_eq!(Section::Tests.label(), "Test Series");
    }
}
