use leptos::prelude::*;

use super::sections::Section;

/// Scrolls the viewport to a section's anchor. A missing target is a no-op.
/// Smooth behavior comes from `scroll-behavior: smooth` on the document.
pub fn scroll_to_section(section: Section) {
    match document().get_element_by_id(section.anchor()) {
        Some(el) => el.scroll_into_view(),
        None => log::debug!("scroll target #{} not mounted", section.anchor()),
    }
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}
