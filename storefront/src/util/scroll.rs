//! Smooth scrolling to in-page sections.
//!
//! Hydrate builds call `Element::scroll_into_view`; SSR paths no-op.

/// Scroll the element with DOM id `section_id` into view.
///
/// Returns `false` when there is no browser or no such element.
pub fn scroll_to_section(section_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(section_id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section_id;
        false
    }
}

/// `#how-it-works` style anchor for a section id.
pub fn section_href(section_id: &str) -> String {
    format!("#{section_id}")
}
