//! The built-in reveal strategies.

use super::{content_visible, ElementHandle, RevealOptions, RevealPage, RevealStrategy};
use crate::error::{Error, Result};

/// Click a page-wide "toggle all sections" control.
///
/// Each configured selector is tried in turn; a control that does not become
/// clickable in time is skipped. After a click the page is checked for
/// visible content, and clicked a second time if nothing appeared.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalToggle;

impl RevealStrategy for GlobalToggle {
    fn name(&self) -> &'static str {
        "global-toggle"
    }

    fn attempt(&self, page: &mut dyn RevealPage, options: &RevealOptions) -> Result<bool> {
        for selector in &options.toggle_selectors {
            let button = match page.wait_for_clickable(selector, options.toggle_wait) {
                Ok(button) => button,
                Err(Error::Timeout(_)) => continue,
                Err(e) => return Err(e),
            };
            log::debug!("Found global toggle: {selector}");

            for _ in 0..2 {
                page.click(&button)?;
                page.pause(options.toggle_settle);
                if content_visible(page, options)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Activate every control that carries an expanded state.
///
/// Collapsed controls are clicked once. Expanded ones are clicked twice,
/// which makes some pages load their remaining content. Success means at
/// least one control was activated; visibility is left to extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandedStateControls;

impl ExpandedStateControls {
    fn activate(
        page: &mut dyn RevealPage,
        button: &ElementHandle,
        options: &RevealOptions,
    ) -> Result<bool> {
        match page.attribute(button, "aria-expanded")?.as_deref() {
            Some("false") => {
                page.click(button)?;
                page.pause(options.click_settle);
                Ok(true)
            }
            Some("true") => {
                page.click(button)?;
                page.pause(options.reclick_settle);
                page.click(button)?;
                page.pause(options.click_settle);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl RevealStrategy for ExpandedStateControls {
    fn name(&self) -> &'static str {
        "expanded-state-controls"
    }

    fn attempt(&self, page: &mut dyn RevealPage, options: &RevealOptions) -> Result<bool> {
        let buttons = page.find_all(&options.expanded_state_selector)?;
        if buttons.is_empty() {
            return Ok(false);
        }
        log::debug!("Found {} expanded-state controls", buttons.len());

        let mut activated = false;
        for button in &buttons {
            match Self::activate(page, button, options) {
                Ok(clicked) => activated |= clicked,
                Err(e) => log::warn!("Skipping expanded-state control {button}: {e}"),
            }
        }

        if activated {
            page.pause(options.final_settle);
        }
        Ok(activated)
    }
}

/// Click the header of every section individually.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionHeaders;

impl RevealStrategy for SectionHeaders {
    fn name(&self) -> &'static str {
        "section-headers"
    }

    fn attempt(&self, page: &mut dyn RevealPage, options: &RevealOptions) -> Result<bool> {
        let mut clicked = false;

        for selector in &options.header_selectors {
            let elements = match page.find_all(selector) {
                Ok(elements) => elements,
                Err(e) => {
                    log::warn!("Header selector {selector} failed: {e}");
                    continue;
                }
            };

            for element in &elements {
                let result = page.is_displayed(element).and_then(|displayed| {
                    if displayed {
                        page.click(element)?;
                        page.pause(options.header_settle);
                    }
                    Ok(displayed)
                });
                match result {
                    Ok(displayed) => clicked |= displayed,
                    Err(e) => log::warn!("Skipping header {element}: {e}"),
                }
            }
        }

        if clicked {
            page.pause(options.final_settle);
        }
        Ok(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{MockElement, MockPage};
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    fn expanded(value: &str) -> MockElement {
        MockElement {
            attributes: HashMap::from([("aria-expanded".to_string(), value.to_string())]),
            ..Default::default()
        }
    }

    fn displayed() -> MockElement {
        MockElement {
            displayed: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_global_toggle_single_click() {
        let options = RevealOptions::default();
        let mut page = MockPage::new()
            .element("toggle", MockElement::default())
            .element("content", MockElement::default())
            .clickable(&options.toggle_selectors[0], "toggle")
            .after_clicks(1, &options.content_shown_selector, &["content"]);

        assert!(GlobalToggle.attempt(&mut page, &options).unwrap());
        assert_eq!(page.clicks, vec!["toggle"]);
        assert_eq!(page.pauses, vec![Duration::from_secs(2)]);
    }

    #[test]
    fn test_global_toggle_second_click() {
        let options = RevealOptions::default();
        let mut page = MockPage::new()
            .element("toggle", MockElement::default())
            .element("content", MockElement::default())
            .clickable(&options.toggle_selectors[2], "toggle")
            .after_clicks(2, &options.content_shown_selector, &["content"]);

        assert!(GlobalToggle.attempt(&mut page, &options).unwrap());
        assert_eq!(page.clicks, vec!["toggle", "toggle"]);
    }

    #[test]
    fn test_global_toggle_moves_to_next_selector() {
        let options = RevealOptions::default();
        let mut page = MockPage::new()
            .element("first", MockElement::default())
            .element("second", MockElement::default())
            .element("content", MockElement::default())
            .clickable(&options.toggle_selectors[0], "first")
            .clickable(&options.toggle_selectors[4], "second")
            .after_clicks(3, &options.content_shown_selector, &["content"]);

        assert!(GlobalToggle.attempt(&mut page, &options).unwrap());
        assert_eq!(page.clicks, vec!["first", "first", "second"]);
    }

    #[test]
    fn test_global_toggle_without_controls() {
        let mut page = MockPage::new();
        assert!(!GlobalToggle
            .attempt(&mut page, &RevealOptions::default())
            .unwrap());
        assert!(page.clicks.is_empty());
    }

    #[test]
    fn test_expanded_state_controls() {
        let options = RevealOptions::default();
        let mut page = MockPage::new()
            .element("collapsed", expanded("false"))
            .element("open", expanded("true"))
            .element("odd", expanded("mixed"))
            .matching(&options.expanded_state_selector, &["collapsed", "open", "odd"]);

        assert!(ExpandedStateControls.attempt(&mut page, &options).unwrap());
        assert_eq!(page.clicks, vec!["collapsed", "open", "open"]);
        assert_eq!(
            page.pauses,
            vec![
                Duration::from_secs(1),
                Duration::from_millis(500),
                Duration::from_secs(1),
                Duration::from_secs(2),
            ]
        );
    }

    #[test]
    fn test_expanded_state_control_errors_are_skipped() {
        let options = RevealOptions::default();
        let mut broken = expanded("false");
        broken.fail_click = true;
        let mut page = MockPage::new()
            .element("broken", broken)
            .element("ok", expanded("false"))
            .matching(&options.expanded_state_selector, &["broken", "ok"]);

        assert!(ExpandedStateControls.attempt(&mut page, &options).unwrap());
        assert_eq!(page.clicks, vec!["ok"]);
    }

    #[test]
    fn test_expanded_state_controls_none_found() {
        let mut page = MockPage::new();
        assert!(!ExpandedStateControls
            .attempt(&mut page, &RevealOptions::default())
            .unwrap());
        assert!(page.pauses.is_empty());
    }

    #[test]
    fn test_section_headers_click_displayed_only() {
        let options = RevealOptions::default();
        let mut page = MockPage::new()
            .element("h1", displayed())
            .element("h2", MockElement::default())
            .element("b1", displayed())
            .matching(&options.header_selectors[1], &["b1"])
            .matching(&options.header_selectors[2], &["h1", "h2"]);

        assert!(SectionHeaders.attempt(&mut page, &options).unwrap());
        assert_eq!(page.clicks, vec!["b1", "h1"]);
        assert_eq!(page.total_pause(), Duration::from_millis(2600));
    }

    #[test]
    fn test_section_headers_nothing_displayed() {
        let options = RevealOptions::default();
        let mut page = MockPage::new()
            .element("h", MockElement::default())
            .matching(&options.header_selectors[2], &["h"]);
        assert!(!SectionHeaders.attempt(&mut page, &options).unwrap());
    }
}
