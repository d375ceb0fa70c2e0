//! Integration tests for the reveal chain against a scripted page.

use std::collections::HashMap;
use std::time::Duration;

use unfold::extract::ObserverEvent;
use unfold::reveal::{
    ExpandedStateControls, GlobalToggle, RevealChain, RevealOptions, RevealStrategy,
    SectionHeaders,
};
use unfold::{reveal, ElementHandle, Error, RecordingObserver, Result, RevealPage, Unfold};

/// A page with collapsible sections that expand when the right control is clicked.
#[derive(Default)]
struct FakePage {
    /// selector -> element ids
    selectors: HashMap<String, Vec<String>>,
    /// element id -> attributes
    attributes: HashMap<String, HashMap<String, String>>,
    /// element ids that expand the page when clicked
    expanders: Vec<String>,
    displayed: Vec<String>,
    expanded: bool,
    clicks: Vec<String>,
    pauses: Vec<Duration>,
}

impl FakePage {
    fn with(mut self, selector: &str, ids: &[&str]) -> Self {
        self.selectors
            .insert(selector.to_string(), ids.iter().map(|s| s.to_string()).collect());
        self
    }
}

impl RevealPage for FakePage {
    fn find_all(&mut self, selector: &str) -> Result<Vec<ElementHandle>> {
        if selector.contains("section-content-is-shown") && self.expanded {
            return Ok(vec![ElementHandle::new("content")]);
        }
        Ok(self
            .selectors
            .get(selector)
            .map(|ids| ids.iter().map(ElementHandle::new).collect())
            .unwrap_or_default())
    }

    fn wait_for_clickable(&mut self, selector: &str, _timeout: Duration) -> Result<ElementHandle> {
        self.selectors
            .get(selector)
            .and_then(|ids| ids.first())
            .map(ElementHandle::new)
            .ok_or_else(|| Error::Timeout(selector.to_string()))
    }

    fn click(&mut self, element: &ElementHandle) -> Result<()> {
        self.clicks.push(element.id().to_string());
        if self.expanders.iter().any(|e| e == element.id()) {
            self.expanded = true;
        }
        Ok(())
    }

    fn attribute(&mut self, element: &ElementHandle, name: &str) -> Result<Option<String>> {
        Ok(self
            .attributes
            .get(element.id())
            .and_then(|attrs| attrs.get(name))
            .cloned())
    }

    fn text(&mut self, _element: &ElementHandle) -> Result<String> {
        Ok("short".to_string())
    }

    fn is_displayed(&mut self, element: &ElementHandle) -> Result<bool> {
        Ok(self.displayed.iter().any(|d| d == element.id()))
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// A page whose session has died.
struct DeadPage;

impl RevealPage for DeadPage {
    fn find_all(&mut self, _selector: &str) -> Result<Vec<ElementHandle>> {
        Err(Error::Driver("session closed".into()))
    }

    fn wait_for_clickable(&mut self, _selector: &str, _timeout: Duration) -> Result<ElementHandle> {
        Err(Error::Driver("session closed".into()))
    }

    fn click(&mut self, _element: &ElementHandle) -> Result<()> {
        Err(Error::Driver("session closed".into()))
    }

    fn attribute(&mut self, _element: &ElementHandle, _name: &str) -> Result<Option<String>> {
        Err(Error::Driver("session closed".into()))
    }

    fn text(&mut self, _element: &ElementHandle) -> Result<String> {
        Err(Error::Driver("session closed".into()))
    }

    fn is_displayed(&mut self, _element: &ElementHandle) -> Result<bool> {
        Err(Error::Driver("session closed".into()))
    }

    fn pause(&mut self, _duration: Duration) {}
}

#[test]
fn test_global_toggle_short_circuits_chain() {
    let options = RevealOptions::default();
    let mut page = FakePage {
        expanders: vec!["toggle-all".into()],
        ..Default::default()
    }
    .with(&options.toggle_selectors[0], &["toggle-all"])
    .with("button[aria-expanded]", &["b1"]);

    let mut observer = RecordingObserver::new();
    assert!(RevealChain::default().run(&mut page, &mut observer));

    assert_eq!(observer.reveal_attempts(), vec!["global-toggle"]);
    assert_eq!(page.clicks, vec!["toggle-all"]);
}

#[test]
fn test_falls_through_to_expanded_state_controls() {
    let mut page = FakePage {
        attributes: HashMap::from([(
            "b1".to_string(),
            HashMap::from([("aria-expanded".to_string(), "false".to_string())]),
        )]),
        ..Default::default()
    }
    .with("button[aria-expanded]", &["b1"]);

    let mut observer = RecordingObserver::new();
    assert!(RevealChain::default().run(&mut page, &mut observer));

    assert_eq!(
        observer.events(),
        &[
            ObserverEvent::RevealAttempt {
                strategy: "global-toggle".into(),
                success: false,
                error: None
            },
            ObserverEvent::RevealAttempt {
                strategy: "expanded-state-controls".into(),
                success: true,
                error: None
            },
        ]
    );
    assert_eq!(page.clicks, vec!["b1"]);
    assert_eq!(
        page.pauses,
        vec![Duration::from_secs(1), Duration::from_secs(2)]
    );
}

#[test]
fn test_falls_through_to_section_headers() {
    let options = RevealOptions::default();
    let mut page = FakePage {
        displayed: vec!["h-1".into(), "h-2".into()],
        ..Default::default()
    }
    .with(&options.header_selectors[2], &["h-1", "h-2", "h-hidden"]);

    let mut observer = RecordingObserver::new();
    assert!(RevealChain::default().run(&mut page, &mut observer));
    assert_eq!(
        observer.reveal_attempts(),
        vec!["global-toggle", "expanded-state-controls", "section-headers"]
    );
    assert_eq!(page.clicks, vec!["h-1", "h-2"]);
}

#[test]
fn test_nothing_to_reveal() {
    let mut page = FakePage::default();
    assert!(!reveal(&mut page));
    assert!(page.clicks.is_empty());
    assert!(page.pauses.is_empty());
}

#[test]
fn test_driver_failures_never_escape() {
    let mut observer = RecordingObserver::new();
    assert!(!Unfold::new().reveal(&mut DeadPage, &mut observer));

    let errors: Vec<_> = observer
        .events()
        .iter()
        .filter_map(|e| match e {
            ObserverEvent::RevealAttempt { error, .. } => error.clone(),
            _ => None,
        })
        .collect();
    assert_eq!(
        errors,
        vec![
            "Page driver error: session closed".to_string(),
            "Page driver error: session closed".to_string(),
        ]
    );
}

#[test]
fn test_custom_chain() {
    struct Always;

    impl RevealStrategy for Always {
        fn name(&self) -> &'static str {
            "always"
        }

        fn attempt(&self, _page: &mut dyn RevealPage, _options: &RevealOptions) -> Result<bool> {
            Ok(true)
        }
    }

    let chain = RevealChain::new()
        .with_strategy(SectionHeaders)
        .with_strategy(Always)
        .with_strategy(GlobalToggle)
        .with_strategy(ExpandedStateControls);
    let mut observer = RecordingObserver::new();

    assert!(chain.run(&mut FakePage::default(), &mut observer));
    assert_eq!(observer.reveal_attempts(), vec!["section-headers", "always"]);
}
