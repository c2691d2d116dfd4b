use std::collections::BTreeSet;

use log::debug;

use crate::view::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: Option<&'static str>,
}

pub const HIDDEN: RevealStyle = RevealStyle {
    opacity: "0",
    transform: "translateY(20px)",
    transition: Some("opacity 0.6s ease, transform 0.6s ease"),
};
pub const SHOWN: RevealStyle = RevealStyle {
    opacity: "1",
    transform: "translateY(0)",
    transition: None,
};

/// One report from whatever watches the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub element: Element,
    pub is_intersecting: bool,
}

/// One-shot fade-in. An element is unregistered the first time it is seen
/// intersecting, so later reports for it are no-ops.
#[derive(Debug, Default)]
pub struct RevealObserver {
    watching: BTreeSet<Element>,
}
impl RevealObserver {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn observe(&mut self, element: Element) -> bool {
        self.watching.insert(element)
    }
    pub fn unobserve(&mut self, element: Element) -> bool {
        self.watching.remove(&element)
    }
    pub fn is_observing(&self, element: Element) -> bool {
        self.watching.contains(&element)
    }
    pub fn is_empty(&self) -> bool {
        self.watching.is_empty()
    }
    /// Returns the elements to reveal, each at most once.
    pub fn on_intersection(&mut self, entries: &[Intersection]) -> Vec<Element> {
        let mut revealed = vec![];
        for entry in entries {
            if entry.is_intersecting && self.unobserve(entry.element) {
                debug!("Revealing {:?}", entry.element);
                revealed.push(entry.element);
            }
        }
        revealed
    }
}
