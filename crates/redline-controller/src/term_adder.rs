//! Bounded growth of ad-hoc term slots

use std::cell::Cell;
use std::fmt;

use redline_core::form::{additional_replacement_field, additional_term_field};
use redline_page::{ElementBuilder, NodeId, Page, PageError, Result, Role};

/// 1-based sequence number of an additional term slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u32);

impl SlotId {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot counter for one page load.
///
/// The counter only grows; slots are never removed or renumbered, so names
/// derived from it cannot collide.
#[derive(Debug)]
pub struct TermAdder {
    count: Cell<u32>,
    max: u32,
    trigger: Option<NodeId>,
    container: Option<NodeId>,
}

impl TermAdder {
    /// Bind to the page's add trigger and slot container
    pub fn resolve(page: &mut Page, max: u32) -> Result<Self> {
        let adder = Self {
            count: Cell::new(0),
            max,
            trigger: page.first_by_role(Role::AddTermTrigger),
            container: page.first_by_role(Role::AdditionalTerms),
        };
        if !adder.can_add_slot() {
            adder.hide_trigger(page)?;
        }
        Ok(adder)
    }

    pub fn can_add_slot(&self) -> bool {
        self.count.get() < self.max
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Append one (term, replacement) pair; `None` once the cap is reached.
    ///
    /// The trigger is hidden as soon as the last slot is created.
    pub fn add_slot(&self, page: &mut Page) -> Result<Option<SlotId>> {
        if !self.can_add_slot() {
            return Ok(None);
        }
        let container = self
            .container
            .ok_or_else(|| PageError::MissingElement("additional terms container".into()))?;

        let seq = self.count.get() + 1;
        self.count.set(seq);
        build_slot(page, container, seq)?;
        tracing::debug!(slot = seq, max = self.max, "Added term slot");

        if seq == self.max {
            self.hide_trigger(page)?;
        }
        Ok(Some(SlotId(seq)))
    }

    fn hide_trigger(&self, page: &mut Page) -> Result<()> {
        match self.trigger {
            Some(trigger) => page.set_visible(trigger, false),
            None => Ok(()),
        }
    }
}

fn build_slot(page: &mut Page, container: NodeId, seq: u32) -> Result<NodeId> {
    let term_name = additional_term_field(seq);
    let replacement_name = additional_replacement_field(seq);

    let group = page.append(container, ElementBuilder::new("div").class("form-group"))?;

    let label = page.append(group, ElementBuilder::new("label").attr("for", &term_name))?;
    page.append_text(label, &format!("Additional Term {}:", seq))?;
    page.append(
        group,
        ElementBuilder::new("input")
            .attr("type", "text")
            .name(&term_name)
            .id(&term_name),
    )?;

    let label = page.append(group, ElementBuilder::new("label").attr("for", &replacement_name))?;
    page.append_text(label, "Replacement:")?;
    page.append(
        group,
        ElementBuilder::new("input")
            .attr("type", "text")
            .name(&replacement_name)
            .id(&replacement_name),
    )?;

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_adder() -> (Page, NodeId, NodeId) {
        let mut page = Page::new();
        let root = page.root();
        let container = page
            .append(root, ElementBuilder::new("div").id("additionalTerms"))
            .unwrap();
        let trigger = page
            .append(root, ElementBuilder::new("button").id("addTerm"))
            .unwrap();
        (page, container, trigger)
    }

    #[test]
    fn test_slots_numbered_from_one() {
        let (mut page, container, _) = page_with_adder();
        let adder = TermAdder::resolve(&mut page, 3).unwrap();

        let ids: Vec<u32> = (0..3)
            .map(|_| adder.add_slot(&mut page).unwrap().unwrap().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(page.children(container).len(), 3);
        assert!(page.find_by_dom_id("additional_replacement_3").is_some());
    }

    #[test]
    fn test_cap_hides_trigger_and_stops_growth() {
        let (mut page, container, trigger) = page_with_adder();
        let adder = TermAdder::resolve(&mut page, 3).unwrap();

        adder.add_slot(&mut page).unwrap();
        adder.add_slot(&mut page).unwrap();
        assert!(page.is_visible(trigger));

        adder.add_slot(&mut page).unwrap();
        assert!(!page.is_visible(trigger));
        assert!(!adder.can_add_slot());

        assert_eq!(adder.add_slot(&mut page).unwrap(), None);
        assert_eq!(adder.count(), 3);
        assert_eq!(page.children(container).len(), 3);
    }

    #[test]
    fn test_slot_markup() {
        let (mut page, container, _) = page_with_adder();
        let adder = TermAdder::resolve(&mut page, 3).unwrap();
        adder.add_slot(&mut page).unwrap();

        let slot = page.children(container)[0];
        assert!(page.element(slot).unwrap().has_class("form-group"));
        assert_eq!(
            page.text_content(slot),
            "Additional Term 1:Replacement:"
        );
        let input = page.find_by_dom_id("additional_term_1").unwrap();
        assert_eq!(page.element(input).unwrap().name(), Some("additional_term_1"));
    }

    #[test]
    fn test_zero_cap_hides_trigger_up_front() {
        let (mut page, _, trigger) = page_with_adder();
        let adder = TermAdder::resolve(&mut page, 0).unwrap();

        assert!(!page.is_visible(trigger));
        assert_eq!(adder.add_slot(&mut page).unwrap(), None);
    }

    #[test]
    fn test_missing_container_keeps_count() {
        let mut page = Page::new();
        let adder = TermAdder::resolve(&mut page, 3).unwrap();

        assert!(adder.add_slot(&mut page).is_err());
        assert_eq!(adder.count(), 0);
    }
}
