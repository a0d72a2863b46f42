//! Group bulk-apply

use redline_page::{NodeId, Page, Result, Role};

use crate::toggle::toggle_custom_input;

/// Set every action selector grouped under heading `label` to `value`.
///
/// Headings are compared verbatim. Selectors outside any group container
/// are skipped. Returns the selectors that were changed.
pub fn apply_to_group(page: &mut Page, value: &str, label: &str) -> Result<Vec<NodeId>> {
    let mut changed = Vec::new();

    for selector in page.find_by_role(Role::ActionSelector) {
        let Some(container) = page.closest(selector, Role::GroupContainer) else {
            continue;
        };
        if page.group_label(container).as_deref() != Some(label) {
            continue;
        }

        page.set_value(selector, value)?;
        toggle_custom_input(page, selector)?;
        changed.push(selector);
    }

    tracing::debug!(group = label, value, count = changed.len(), "Applied action to group");
    Ok(changed)
}
