//! Custom-value input visibility

use redline_core::Action;
use redline_page::{NodeId, Page, Result, Role};

/// Show the custom input right after `selector` iff the selector holds the
/// CUSTOM sentinel.
///
/// Only the immediately following element is considered, and only when it
/// is a custom input. Returns that input when one was updated.
pub fn toggle_custom_input(page: &mut Page, selector: NodeId) -> Result<Option<NodeId>> {
    let show = Action::is_custom_value(page.value(selector).unwrap_or_default());

    let Some(sibling) = page.next_element_sibling(selector) else {
        return Ok(None);
    };
    if page.role(sibling) != Some(Role::CustomInput) {
        return Ok(None);
    }

    page.set_visible(sibling, show)?;
    Ok(Some(sibling))
}
