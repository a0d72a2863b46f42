//! Loading server-rendered markup into a [`Page`]

use scraper::{ElementRef, Html};

use crate::{ElementBuilder, NodeId, Page, Result, Role};

impl Page {
    /// Build a page from an HTML document.
    ///
    /// Parsing is lenient, as in a browser; malformed markup still yields a page.
    pub fn from_html(html: &str) -> Result<Page> {
        let document = Html::parse_document(html);
        let mut page = Page::new();
        let root = page.root();
        load_element(&mut page, root, document.root_element())?;

        let roles: Vec<Role> = page
            .elements()
            .into_iter()
            .filter_map(|id| page.role(id))
            .collect();
        tracing::debug!(
            elements = page.elements().len(),
            selectors = roles.iter().filter(|r| **r == Role::ActionSelector).count(),
            "Loaded page"
        );

        Ok(page)
    }
}

fn load_element(page: &mut Page, parent: NodeId, element: ElementRef<'_>) -> Result<()> {
    let value = element.value();
    let mut builder = ElementBuilder::new(value.name());
    for (name, attr) in value.attrs() {
        builder = builder.attr(name, attr);
    }
    let id = page.append(parent, builder)?;

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            load_element(page, id, child_element)?;
        } else if let Some(text) = child.value().as_text() {
            page.append_text(id, text)?;
        }
    }

    match page.element(id)?.tag.as_str() {
        "select" => page.sync_select_value(id)?,
        "textarea" => {
            let text = page.text_content(id);
            page.set_value(id, &text)?;
        }
        _ => {}
    }
    Ok(())
}
