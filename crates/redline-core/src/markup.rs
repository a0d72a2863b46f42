//! Conversion of plain-text previews into display markup

/// Line-break markup used by the preview surface
pub const LINE_BREAK: &str = "<br>";

/// Render preview text for the modal content region.
///
/// Only newlines are rewritten. The text is inserted as-is otherwise, so the
/// server is trusted to return displayable text.
pub fn preview_markup(preview: &str) -> String {
    preview.replace('\n', LINE_BREAK)
}
