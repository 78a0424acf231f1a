use crate::model::field::{FieldSection, ItemField, SECRETS_MASK};
use crate::model::item::VaultItem;
use crate::util::strings::{display_width, truncate_to_width};

/// Row values wider than this are truncated with an ellipsis
const VALUE_WIDTH: usize = 72;

/// Format the item header line
pub fn format_item_header(item: &VaultItem) -> String {
    format!("== {} ({}) ==", item.name, item.item_type.label())
}

/// The text a row shows for a field: the mask for sensitive fields unless
/// revealed, otherwise the display value.
fn row_text(field: &ItemField, reveal: bool) -> String {
    if field.is_sensitive() && !reveal {
        SECRETS_MASK.to_string()
    } else {
        field.display_text().to_string()
    }
}

/// Format one section as a title line plus one row per field, labels padded
/// into a column. Multi-line values continue indented under the value column.
pub fn format_section(section: &FieldSection, reveal: bool) -> Vec<String> {
    let mut lines = vec![section.title.clone()];

    let label_width = section
        .fields
        .iter()
        .map(|f| display_width(f.label()))
        .max()
        .unwrap_or(0);

    for field in &section.fields {
        let text = row_text(field, reveal);
        let mut value_lines = text.lines();
        let first = value_lines.next().unwrap_or("");

        let pad = " ".repeat(label_width - display_width(field.label()));
        let row = format!(
            "  {}{}  {}",
            field.label(),
            pad,
            truncate_to_width(first, VALUE_WIDTH)
        );
        lines.push(row.trim_end().to_string());

        let indent = " ".repeat(2 + label_width + 2);
        for cont in value_lines {
            lines.push(format!("{}{}", indent, truncate_to_width(cont, VALUE_WIDTH)));
        }
    }

    lines
}

/// Format a whole item: header, then each section separated by a blank line
pub fn format_sections(item: &VaultItem, sections: &[FieldSection], reveal: bool) -> Vec<String> {
    let mut lines = vec![format_item_header(item)];

    if sections.is_empty() {
        lines.push(String::new());
        lines.push("(no displayable fields)".to_string());
        return lines;
    }

    for section in sections {
        lines.push(String::new());
        lines.extend(format_section(section, reveal));
    }
    lines
}
