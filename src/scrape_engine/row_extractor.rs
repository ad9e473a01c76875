//! Row Extractor: turns one table row's inner markup into ordered cell texts.
//!
//! The registry renders cells that mix plain text with inline-tagged text
//! (`<td>foo <span>bar</span></td>`), so cell text is built from each direct
//! child node individually: take the child's text content, trim it, then
//! concatenate the pieces with no separator.

use scraper::{ElementRef, Html, Selector};

use crate::listing::RowCells;

const CELL_SELECTOR: &str = "td";

/// Extract the trimmed cell texts of one row from its inner markup.
///
/// Zero matching cells yields an empty [`RowCells`], not an error — a
/// degenerate but valid page (header rows, empty result sets).
pub fn extract_cells(row_html: &str) -> RowCells {
    // The input is the inner markup of a <tr>, i.e. bare <td> tags. The
    // HTML5 tree builder foster-parents cells that appear outside a table,
    // stripping the <td> elements entirely, so re-wrap in a table context
    // before selecting.
    let fragment = Html::parse_fragment(&format!("<table><tbody><tr>{row_html}</tr></tbody></table>"));
    // Infallible for a constant tag-name selector.
    let selector = Selector::parse(CELL_SELECTOR).expect("static cell selector");

    let cells = fragment
        .select(&selector)
        .map(cell_text)
        .collect::<Vec<String>>();

    RowCells::new(cells)
}

/// Concatenated trimmed text of a cell's direct child nodes.
fn cell_text(cell: ElementRef<'_>) -> String {
    use scraper::node::Node;

    let mut text = String::new();
    for child in cell.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t.trim()),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    text.push_str(element.text().collect::<String>().trim());
                }
            }
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_cells_in_document_order() {
        let row = extract_cells("<td>1</td><td>alpha</td><td>beta</td>");
        assert_eq!(row.len(), 3);
        assert_eq!(row.field(0), "1");
        assert_eq!(row.field(1), "alpha");
        assert_eq!(row.field(2), "beta");
    }

    #[test]
    fn trims_each_child_node_and_joins_without_separator() {
        // " foo " and "<b> bar </b>" both trim, then concatenate directly.
        let row = extract_cells("<td> foo <b> bar </b></td>");
        assert_eq!(row.field(0), "foobar");
    }

    #[test]
    fn nested_inline_markup_contributes_its_full_text() {
        let row = extract_cells("<td><span>a<i>b</i></span> c</td>");
        assert_eq!(row.field(0), "abc");
    }

    #[test]
    fn full_registry_row_extracts_every_cell() {
        // The exact shape row_markup produces: a <tr>'s inner markup, with
        // no surrounding table element.
        let row = extract_cells(
            "<td>1</td><td>Tonometer <span>WA-99</span></td><td>Acme GmbH</td>\
             <td>Acme Bel</td><td>10-1-123456</td><td>IM-7.100200</td>\
             <td>01.02.2020</td><td>01.02.2030</td><td>device</td>",
        );
        assert_eq!(row.len(), 9);
        assert_eq!(row.field(1), "TonometerWA-99");
        assert_eq!(row.field(5), "IM-7.100200");
        assert_eq!(row.field(8), "device");
    }

    #[test]
    fn no_cells_yields_empty_row() {
        assert!(extract_cells("<th>header</th>").is_empty());
        assert!(extract_cells("").is_empty());
    }

    #[test]
    fn empty_cells_pass_through_as_empty_strings() {
        let row = extract_cells("<td></td><td>x</td><td>   </td>");
        assert_eq!(row.field(0), "");
        assert_eq!(row.field(1), "x");
        assert_eq!(row.field(2), "");
    }
}
