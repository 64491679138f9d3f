//! Line-level parsing of the edge-list format.

use graphkit_core::{Edge, Weight};

/// One meaningful line: its 1-based number and its text with the comment
/// and surrounding whitespace removed.
pub(crate) struct DataLine<'a> {
    pub(crate) number: usize,
    pub(crate) text: &'a str,
}

/// Strips a trailing `#` comment and whitespace; `None` when nothing is left.
pub(crate) fn data_line(number: usize, raw: &str) -> Option<DataLine<'_>> {
    let text = raw.split_once('#').map_or(raw, |(data, _)| data).trim();
    (!text.is_empty()).then_some(DataLine { number, text })
}

pub(crate) fn header(text: &str) -> Option<usize> {
    let mut fields = text.split_whitespace();
    let count = fields.next()?.parse().ok()?;
    fields.next().is_none().then_some(count)
}

pub(crate) fn edge(text: &str) -> Option<Edge> {
    let mut fields = text.split_whitespace();
    let from: usize = fields.next()?.parse().ok()?;
    let to: usize = fields.next()?.parse().ok()?;
    let weight: Weight = fields.next()?.parse().ok()?;
    fields.next().is_none().then_some(Edge::new(from, to, weight))
}
