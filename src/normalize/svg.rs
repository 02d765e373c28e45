use crate::{
    foundation::error::{DioramaError, DioramaResult},
    normalize::bbox::ViewBox,
};

/// One `<path>` element's geometry as found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathData {
    /// Document-order index among `<path>` elements.
    pub index: usize,
    /// The element's `id`, when present.
    pub id: Option<String>,
    /// The `d` attribute; `None` when the element has none.
    pub d: Option<String>,
}

impl PathData {
    /// Label for log lines: the id if present, else the index.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("#{id}"),
            None => format!("path[{}]", self.index),
        }
    }
}

/// Parsed view of an SVG document that keeps the original text for in-place edits.
#[derive(Debug)]
pub struct SvgSource<'a> {
    text: &'a str,
    doc: roxmltree::Document<'a>,
}

impl<'a> SvgSource<'a> {
    /// Parse `text`; the root element must be `<svg>`.
    pub fn parse(text: &'a str) -> DioramaResult<Self> {
        let doc = roxmltree::Document::parse(text)
            .map_err(|e| DioramaError::asset(format!("parse svg xml: {e}")))?;
        if !doc.root_element().has_tag_name("svg") {
            return Err(DioramaError::asset(format!(
                "root element is <{}>, expected <svg>",
                doc.root_element().tag_name().name()
            )));
        }
        Ok(Self { text, doc })
    }

    /// Every `<path>` element in document order.
    pub fn paths(&self) -> Vec<PathData> {
        self.doc
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name("path"))
            .enumerate()
            .map(|(index, n)| PathData {
                index,
                id: n.attribute("id").map(str::to_owned),
                d: n.attribute("d").map(str::to_owned),
            })
            .collect()
    }

    /// The root element's declared `viewBox`, if present and well-formed.
    pub fn view_box(&self) -> Option<ViewBox> {
        self.doc
            .root_element()
            .attribute("viewBox")
            .and_then(|v| v.parse().ok())
    }

    /// Document text with the root `viewBox` set to `view_box`.
    ///
    /// An existing attribute has its value replaced; otherwise the attribute is inserted after the
    /// element name. No other byte of the document changes.
    pub fn with_view_box(&self, view_box: &ViewBox) -> DioramaResult<String> {
        let root = self.doc.root_element();
        let value = view_box.to_string();

        let existing = root
            .attributes()
            .find(|a| a.name() == "viewBox" && a.namespace().is_none())
            .map(|a| a.range_value());
        let (splice, insert) = match existing {
            Some(range) => (range, value),
            None => {
                let at = self.name_end(root.range().start)?;
                (at..at, format!(" viewBox=\"{value}\""))
            }
        };

        let mut out = String::with_capacity(self.text.len() + insert.len());
        out.push_str(&self.text[..splice.start]);
        out.push_str(&insert);
        out.push_str(&self.text[splice.end..]);
        Ok(out)
    }

    /// Byte offset just past the element name of the start tag at `tag_start`.
    fn name_end(&self, tag_start: usize) -> DioramaResult<usize> {
        if self.text.as_bytes().get(tag_start) != Some(&b'<') {
            return Err(DioramaError::asset("root element position does not point at a tag"));
        }
        let name_start = tag_start + 1;
        let rest = &self.text[name_start..];
        let len = rest
            .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            .unwrap_or(rest.len());
        Ok(name_start + len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/svg.rs"]
mod tests;
