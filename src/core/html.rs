// src/core/html.rs
use scraper::{ElementRef, Html, Node, Selector};

/// Owned, parsed page. Read-only once built; every platform lookup of a run
/// borrows the same instance.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    pub fn select<'a, 'b>(
        &'a self,
        selector: &'b Selector,
    ) -> scraper::html::Select<'a, 'b> {
        self.html.select(selector)
    }
}

impl std::fmt::Debug for PageDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDocument")
            .field("nodes", &self.html.tree.nodes().count())
            .finish()
    }
}

/// The element's single string, if it has exactly one.
///
/// Descends through elements that have a lone child; any element with zero
/// or several children (text or tags) has no single string.
pub fn single_string(el: ElementRef<'_>) -> Option<String> {
    let mut node = *el;
    loop {
        let mut children = node.children();
        let only = children.next()?;
        if children.next().is_some() {
            return None;
        }
        match only.value() {
            Node::Text(text) => return Some((**text).to_owned()),
            Node::Element(_) => node = only,
            _ => return None,
        }
    }
}

/// Concatenated descendant text, trimmed at both ends.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
