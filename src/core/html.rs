// src/core/html.rs
//
// Small DOM helpers over `scraper`. Everything here is page-agnostic; the
// catalog's class names live in `specs`.
use scraper::{ElementRef, Html, Node, Selector};

/// Remove every element matching `sel` (with its subtree) from the document.
/// Returns how many were detached.
pub fn detach_all(doc: &mut Html, sel: &Selector) -> usize {
    let ids: Vec<_> = doc.select(sel).map(|el| el.id()).collect();
    let mut n = 0;
    for id in ids {
        // A match nested inside an earlier match is already gone with its parent;
        // detaching it again is harmless.
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
            n += 1;
        }
    }
    n
}

/// First descendant matching `sel`.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// All text under `el`, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of the first descendant matching `sel`, if present.
pub fn text_at(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    first(el, sel).map(text_of)
}

/// Split the direct content of `el` on `<br>` elements.
/// Text nodes and nested elements contribute their text to the current line.
pub fn lines_split_on_br(el: ElementRef<'_>) -> Vec<String> {
    let mut lines = vec![s!()];
    for child in el.children() {
        match child.value() {
            Node::Text(t) => push_last(&mut lines, t),
            Node::Element(e) if e.name().eq_ignore_ascii_case("br") => lines.push(s!()),
            Node::Element(_) => {
                if let Some(inner) = ElementRef::wrap(child) {
                    push_last(&mut lines, &text_of(inner));
                }
            }
            _ => {}
        }
    }
    lines
}

fn push_last(lines: &mut [String], text: &str) {
    if let Some(last) = lines.last_mut() {
        last.push_str(text);
    }
}
