// src/specs/sessions.rs
//! Scraping *spec* for the session catalog search page.
//!
//! Purpose:
//! - Locate every `div.sessionRow` in a saved venue/day snapshot, in document order.
//! - Pull the per-session fields out of one row into a `RawFieldBag`.
//!
//! Page shape (only what we rely on):
//! ```text
//! <div class="sessionRow" id="session_12345">
//!   <span class="abbreviation">ARC - 301-R</span>
//!   <span class="title">Serverless at scale <i class="fa fa-headphones"></i></span>
//!   <small class="type">Chalk Talk</small>
//!   <span class="abstract">…<a>View More</a></span>
//!   <small class="speakers">Ann Lee, AWS<br/>Bo Kim, Acme<br/></small>
//!   <a class="interested">…</a>                      (only when starred)
//!   <ul class="availableSessions"><li>Reserve seat Mon, Nov 26, …</li></ul>
//! </div>
//! ```
//!
//! `<i>` markup (audio/format icons inside titles) is removed from the whole
//! document before anything is located.
//!
//! Non-Responsibilities: timing interpretation (`schedule`, `time`), batching
//! and failure policy (`scrape`).

use scraper::{ElementRef, Html};
use thiserror::Error;

use crate::core::html::{detach_all, first, lines_split_on_br, text_at};
use crate::core::sanitize::{char_slice, flatten_newlines, quote_safe, strip_trailing_label};

const VIEW_MORE: &str = "View More";

/// A located document. Owns the parsed DOM; nodes borrow from it.
pub struct SessionDocument {
    doc: Html,
    italics_removed: usize,
}

/// One `div.sessionRow` subtree.
#[derive(Clone, Copy)]
pub struct SessionNode<'a>(ElementRef<'a>);

impl<'a> SessionNode<'a> {
    /// Raw `id` attribute, e.g. "session_12345".
    pub fn dom_id(&self) -> Option<&'a str> {
        self.0.value().attr("id")
    }

    pub fn element(&self) -> ElementRef<'a> {
        self.0
    }
}

/// Parse `html` and strip italic markup. Locating happens in `nodes`.
pub fn locate(html: &str) -> SessionDocument {
    let mut doc = Html::parse_document(html);
    let italics_removed = detach_all(&mut doc, selector!("i"));
    SessionDocument { doc, italics_removed }
}

impl SessionDocument {
    /// Every session row in document order. Empty is a normal outcome.
    pub fn nodes(&self) -> Vec<SessionNode<'_>> {
        self.doc
            .select(selector!("div.sessionRow"))
            .map(SessionNode)
            .collect()
    }

    pub fn italics_removed(&self) -> usize {
        self.italics_removed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFieldBag {
    /// DOM id with the prefix up to the first '_' removed.
    pub id: String,
    /// Abbreviation with " - " removed, e.g. "ARC301-R".
    pub code: String,
    /// 4th..6th chars of `code`.
    pub level: String,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub speakers: String,
    pub interested: bool,
    /// Raw text of the first availability entry; empty when the row has none.
    pub schedule_text: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("session {session}: missing required field `{field}`")]
pub struct MissingField {
    pub session: String,
    pub field: &'static str,
}

pub fn extract(node: SessionNode<'_>) -> Result<RawFieldBag, MissingField> {
    let row = node.element();

    let dom_id = node.dom_id().ok_or_else(|| MissingField {
        session: s!("<no id>"),
        field: "id",
    })?;
    let id = session_id_from_dom_id(dom_id);

    let required = |field: &'static str, sel| {
        text_at(row, sel).ok_or_else(|| MissingField { session: id.clone(), field })
    };

    let code = required("abbreviation", selector!("span.abbreviation"))?.replace(" - ", "");
    let level = char_slice(&code, 3, 3);
    let title = quote_safe(required("title", selector!("span.title"))?.trim_end());
    let kind = required("type", selector!("small.type"))?;

    let description = text_at(row, selector!("span.abstract"))
        .map(|raw| clean_abstract(&raw))
        .unwrap_or_default();

    let speakers = first(row, selector!("small.speakers"))
        .map(|el| join_speakers(&lines_split_on_br(el)))
        .unwrap_or_default();

    let interested = first(row, selector!("a.interested")).is_some();

    // First listed slot only; later <li> entries would run into its room text.
    let schedule_text = text_at(row, selector!("ul.availableSessions > li"))
        .or_else(|| text_at(row, selector!("ul.availableSessions")))
        .unwrap_or_default();

    Ok(RawFieldBag {
        id,
        code,
        level,
        title,
        description,
        kind,
        speakers,
        interested,
        schedule_text,
    })
}

/* ---------- helpers ---------- */

/// "session_12345" → "12345"; no underscore keeps the whole value.
fn session_id_from_dom_id(dom_id: &str) -> String {
    match dom_id.find('_') {
        Some(i) => s!(&dom_id[i + 1..]),
        None => s!(dom_id),
    }
}

fn clean_abstract(raw: &str) -> String {
    let flat = flatten_newlines(raw);
    quote_safe(strip_trailing_label(&flat, VIEW_MORE))
}

/// One speaker per `<br>` line; blank lines dropped, joined by ", ".
fn join_speakers(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r##"
        <div class="sessionRow" id="session_12345">
          <span class="abbreviation">ARC - 301-R</span>
          <span class="title">Serverless "at scale" <i class="fa fa-headphones">audio</i>  </span>
          <small class="type">Chalk Talk</small>
          <span class="abstract">Line one.
Line "two".   <a href="#">View More</a></span>
          <small class="speakers">Ann Lee, AWS<br/>Bo Kim, Acme<br/></small>
          <a class="interested" href="#">Interested</a>
          <ul class="availableSessions"><li>Reserve seat Mon, Nov 26, 10:30 AM - 11:30 AM. Venetian, Level 2, Murano 3306, 3307</li></ul>
        </div>"##;

    fn only_bag(html: &str) -> Result<RawFieldBag, MissingField> {
        let doc = locate(html);
        let nodes = doc.nodes();
        assert_eq!(nodes.len(), 1);
        extract(nodes[0])
    }

    #[test]
    fn full_row_extracts_every_field() {
        let bag = only_bag(ROW).unwrap();
        assert_eq!(bag.id, "12345");
        assert_eq!(bag.code, "ARC301-R");
        assert_eq!(bag.level, "301");
        assert_eq!(bag.title, "Serverless 'at scale'");
        assert_eq!(bag.description, "Line one. Line 'two'.");
        assert_eq!(bag.kind, "Chalk Talk");
        assert_eq!(bag.speakers, "Ann Lee, AWS, Bo Kim, Acme");
        assert!(bag.interested);
        assert!(bag.schedule_text.starts_with("Reserve seat Mon, Nov 26"));
    }

    #[test]
    fn italics_are_stripped_before_locating() {
        let doc = locate(ROW);
        assert_eq!(doc.italics_removed(), 1);
        let bag = extract(doc.nodes()[0]).unwrap();
        assert!(!bag.title.contains("audio"));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let bag = only_bag(
            r#"<div class="sessionRow" id="session_9">
                 <span class="abbreviation">DEV201</span>
                 <span class="title">Minimal</span>
                 <small class="type">Session</small>
               </div>"#,
        )
        .unwrap();
        assert_eq!(bag.speakers, "");
        assert_eq!(bag.description, "");
        assert_eq!(bag.schedule_text, "");
        assert!(!bag.interested);
    }

    #[test]
    fn empty_speakers_element_is_empty_string() {
        let bag = only_bag(
            r#"<div class="sessionRow" id="session_9">
                 <span class="abbreviation">DEV201</span>
                 <span class="title">T</span>
                 <small class="type">Session</small>
                 <small class="speakers"> <br/> </small>
               </div>"#,
        )
        .unwrap();
        assert_eq!(bag.speakers, "");
    }

    #[test]
    fn missing_title_is_structural() {
        let err = only_bag(
            r#"<div class="sessionRow" id="session_77">
                 <span class="abbreviation">DEV201</span>
                 <small class="type">Session</small>
               </div>"#,
        )
        .unwrap_err();
        assert_eq!(err, MissingField { session: s!("77"), field: "title" });
    }

    #[test]
    fn only_first_slot_is_read() {
        let bag = only_bag(
            r#"<div class="sessionRow" id="session_8">
                 <span class="abbreviation">ARC - 308</span>
                 <span class="title">Twice</span>
                 <small class="type">Session</small>
                 <ul class="availableSessions">
                   <li>Reserve seat Mon, Nov 26, 10:30 AM - 11:30 AM. Venetian, Level 2, Murano 3306</li>
                   <li>Reserve seat Tue, Nov 27, 1:00 PM - 2:00 PM. Aria, Level 3</li>
                 </ul>
               </div>"#,
        )
        .unwrap();
        assert_eq!(
            bag.schedule_text,
            "Reserve seat Mon, Nov 26, 10:30 AM - 11:30 AM. Venetian, Level 2, Murano 3306"
        );
        match crate::specs::schedule::parse(&bag.schedule_text) {
            crate::specs::schedule::ScheduleTiming::Resolved(slot) => {
                assert_eq!(slot.room, "Level 2 - Murano 3306")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bare_list_text_is_still_read() {
        let bag = only_bag(
            r#"<div class="sessionRow" id="session_9">
                 <span class="abbreviation">ARC - 309</span>
                 <span class="title">Bare</span>
                 <small class="type">Session</small>
                 <ul class="availableSessions">Tue, Nov 27, 1:00 PM - 2:00 PM. Aria</ul>
               </div>"#,
        )
        .unwrap();
        assert!(bag.schedule_text.contains("Nov 27"));
    }

    #[test]
    fn missing_id_is_structural() {
        let err = only_bag(r#"<div class="sessionRow"><span class="title">T</span></div>"#).unwrap_err();
        assert_eq!(err.field, "id");
    }

    #[test]
    fn no_sessions_is_empty_not_error() {
        let doc = locate("<html><body><p>No results</p></body></html>");
        assert!(doc.nodes().is_empty());
    }

    #[test]
    fn rows_come_back_in_document_order() {
        let html = r#"
            <div id="searchResult">
              <div class="sessionRow" id="session_3"></div>
              <div class="other"><div class="sessionRow" id="session_1"></div></div>
              <div class="sessionRow" id="session_2"></div>
            </div>"#;
        let doc = locate(html);
        let ids: Vec<_> = doc.nodes().iter().filter_map(|n| n.dom_id()).collect();
        assert_eq!(ids, vec!["session_3", "session_1", "session_2"]);
    }

    #[test]
    fn dom_id_prefix_rules() {
        assert_eq!(session_id_from_dom_id("session_123"), "123");
        assert_eq!(session_id_from_dom_id("a_b_c"), "b_c");
        assert_eq!(session_id_from_dom_id("plain"), "plain");
    }
}
