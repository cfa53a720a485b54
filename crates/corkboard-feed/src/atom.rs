//! Atom 1.0 envelope serialization.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::entry::{Feed, FeedEntry};
use crate::xml::write_text_element;
use crate::{FeedError, FeedResult};

/// Serializes a feed as Atom.
///
/// ## Summary
/// Produces a well-formed Atom 1.0 document for any number of entries,
/// including none.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid
/// UTF-8 (which should never happen with well-formed input).
pub fn serialize_atom(feed: &Feed) -> FeedResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_feed(&mut writer, feed)?;

    let result = writer.into_inner();
    String::from_utf8(result).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in atom XML: {}", e);
        FeedError::InvalidUtf8
    })
}

fn write_feed<W: std::io::Write>(
    writer: &mut Writer<W>,
    feed: &Feed,
) -> Result<(), quick_xml::Error> {
    // XML declaration
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    // Start feed element with namespace and language
    let mut elem = BytesStart::new("feed");
    elem.push_attribute(("xmlns", "http://www.w3.org/2005/Atom"));
    elem.push_attribute(("xml:lang", feed.meta.language.as_str()));
    writer.write_event(Event::Start(elem))?;

    write_text_element(writer, "id", &feed.meta.page_url)?;
    write_text_element(writer, "title", &feed.meta.title)?;
    write_text_element(writer, "subtitle", &feed.meta.description)?;
    write_text_element(writer, "updated", &timestamp(feed.updated))?;

    if let Some(ref logo) = feed.meta.logo_url {
        write_text_element(writer, "logo", logo)?;
    }

    write_link(writer, &feed.meta.self_url, Some("self"))?;
    write_link(writer, &feed.meta.page_url, Some("alternate"))?;

    for entry in &feed.entries {
        write_entry(writer, entry, feed.updated)?;
    }

    writer.write_event(Event::End(BytesEnd::new("feed")))?;

    Ok(())
}

fn write_entry<W: std::io::Write>(
    writer: &mut Writer<W>,
    entry: &FeedEntry,
    updated: NaiveDate,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("entry")))?;

    write_text_element(writer, "id", &entry.url)?;
    write_text_element(writer, "title", &entry.title)?;
    write_text_element(writer, "updated", &timestamp(updated))?;
    write_link(writer, &entry.url, None)?;
    write_text_element(writer, "summary", &entry.synopsis)?;

    writer.write_event(Event::End(BytesEnd::new("entry")))?;

    Ok(())
}

fn write_link<W: std::io::Write>(
    writer: &mut Writer<W>,
    href: &str,
    rel: Option<&str>,
) -> Result<(), quick_xml::Error> {
    let mut elem = BytesStart::new("link");
    elem.push_attribute(("href", href));
    if let Some(rel) = rel {
        elem.push_attribute(("rel", rel));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

// Atom timestamps are full date-times; dates are stamped at midnight UTC.
fn timestamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%dT00:00:00Z").to_string()
}
