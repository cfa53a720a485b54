//! RSS 2.0 envelope serialization.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::entry::{Feed, FeedEntry};
use crate::xml::write_text_element;
use crate::{FeedError, FeedResult};

/// Serializes a feed as RSS 2.0.
///
/// ## Summary
/// Produces a well-formed RSS 2.0 document for any number of items,
/// including none.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid
/// UTF-8 (which should never happen with well-formed input).
pub fn serialize_rss(feed: &Feed) -> FeedResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_feed(&mut writer, feed)?;

    let result = writer.into_inner();
    String::from_utf8(result).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in rss XML: {}", e);
        FeedError::InvalidUtf8
    })
}

fn write_feed<W: std::io::Write>(
    writer: &mut Writer<W>,
    feed: &Feed,
) -> Result<(), quick_xml::Error> {
    // XML declaration
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss))?;

    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(writer, "title", &feed.meta.title)?;
    write_text_element(writer, "link", &feed.meta.page_url)?;
    write_text_element(writer, "description", &feed.meta.description)?;
    write_text_element(writer, "language", &feed.meta.language)?;
    write_text_element(writer, "lastBuildDate", &timestamp(feed.updated))?;

    if let Some(ref logo) = feed.meta.logo_url {
        write_image(writer, logo, &feed.meta.title, &feed.meta.page_url)?;
    }

    for entry in &feed.entries {
        write_item(writer, entry)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(())
}

fn write_item<W: std::io::Write>(
    writer: &mut Writer<W>,
    entry: &FeedEntry,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text_element(writer, "title", &entry.title)?;
    write_text_element(writer, "link", &entry.url)?;
    // The entry URL is the permalink, which is also the default guid reading.
    write_text_element(writer, "guid", &entry.url)?;
    write_text_element(writer, "description", &entry.synopsis)?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;

    Ok(())
}

fn write_image<W: std::io::Write>(
    writer: &mut Writer<W>,
    url: &str,
    title: &str,
    link: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("image")))?;
    write_text_element(writer, "url", url)?;
    write_text_element(writer, "title", title)?;
    write_text_element(writer, "link", link)?;
    writer.write_event(Event::End(BytesEnd::new("image")))?;
    Ok(())
}

// RFC 822 build stamp at midnight UTC, as feed readers expect.
fn timestamp(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y 00:00:00 GMT").to_string()
}
