// src/sitemap/xml.rs
// =============================================================================
// Turns a set of URLs into sitemap XML.
//
// Output shape (sitemaps.org protocol 0.9):
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <!--This is an XML sitemap for the website.-->
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//       <lastmod>2024-05-01</lastmod>
//       <priority>0.5</priority>
//     </url>
//   </urlset>
//
// The document is built with sxd-document and written by its Writer, which
// takes care of escaping & < > inside <loc>. Indentation is added as
// whitespace text nodes between elements.
//
// This is a pure function of (urls, date): same input, same bytes.
// =============================================================================

use super::{SitemapEntry, DEFAULT_PRIORITY, SITEMAP_COMMENT, SITEMAP_NAMESPACE};
use crate::error::{Result, SitemapError};
use chrono::NaiveDate;
use sxd_document::dom::{Document, Element};
use sxd_document::writer::Writer;
use sxd_document::Package;

const INDENT: &str = "  ";

// Builds one entry per URL, sorted by location
//
// Sorting here (instead of trusting the caller's order) is what makes the
// output independent of crawl order.
pub fn entries<'a, I>(urls: I, date: NaiveDate) -> Vec<SitemapEntry>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut locations: Vec<&String> = urls.into_iter().collect();
    locations.sort();
    locations.dedup();

    locations
        .into_iter()
        .map(|loc| SitemapEntry {
            loc: loc.clone(),
            lastmod: date,
            priority: DEFAULT_PRIORITY,
        })
        .collect()
}

/// Serializes URLs into a sitemap document
///
/// An empty set produces a valid, empty `<urlset>`; refusing to write an empty
/// sitemap is the file writer's call, not ours.
pub fn serialize<'a, I>(urls: I, date: NaiveDate) -> Result<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let entries = entries(urls, date);

    let package = Package::new();
    let doc = package.as_document();

    doc.root().append_child(doc.create_comment(SITEMAP_COMMENT));

    let urlset = doc.create_element("urlset");
    urlset.set_attribute_value("xmlns", SITEMAP_NAMESPACE);
    doc.root().append_child(urlset);

    for entry in &entries {
        indent(&doc, urlset, 1);
        let url = doc.create_element("url");
        urlset.append_child(url);

        append_text_element(&doc, url, "loc", &entry.loc);
        append_text_element(&doc, url, "lastmod", &entry.lastmod_string());
        append_text_element(&doc, url, "priority", &entry.priority_string());
        indent(&doc, url, 1);
    }

    if !entries.is_empty() {
        indent(&doc, urlset, 0);
    }

    let mut out = Vec::new();
    Writer::new()
        .set_single_quotes(false)
        .set_write_encoding(true)
        .format_document(&doc, &mut out)
        .map_err(|e| SitemapError::Xml(e.to_string()))?;

    let xml = String::from_utf8(out).map_err(|e| SitemapError::Xml(e.to_string()))?;

    Ok(break_prologue(xml))
}

// <tag>text</tag>, indented two levels (inside <url>)
fn append_text_element<'d>(doc: &Document<'d>, parent: Element<'d>, name: &str, text: &str) {
    indent(doc, parent, 2);
    let element = doc.create_element(name);
    element.append_child(doc.create_text(text));
    parent.append_child(element);
}

// A newline followed by `depth` levels of indentation
fn indent<'d>(doc: &Document<'d>, parent: Element<'d>, depth: usize) {
    let whitespace = format!("\n{}", INDENT.repeat(depth));
    parent.append_child(doc.create_text(&whitespace));
}

// The writer emits the declaration, the comment and the root element back to
// back; give each its own line and end the file with a newline.
fn break_prologue(xml: String) -> String {
    let mut xml = xml
        .replacen("?><!--", "?>\n<!--", 1)
        .replacen("--><urlset", "-->\n<urlset", 1);
    xml.push('\n');
    xml
}
