//! XHTML and XML documents inside the archive.

use chapterbind_core::Submission;
use chapterbind_interface::BookMetadata;
use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub(crate) const MIMETYPE: &str = "application/epub+zip";

pub(crate) const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;

pub(crate) const COVER_FILE: &str = "cover.xhtml";
pub(crate) const NAV_FILE: &str = "nav.xhtml";
pub(crate) const NCX_FILE: &str = "toc.ncx";
pub(crate) const OPF_FILE: &str = "content.opf";

const CREDIT: &str = "Created with chapterbind";

/// Entities XML defines without a DTD.
const XML_ENTITIES: [&str; 5] = ["amp", "lt", "gt", "quot", "apos"];

static NAMED_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&([A-Za-z][A-Za-z0-9]*);").expect("valid named entity pattern")
});

/// File name of the chapter at `index` in reading order.
pub(crate) fn chapter_file(index: usize) -> String {
    format!("chap_{}.xhtml", index)
}

fn chapter_id(index: usize) -> String {
    format!("chapter_{}", index)
}

/// Rewrites HTML named entities as numeric character references.
///
/// XHTML without a DTD only knows the five XML entities, so `&hellip;`,
/// `&nbsp;` and friends would make the page malformed. Names HTML does not
/// know either are kept as literal text.
fn xhtml_body(html: &str) -> String {
    NAMED_ENTITY
        .replace_all(html, |caps: &Captures| {
            let entity = &caps[0];
            let name = &caps[1];
            if XML_ENTITIES.contains(&name) {
                return entity.to_string();
            }
            let decoded = decode_html_entities(entity);
            if decoded == entity {
                return format!("&amp;{};", name);
            }
            decoded
                .chars()
                .map(|c| format!("&#{};", u32::from(c)))
                .collect()
        })
        .into_owned()
}

fn page(title: &str, language: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" lang="{lang}" xml:lang="{lang}">
<head>
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        lang = encode_double_quoted_attribute(language),
        title = encode_text(title),
        body = body,
    )
}

pub(crate) fn cover(metadata: &BookMetadata) -> String {
    let author = metadata.author().name();
    let body = format!(
        r#"<div><h1>{title}</h1><h2><a href="https://www.reddit.com/user/{href}">{author}</a></h2>{credit}</div>"#,
        title = encode_text(metadata.title()),
        href = encode_double_quoted_attribute(author),
        author = encode_text(author),
        credit = CREDIT,
    );
    page(metadata.title(), metadata.language(), &body)
}

pub(crate) fn chapter(chapter: &Submission, language: &str) -> String {
    let link = format!(
        r#"<a href="{}">Original</a>"#,
        encode_double_quoted_attribute(&chapter.shortlink())
    );
    let body = format!(
        "<h1>{title}</h1>\n{link}\n{content}\n{link}",
        title = encode_text(chapter.title()),
        link = link,
        content = xhtml_body(chapter.selftext_html().as_deref().unwrap_or_default()),
    );
    page(chapter.title(), language, &body)
}

pub(crate) fn nav(metadata: &BookMetadata, chapters: &[Submission]) -> String {
    let items: String = chapters
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "    <li><a href=\"{}\">{}</a></li>\n",
                chapter_file(i),
                encode_text(c.title())
            )
        })
        .collect();
    let body = format!(
        "<nav epub:type=\"toc\" id=\"toc\">\n  <h1>{}</h1>\n  <ol>\n{}  </ol>\n</nav>",
        encode_text(metadata.title()),
        items
    );
    page(metadata.title(), metadata.language(), &body)
}

pub(crate) fn ncx(metadata: &BookMetadata, chapters: &[Submission]) -> String {
    let points: String = chapters
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                r#"    <navPoint id="{id}" playOrder="{order}">
      <navLabel><text>{title}</text></navLabel>
      <content src="{src}"/>
    </navPoint>
"#,
                id = chapter_id(i),
                order = i + 1,
                title = encode_text(c.title()),
                src = chapter_file(i),
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="{uid}"/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle><text>{title}</text></docTitle>
  <navMap>
{points}  </navMap>
</ncx>
"#,
        uid = encode_double_quoted_attribute(metadata.identifier()),
        title = encode_text(metadata.title()),
        points = points,
    )
}

/// Package document. `modified` is an ISO 8601 UTC timestamp.
pub(crate) fn opf(metadata: &BookMetadata, chapters: &[Submission], modified: &str) -> String {
    let mut manifest = format!(
        "    <item href=\"{}\" id=\"cover\" media-type=\"application/xhtml+xml\"/>\n",
        COVER_FILE
    );
    let mut spine = String::from("    <itemref idref=\"cover\"/>\n    <itemref idref=\"nav\"/>\n");
    for i in 0..chapters.len() {
        manifest.push_str(&format!(
            "    <item href=\"{}\" id=\"{}\" media-type=\"application/xhtml+xml\"/>\n",
            chapter_file(i),
            chapter_id(i)
        ));
        spine.push_str(&format!("    <itemref idref=\"{}\"/>\n", chapter_id(i)));
    }
    manifest.push_str(&format!(
        "    <item href=\"{}\" id=\"ncx\" media-type=\"application/x-dtbncx+xml\"/>\n",
        NCX_FILE
    ));
    manifest.push_str(&format!(
        "    <item href=\"{}\" id=\"nav\" media-type=\"application/xhtml+xml\" properties=\"nav\"/>\n",
        NAV_FILE
    ));

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="id" xml:lang="{lang}">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:identifier id="id">{identifier}</dc:identifier>
    <dc:title>{title}</dc:title>
    <dc:language>{lang}</dc:language>
    <dc:creator id="creator">{author}</dc:creator>
    <meta property="dcterms:modified">{modified}</meta>
  </metadata>
  <manifest>
{manifest}  </manifest>
  <spine toc="ncx">
{spine}  </spine>
</package>
"#,
        lang = encode_double_quoted_attribute(metadata.language()),
        identifier = encode_text(metadata.identifier()),
        title = encode_text(metadata.title()),
        author = encode_text(metadata.author().name()),
        modified = modified,
        manifest = manifest,
        spine = spine,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nbsp_normalised() {
        assert_eq!(xhtml_body("<p>a&nbsp;b</p>"), "<p>a&#160;b</p>");
    }

    #[test]
    fn test_html_entities_become_numeric() {
        assert_eq!(
            xhtml_body("Wait&hellip; no &mdash; it&rsquo;s caf&eacute;"),
            "Wait&#8230; no &#8212; it&#8217;s caf&#233;"
        );
    }

    #[test]
    fn test_xml_entities_and_numeric_references_kept() {
        let html = "&lt;p&gt; &amp; &quot;x&quot; &apos; &#8230; &#x2014;";
        assert_eq!(xhtml_body(html), html);
    }

    #[test]
    fn test_unknown_entity_escaped() {
        assert_eq!(xhtml_body("a &notarealentity; b"), "a &amp;notarealentity; b");
    }

    #[test]
    fn test_chapter_file_names() {
        assert_eq!(chapter_file(0), "chap_0.xhtml");
        assert_eq!(chapter_file(12), "chap_12.xhtml");
    }
}
