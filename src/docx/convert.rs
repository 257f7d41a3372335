use super::{Block, MarkupDocument};
use crate::error::ConversionError;
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// Convert raw `.docx` bytes into a flat [`MarkupDocument`].
///
/// Paragraph styles named `heading 1` through `heading 6` (or with style ids
/// `Heading1`..`Heading6`) become heading blocks. Empty paragraphs are dropped.
pub fn convert_docx(bytes: &[u8]) -> Result<MarkupDocument, ConversionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let document_xml = read_part(&mut archive, DOCUMENT_PART)?
        .ok_or(ConversionError::MissingPart(DOCUMENT_PART))?;
    let styles = match read_part(&mut archive, STYLES_PART)? {
        Some(xml) => parse_style_names(&xml)?,
        None => HashMap::new(),
    };

    let doc = Document::parse(&document_xml).map_err(|source| ConversionError::Xml {
        part: DOCUMENT_PART,
        source,
    })?;

    let mut blocks = Vec::new();
    if let Some(body) = doc
        .root_element()
        .children()
        .find(|node| is_w(node, "body"))
    {
        collect_blocks(body, &styles, &mut blocks);
    }

    tracing::debug!("Converted document into {} blocks", blocks.len());
    Ok(MarkupDocument::new(blocks))
}

/// Read an archive part as UTF-8, or `None` if the archive does not contain it.
fn read_part(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    part: &'static str,
) -> Result<Option<String>, ConversionError> {
    let mut file = match archive.by_name(part) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|source| ConversionError::ReadPart { part, source })?;
    Ok(Some(xml))
}

/// Map style ids to their lowercase display names from `styles.xml`.
fn parse_style_names(xml: &str) -> Result<HashMap<String, String>, ConversionError> {
    let doc = Document::parse(xml).map_err(|source| ConversionError::Xml {
        part: STYLES_PART,
        source,
    })?;

    let names = doc
        .descendants()
        .filter(|node| is_w(node, "style"))
        .filter_map(|style| {
            let id = w_attr(style, "styleId")?;
            let name = style
                .children()
                .find(|node| is_w(node, "name"))
                .and_then(|node| w_attr(node, "val"))?;
            Some((id.to_string(), name.to_lowercase()))
        })
        .collect();

    Ok(names)
}

/// Walk body-level children, descending through content controls.
fn collect_blocks(parent: Node<'_, '_>, styles: &HashMap<String, String>, blocks: &mut Vec<Block>) {
    for node in parent.children().filter(Node::is_element) {
        match node.tag_name().name() {
            "p" => {
                let text = paragraph_text(node);
                if text.is_empty() {
                    continue;
                }
                match heading_level(node, styles) {
                    Some(level) => blocks.push(Block::heading(level, text)),
                    None => blocks.push(Block::text(text)),
                }
            }
            "tbl" => {
                let text = node
                    .descendants()
                    .filter(|n| is_w(n, "p"))
                    .map(paragraph_text)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !text.is_empty() {
                    blocks.push(Block::text(text));
                }
            }
            "sdt" => {
                if let Some(content) = node.children().find(|n| is_w(n, "sdtContent")) {
                    collect_blocks(content, styles, blocks);
                }
            }
            _ => {}
        }
    }
}

/// Trimmed run text of a paragraph.
fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    for node in paragraph.descendants().filter(Node::is_element) {
        // Tab stops and other properties also live under the paragraph; only run content counts.
        let in_run = node.parent().is_some_and(|p| is_w(&p, "r"));
        if !in_run {
            continue;
        }
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }
    text.trim().to_string()
}

fn heading_level(paragraph: Node<'_, '_>, styles: &HashMap<String, String>) -> Option<u8> {
    let style_id = paragraph
        .children()
        .find(|node| is_w(node, "pPr"))?
        .children()
        .find(|node| is_w(node, "pStyle"))
        .and_then(|node| w_attr(node, "val"))?;

    let from_name = styles
        .get(style_id)
        .and_then(|name| name.strip_prefix("heading "))
        .and_then(|level| level.trim().parse::<u8>().ok());
    let level = from_name.or_else(|| style_id.strip_prefix("Heading")?.parse::<u8>().ok())?;

    (1..=6).contains(&level).then_some(level)
}

fn is_w(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Attribute lookup by local name, ignoring the `w:` namespace prefix.
fn w_attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name() == name)
        .map(|attr| attr.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::BlockKind;
    use assert2::check;
    use rstest::rstest;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn docx(body: &str, styles: Option<&str>) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer.start_file(DOCUMENT_PART, options).unwrap();
        write!(
            writer,
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#
        )
        .unwrap();

        if let Some(styles) = styles {
            writer.start_file(STYLES_PART, options).unwrap();
            write!(writer, r#"<w:styles xmlns:w="{W_NS}">{styles}</w:styles>"#).unwrap();
        }

        writer.finish().unwrap().into_inner()
    }

    fn para(style: Option<&str>, text: &str) -> String {
        let ppr = style
            .map(|s| format!(r#"<w:pPr><w:pStyle w:val="{s}"/></w:pPr>"#))
            .unwrap_or_default();
        format!("<w:p>{ppr}<w:r><w:t>{text}</w:t></w:r></w:p>")
    }

    #[test]
    fn test_headings_from_style_ids() {
        let body = [
            para(Some("Heading1"), "1. Overview"),
            para(None, "Intro text"),
            para(Some("Heading2"), "1.1 Goals"),
        ]
        .concat();

        let markup = convert_docx(&docx(&body, None)).unwrap();
        check!(
            markup.blocks()
                == [
                    Block::heading(1, "1. Overview"),
                    Block::text("Intro text"),
                    Block::heading(2, "1.1 Goals"),
                ]
        );
    }

    #[test]
    fn test_headings_from_localized_style_names() {
        let styles = r#"<w:style w:type="paragraph" w:styleId="u1"><w:name w:val="Heading 1"/></w:style>
            <w:style w:type="paragraph" w:styleId="u3"><w:name w:val="heading 3"/></w:style>"#;
        let body = [para(Some("u1"), "Tổng quan"), para(Some("u3"), "Chi tiết")].concat();

        let markup = convert_docx(&docx(&body, Some(styles))).unwrap();
        let levels: Vec<_> = markup.blocks().iter().map(Block::heading_level).collect();
        check!(levels == vec![Some(1), Some(3)]);
    }

    #[rstest]
    #[case("Heading7")]
    #[case("Heading0")]
    #[case("Normal")]
    fn test_non_heading_styles_are_text(#[case] style: &str) {
        let markup = convert_docx(&docx(&para(Some(style), "body"), None)).unwrap();
        check!(markup.blocks()[0].kind == BlockKind::Text);
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        let body = ["<w:p/>".to_string(), para(None, "   "), para(None, "kept")].concat();
        let markup = convert_docx(&docx(&body, None)).unwrap();
        check!(markup.blocks() == [Block::text("kept")]);
    }

    #[test]
    fn test_runs_tabs_and_breaks() {
        let body = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
            <w:r><w:t>Hello</w:t></w:r><w:r><w:tab/><w:t>world</w:t><w:br/><w:t>again</w:t></w:r></w:p>"#;
        let markup = convert_docx(&docx(body, None)).unwrap();
        check!(markup.blocks()[0].text == "Hello\tworld\nagain");
    }

    #[test]
    fn test_table_is_single_block() {
        let body = format!(
            "<w:tbl><w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr></w:tbl>",
            para(None, "Name"),
            para(None, "Value")
        );
        let markup = convert_docx(&docx(&body, None)).unwrap();
        check!(markup.blocks() == [Block::text("Name Value")]);
    }

    #[test]
    fn test_content_controls_are_descended() {
        let body = format!(
            "<w:sdt><w:sdtContent>{}</w:sdtContent></w:sdt>",
            para(Some("Heading1"), "Contents")
        );
        let markup = convert_docx(&docx(&body, None)).unwrap();
        check!(markup.blocks() == [Block::heading(1, "Contents")]);
    }

    #[test]
    fn test_missing_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = convert_docx(&bytes).unwrap_err();
        check!(matches!(err, ConversionError::MissingPart(DOCUMENT_PART)));
    }

    #[test]
    fn test_not_a_zip() {
        let err = convert_docx(b"plain text, not a docx").unwrap_err();
        check!(matches!(err, ConversionError::Archive(_)));
    }
}
