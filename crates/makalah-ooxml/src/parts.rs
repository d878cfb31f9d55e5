//! Static and style-derived package parts
//!
//! Everything except `word/document.xml` lives here. The parts are written
//! from scratch; no template package is involved.

use makalah_core::StyleSheet;

use crate::writer::escape_xml;

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const SETTINGS_PART: &str = "word/settings.xml";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";

/// Paragraph style ids shared by the writer, styles.xml and the reader
pub mod style_id {
    pub const NORMAL: &str = "Normal";
    pub const HEADING_1: &str = "Heading1";
    pub const HEADING_2: &str = "Heading2";
    pub const COVER: &str = "Cover";
    pub const LIST: &str = "ListParagraph";
}

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub fn content_types_xml() -> String {
    format!(
        r#"{XML_DECL}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
<Override PartName="/word/settings.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#
    )
}

pub fn package_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

pub fn document_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings" Target="settings.xml"/>
</Relationships>"#
    )
}

pub fn settings_xml() -> String {
    format!(
        r#"{XML_DECL}
<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:defaultTabStop w:val="709"/>
<w:characterSpacingControl w:val="doNotCompress"/>
<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat>
</w:settings>"#
    )
}

/// styles.xml carrying the font, sizes and spacing of the style sheet
pub fn styles_xml(style: &StyleSheet) -> String {
    let font = escape_xml(&style.font_family);
    let body = style.sizes.body * 2;
    let heading = style.sizes.heading * 2;
    let subheading = style.sizes.subheading * 2;
    let line = style.line_spacing;
    let before = style.paragraph_spacing.before;
    let after = style.paragraph_spacing.after;

    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push('\n');
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:sz w:val="{body}"/><w:szCs w:val="{body}"/><w:lang w:val="id-ID"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="{after}" w:line="{line}" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults>"#
    ));
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="{}"><w:name w:val="Normal"/><w:qFormat/><w:pPr><w:jc w:val="both"/></w:pPr></w:style>"#,
        style_id::NORMAL
    ));
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="{before}" w:after="{}"/><w:jc w:val="center"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:bCs/><w:sz w:val="{heading}"/><w:szCs w:val="{heading}"/></w:rPr></w:style>"#,
        style_id::HEADING_1,
        after * 2
    ));
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="{before}" w:after="{after}"/><w:jc w:val="left"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:bCs/><w:sz w:val="{subheading}"/><w:szCs w:val="{subheading}"/></w:rPr></w:style>"#,
        style_id::HEADING_2
    ));
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="Cover"/><w:basedOn w:val="Normal"/><w:pPr><w:spacing w:after="0"/><w:jc w:val="center"/></w:pPr></w:style>"#,
        style_id::COVER
    ));
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="List Paragraph"/><w:basedOn w:val="Normal"/><w:qFormat/></w:style>"#,
        style_id::LIST
    ));
    xml.push('\n');
    xml.push_str("</w:styles>");
    xml
}

/// docProps/core.xml with title and creator
pub fn core_props_xml(title: &str, author: &str) -> String {
    let mut xml = format!(
        r#"{XML_DECL}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    );
    if !title.is_empty() {
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    }
    if !author.is_empty() {
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(author)));
    }
    xml.push_str("<dc:language>id-ID</dc:language>");
    xml.push_str("</cp:coreProperties>");
    xml
}

pub fn app_props_xml() -> String {
    format!(
        r#"{XML_DECL}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
<Application>makalah {}</Application>
</Properties>"#,
        crate::VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_carry_style_sheet_values() {
        let mut style = StyleSheet::default();
        style.font_family = "Arial".to_string();
        style.sizes.heading = 16;
        let xml = styles_xml(&style);
        assert!(xml.contains(r#"w:ascii="Arial""#));
        // half-points
        assert!(xml.contains(r#"<w:sz w:val="32"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
        assert!(xml.contains(r#"w:line="360""#));
        for id in [
            style_id::NORMAL,
            style_id::HEADING_1,
            style_id::HEADING_2,
            style_id::COVER,
            style_id::LIST,
        ] {
            assert!(xml.contains(&format!(r#"w:styleId="{}""#, id)));
        }
    }

    #[test]
    fn test_core_props_escaped() {
        let xml = core_props_xml("Kopi & Teh", "Budi <B>");
        assert!(xml.contains("<dc:title>Kopi &amp; Teh</dc:title>"));
        assert!(xml.contains("<dc:creator>Budi &lt;B&gt;</dc:creator>"));
    }

    #[test]
    fn test_core_props_omit_empty() {
        let xml = core_props_xml("", "");
        assert!(!xml.contains("dc:title"));
        assert!(!xml.contains("dc:creator"));
    }

    #[test]
    fn test_content_types_cover_every_part() {
        let xml = content_types_xml();
        for part in [
            "/word/document.xml",
            "/word/styles.xml",
            "/word/settings.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(xml.contains(part), "missing override for {}", part);
        }
    }
}
