//! Supplemental static HTML tag registry
//!
//!     [super::html::is_void_tag] looks up a tag's [TagType] here rather than keeping its own
//!     copy of the void-element set. The escaping rules stay unconditional and never consult
//!     this table. Beyond that, the table is ambient, informational metadata consumed by the
//!     CLI's `--stats` report, which breaks down the tags used in a document by [TagType] and
//!     [TagCategory].

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TagType {
    Void,
    Normal,
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TagCategory {
    Document,
    Metadata,
    Sections,
    Heading,
    Text,
    Lists,
    Tables,
    Forms,
    Media,
    Embedded,
    Scripting,
    Interactive,
}

#[derive(Debug, Clone, Copy)]
pub struct TagInfo {
    pub tag_type: TagType,
    pub category: TagCategory,
    pub description: &'static str,
}

macro_rules! tag_table {
    ($( $name:literal => ($ty:ident, $cat:ident, $desc:literal) ),* $(,)?) => {
        &[ $( ($name, TagInfo { tag_type: TagType::$ty, category: TagCategory::$cat, description: $desc }) ),* ]
    };
}

static TAG_TABLE: &[(&str, TagInfo)] = tag_table![
    "html" => (Normal, Document, "Root element"),
    "head" => (Normal, Document, "Document metadata"),
    "body" => (Normal, Document, "Document body"),
    "title" => (Normal, Metadata, "Document title"),
    "meta" => (Void, Metadata, "Metadata"),
    "link" => (Void, Metadata, "External resource link"),
    "base" => (Void, Metadata, "Document base URL"),
    "style" => (Normal, Metadata, "CSS styles"),
    "div" => (Normal, Sections, "Content division"),
    "span" => (Normal, Text, "Inline container"),
    "header" => (Normal, Sections, "Header content"),
    "footer" => (Normal, Sections, "Footer content"),
    "main" => (Normal, Sections, "Main content"),
    "section" => (Normal, Sections, "Thematic section"),
    "article" => (Normal, Sections, "Self-contained content"),
    "aside" => (Normal, Sections, "Aside content"),
    "nav" => (Normal, Sections, "Navigation links"),
    "h1" => (Normal, Heading, "Heading level 1"),
    "h2" => (Normal, Heading, "Heading level 2"),
    "h3" => (Normal, Heading, "Heading level 3"),
    "h4" => (Normal, Heading, "Heading level 4"),
    "h5" => (Normal, Heading, "Heading level 5"),
    "h6" => (Normal, Heading, "Heading level 6"),
    "p" => (Normal, Text, "Paragraph"),
    "br" => (Void, Text, "Line break"),
    "hr" => (Void, Text, "Horizontal rule"),
    "pre" => (Raw, Text, "Preformatted text"),
    "blockquote" => (Normal, Text, "Block quotation"),
    "code" => (Normal, Text, "Code fragment"),
    "em" => (Normal, Text, "Emphasized text"),
    "strong" => (Normal, Text, "Important text"),
    "i" => (Normal, Text, "Italic text"),
    "b" => (Normal, Text, "Bold text"),
    "u" => (Normal, Text, "Underlined text"),
    "mark" => (Normal, Text, "Marked/highlighted text"),
    "small" => (Normal, Text, "Small text"),
    "sub" => (Normal, Text, "Subscript"),
    "sup" => (Normal, Text, "Superscript"),
    "ul" => (Normal, Lists, "Unordered list"),
    "ol" => (Normal, Lists, "Ordered list"),
    "li" => (Normal, Lists, "List item"),
    "dl" => (Normal, Lists, "Description list"),
    "dt" => (Normal, Lists, "Description term"),
    "dd" => (Normal, Lists, "Description details"),
    "a" => (Normal, Text, "Hyperlink"),
    "img" => (Void, Media, "Image"),
    "picture" => (Normal, Media, "Image container"),
    "figure" => (Normal, Media, "Figure with caption"),
    "figcaption" => (Normal, Media, "Figure caption"),
    "audio" => (Normal, Media, "Audio content"),
    "video" => (Normal, Media, "Video content"),
    "source" => (Void, Media, "Media source"),
    "track" => (Void, Media, "Text track"),
    "table" => (Normal, Tables, "Table"),
    "thead" => (Normal, Tables, "Table header"),
    "tbody" => (Normal, Tables, "Table body"),
    "tfoot" => (Normal, Tables, "Table footer"),
    "tr" => (Normal, Tables, "Table row"),
    "td" => (Normal, Tables, "Table cell"),
    "th" => (Normal, Tables, "Table header cell"),
    "caption" => (Normal, Tables, "Table caption"),
    "col" => (Void, Tables, "Table column"),
    "colgroup" => (Normal, Tables, "Table column group"),
    "form" => (Normal, Forms, "Form"),
    "input" => (Void, Forms, "Form input"),
    "textarea" => (Normal, Forms, "Multiline text input"),
    "button" => (Normal, Forms, "Button"),
    "select" => (Normal, Forms, "Dropdown list"),
    "option" => (Normal, Forms, "Dropdown option"),
    "optgroup" => (Normal, Forms, "Option group"),
    "label" => (Normal, Forms, "Form label"),
    "fieldset" => (Normal, Forms, "Field set"),
    "legend" => (Normal, Forms, "Field set caption"),
    "datalist" => (Normal, Forms, "Predefined options"),
    "output" => (Normal, Forms, "Calculation output"),
    "progress" => (Normal, Forms, "Progress bar"),
    "meter" => (Normal, Forms, "Scalar measurement"),
    "details" => (Normal, Interactive, "Disclosure widget"),
    "summary" => (Normal, Interactive, "Details summary"),
    "dialog" => (Normal, Interactive, "Dialog box"),
    "menu" => (Normal, Interactive, "Menu list"),
    "iframe" => (Normal, Embedded, "Inline frame"),
    "embed" => (Void, Embedded, "External content"),
    "object" => (Normal, Embedded, "Embedded object"),
    "param" => (Void, Embedded, "Object parameter"),
    "script" => (Normal, Scripting, "JavaScript code"),
    "canvas" => (Normal, Scripting, "Graphics canvas"),
    "svg" => (Normal, Scripting, "SVG graphics"),
    "math" => (Normal, Scripting, "MathML content"),
    "time" => (Normal, Text, "Machine-readable time"),
    "data" => (Normal, Text, "Machine-readable data"),
    "var" => (Normal, Text, "Variable"),
    "samp" => (Normal, Text, "Sample output"),
    "kbd" => (Normal, Text, "Keyboard input"),
    "s" => (Normal, Text, "Strikethrough"),
    "wbr" => (Void, Text, "Word break opportunity"),
    "ruby" => (Normal, Text, "Ruby annotation"),
    "rt" => (Normal, Text, "Ruby text"),
    "rp" => (Normal, Text, "Ruby parentheses"),
    "map" => (Normal, Media, "Image map"),
    "area" => (Void, Media, "Image map area"),
    "noscript" => (Normal, Scripting, "Content for non-JS users"),
    "template" => (Normal, Scripting, "Template content"),
    "slot" => (Normal, Scripting, "Shadow DOM slot"),
];

static REGISTRY: Lazy<HashMap<&'static str, TagInfo>> = Lazy::new(|| TAG_TABLE.iter().copied().collect());

/// Looks up informational metadata for a tag name. Returns `None` for tags this registry
/// doesn't know about - that is not an error, just a gap in the metadata used only for reports.
pub fn lookup(tag: &str) -> Option<TagInfo> {
    REGISTRY.get(tag).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_void_tags_are_classified_void() {
        for tag in ["img", "br", "meta", "input"] {
            assert_eq!(lookup(tag).unwrap().tag_type, TagType::Void);
        }
    }

    #[test]
    fn unknown_tag_returns_none() {
        assert!(lookup("frobnicate").is_none());
    }

    #[test]
    fn pre_is_classified_raw() {
        assert_eq!(lookup("pre").unwrap().tag_type, TagType::Raw);
    }
}
