//! SVG markup parsing for icon registration.
//!
//! This is a small XML reader covering what icon files contain: an optional prolog (XML
//! declaration, comments, DOCTYPE), one `<svg>` root, nested elements with quoted attributes,
//! character data, CDATA sections, and the predefined and numeric entities. Anything else that
//! breaks well-formedness is rejected.

use super::{IconDefinition, IconError, IconShape, DEFAULT_VIEW_BOX};

/// SVG attributes whose mixed-case spelling is significant and must be kept verbatim.
const CASE_SENSITIVE_ATTRIBUTES: &[&str] = &[
    "viewBox",
    "preserveAspectRatio",
    "gradientUnits",
    "gradientTransform",
    "patternUnits",
    "patternContentUnits",
    "patternTransform",
    "clipPathUnits",
    "maskUnits",
    "maskContentUnits",
    "markerUnits",
    "markerWidth",
    "markerHeight",
    "refX",
    "refY",
    "pathLength",
    "spreadMethod",
    "stdDeviation",
    "filterUnits",
    "primitiveUnits",
    "textLength",
    "lengthAdjust",
    "startOffset",
];

#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

/// Parses SVG markup into an icon definition.
///
/// The root must be an `<svg>` element. Its `viewBox` becomes the definition's coordinate frame
/// ([`DEFAULT_VIEW_BOX`] when absent) and its immediate child elements become the shapes, each
/// keeping its own nested elements. Attribute names are canonicalized with
/// [`canonical_attribute_name`] and namespace declarations are dropped.
///
/// # Errors
///
/// Returns [`IconError::Markup`] when the markup is not well-formed or the root is not `<svg>`.
pub fn parse_svg_markup(markup: &str) -> Result<IconDefinition, IconError> {
    let mut reader = Reader::new(markup);
    reader.skip_misc()?;
    if reader.at_end() {
        return Err(reader.error("missing root element"));
    }
    if !reader.eat("<") {
        return Err(reader.error("expected `<` to open the root element"));
    }
    let root_start = reader.pos;
    let root = reader.element()?;
    reader.skip_misc()?;
    if !reader.at_end() {
        return Err(reader.error("unexpected content after the root element"));
    }
    if root.name != "svg" {
        return Err(IconError::Markup {
            position: root_start,
            reason: format!("root element is `<{}>`, expected `<svg>`", root.name),
        });
    }

    let view_box = root
        .attributes
        .iter()
        .find(|(name, _)| name == "viewBox")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_VIEW_BOX.to_string());

    Ok(IconDefinition {
        view_box,
        shapes: root.children.into_iter().map(into_shape).collect(),
    })
}

/// Canonicalizes an attribute name to the SVG DOM spelling the renderer writes.
///
/// Hyphenated and lowercase names are kept, known case-sensitive SVG attributes (`viewBox`,
/// `gradientUnits`, ...) are kept, namespaced names (`xlink:href`) are kept, and camelCase
/// presentation attributes (`strokeWidth`) are hyphenated (`stroke-width`).
pub fn canonical_attribute_name(name: &str) -> String {
    if name.contains(':')
        || !name.chars().any(|ch| ch.is_ascii_uppercase())
        || CASE_SENSITIVE_ATTRIBUTES.contains(&name)
    {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn into_shape(element: Element) -> IconShape {
    IconShape {
        tag: element.name,
        attributes: element
            .attributes
            .into_iter()
            .filter(|(name, _)| name != "xmlns" && !name.starts_with("xmlns:"))
            .map(|(name, value)| (canonical_attribute_name(&name), value))
            .collect(),
        children: element.children.into_iter().map(into_shape).collect(),
    }
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, reason: impl Into<String>) -> IconError {
        IconError::Markup {
            position: self.pos,
            reason: reason.into(),
        }
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// ASCII case-insensitive prefix test that never splits a multi-byte character.
    fn starts_with_ignore_case(&self, token: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..token.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(token.as_bytes()))
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|ch: char| ch.is_ascii_whitespace());
        self.pos += rest.len() - trimmed.len();
    }

    fn skip_past(&mut self, terminator: &str, what: &str) -> Result<(), IconError> {
        match self.rest().find(terminator) {
            Some(offset) => {
                self.pos += offset + terminator.len();
                Ok(())
            }
            None => Err(self.error(format!("unterminated {what}"))),
        }
    }

    /// Skips whitespace, comments, processing instructions, and DOCTYPE outside the root.
    fn skip_misc(&mut self) -> Result<(), IconError> {
        loop {
            self.skip_whitespace();
            if self.eat("<!--") {
                self.skip_past("-->", "comment")?;
            } else if self.eat("<?") {
                self.skip_past("?>", "processing instruction")?;
            } else if self.starts_with_ignore_case("<!DOCTYPE") {
                self.pos += "<!DOCTYPE".len();
                self.skip_doctype()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_doctype(&mut self) -> Result<(), IconError> {
        let mut in_subset = false;
        for (offset, ch) in self.rest().char_indices() {
            match ch {
                '[' => in_subset = true,
                ']' => in_subset = false,
                '>' if !in_subset => {
                    self.pos += offset + 1;
                    return Ok(());
                }
                _ => {}
            }
        }
        Err(self.error("unterminated DOCTYPE"))
    }

    fn name(&mut self) -> Result<String, IconError> {
        let rest = self.rest();
        let mut end = 0;
        for (offset, ch) in rest.char_indices() {
            let valid = if offset == 0 {
                ch.is_alphabetic() || ch == '_' || ch == ':'
            } else {
                ch.is_alphanumeric() || matches!(ch, '_' | ':' | '-' | '.')
            };
            if !valid {
                break;
            }
            end = offset + ch.len_utf8();
        }
        if end == 0 {
            return Err(self.error("expected a name"));
        }
        self.pos += end;
        Ok(rest[..end].to_string())
    }

    /// Reads an element whose opening `<` was already consumed.
    fn element(&mut self) -> Result<Element, IconError> {
        let name = self.name()?;
        let mut element = Element {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        };

        loop {
            let before_whitespace = self.pos;
            self.skip_whitespace();
            if self.eat("/>") {
                return Ok(element);
            }
            if self.eat(">") {
                break;
            }
            if self.at_end() {
                return Err(self.error(format!("unterminated start tag `<{}>`", element.name)));
            }
            if self.pos == before_whitespace {
                return Err(self.error("expected whitespace before attribute"));
            }
            let attribute = self.attribute()?;
            if element
                .attributes
                .iter()
                .any(|(existing, _)| *existing == attribute.0)
            {
                return Err(self.error(format!("duplicate attribute `{}`", attribute.0)));
            }
            element.attributes.push(attribute);
        }

        loop {
            if self.at_end() {
                return Err(self.error(format!("unclosed element `<{}>`", element.name)));
            }
            if self.eat("</") {
                let close = self.name()?;
                self.skip_whitespace();
                if !self.eat(">") {
                    return Err(self.error("expected `>` to end the closing tag"));
                }
                if close != element.name {
                    return Err(self.error(format!(
                        "closing tag `</{close}>` does not match `<{}>`",
                        element.name
                    )));
                }
                return Ok(element);
            }
            if self.eat("<!--") {
                self.skip_past("-->", "comment")?;
            } else if self.eat("<![CDATA[") {
                self.skip_past("]]>", "CDATA section")?;
            } else if self.eat("<?") {
                self.skip_past("?>", "processing instruction")?;
            } else if self.eat("<") {
                let child = self.element()?;
                element.children.push(child);
            } else {
                self.text()?;
            }
        }
    }

    fn attribute(&mut self) -> Result<(String, String), IconError> {
        let name = self.name()?;
        self.skip_whitespace();
        if !self.eat("=") {
            return Err(self.error(format!("attribute `{name}` has no value")));
        }
        self.skip_whitespace();
        let quote = match self.rest().chars().next() {
            Some(quote @ ('"' | '\'')) => quote,
            _ => return Err(self.error(format!("value of attribute `{name}` is not quoted"))),
        };
        self.pos += 1;
        let Some(len) = self.rest().find(quote) else {
            return Err(self.error(format!("unterminated value of attribute `{name}`")));
        };
        let start = self.pos;
        let raw = &self.src[start..start + len];
        if let Some(offset) = raw.find('<') {
            self.pos = start + offset;
            return Err(self.error(format!("`<` in value of attribute `{name}`")));
        }
        let value = decode_entities(raw).map_err(|(offset, reason)| IconError::Markup {
            position: start + offset,
            reason,
        })?;
        self.pos = start + len + 1;
        Ok((name, value))
    }

    /// Consumes character data up to the next `<`, validating entity references.
    fn text(&mut self) -> Result<(), IconError> {
        let len = self.rest().find('<').unwrap_or(self.rest().len());
        let start = self.pos;
        decode_entities(&self.src[start..start + len]).map_err(|(offset, reason)| {
            IconError::Markup {
                position: start + offset,
                reason,
            }
        })?;
        self.pos = start + len;
        Ok(())
    }
}

fn decode_entities(raw: &str) -> Result<String, (usize, String)> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let offset = raw.len() - rest.len() + amp;
        let after = &rest[amp + 1..];
        let Some(semi) = after.find(';') else {
            return Err((offset, "unterminated entity reference".to_string()));
        };
        let entity = &after[..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .map(|hex| u32::from_str_radix(hex, 16))
                .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                .and_then(Result::ok)
                .and_then(char::from_u32),
        };
        let Some(ch) = decoded else {
            return Err((offset, format!("unknown entity `&{entity};`")));
        };
        out.push(ch);
        rest = &after[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn markup_error(markup: &str) -> String {
        match parse_svg_markup(markup) {
            Err(IconError::Markup { reason, .. }) => reason,
            other => panic!("expected markup error for {markup:?}, got {other:?}"),
        }
    }

    #[test]
    fn extracts_view_box_and_single_shape() {
        let definition =
            parse_svg_markup("<svg viewBox='0 0 10 10'><circle/></svg>").expect("parse");
        assert_eq!(definition.view_box, "0 0 10 10");
        assert_eq!(definition.shapes, vec![IconShape::new("circle")]);
    }

    #[test]
    fn missing_view_box_uses_default_frame() {
        let definition = parse_svg_markup("<svg><path d=\"M0 0\"/></svg>").expect("parse");
        assert_eq!(definition.view_box, DEFAULT_VIEW_BOX);
    }

    #[test]
    fn empty_svg_yields_empty_content() {
        let definition = parse_svg_markup("<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>")
            .expect("parse");
        assert!(definition.shapes.is_empty());
        assert_eq!(definition.content_markup(), "");
    }

    #[test]
    fn full_file_with_prolog_groups_and_text_is_accepted() {
        let markup = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- Exported icon -->
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 32 32">
  <title>Leaf &amp; stem</title>
  <g strokeWidth="1.5" stroke-linecap="round" xmlns:extra="urn:x">
    <path d="M4 28C4 12 16 4 28 4" fill-rule="evenodd"/>
    <use xlink:href="#stem"/>
  </g>
  <![CDATA[ ignored <text> ]]>
</svg>
"##;
        let definition = parse_svg_markup(markup).expect("parse");

        assert_eq!(definition.view_box, "0 0 32 32");
        assert_eq!(
            definition
                .shapes
                .iter()
                .map(|shape| shape.tag.as_str())
                .collect::<Vec<_>>(),
            vec!["title", "g"]
        );
        let group = &definition.shapes[1];
        assert_eq!(
            group.attributes,
            vec![
                ("stroke-width".to_string(), "1.5".to_string()),
                ("stroke-linecap".to_string(), "round".to_string()),
            ]
        );
        assert_eq!(group.children[0].attribute("fill-rule"), Some("evenodd"));
        assert_eq!(group.children[1].attribute("xlink:href"), Some("#stem"));
    }

    #[test]
    fn attribute_values_decode_entities() {
        let definition =
            parse_svg_markup("<svg><text aria-label=\"a &lt;b&gt; &#65;&#x42;\"/></svg>")
                .expect("parse");
        assert_eq!(definition.shapes[0].attribute("aria-label"), Some("a <b> AB"));
    }

    #[test]
    fn canonical_attribute_names() {
        assert_eq!(canonical_attribute_name("stroke-width"), "stroke-width");
        assert_eq!(canonical_attribute_name("strokeWidth"), "stroke-width");
        assert_eq!(canonical_attribute_name("fillOpacity"), "fill-opacity");
        assert_eq!(canonical_attribute_name("viewBox"), "viewBox");
        assert_eq!(canonical_attribute_name("gradientUnits"), "gradientUnits");
        assert_eq!(canonical_attribute_name("xlink:href"), "xlink:href");
        assert_eq!(canonical_attribute_name("d"), "d");
    }

    #[test]
    fn malformed_markup_is_rejected() {
        assert!(markup_error("").contains("missing root"));
        assert!(markup_error("just text").contains("expected `<`"));
        assert!(markup_error("<svg><circle></svg>").contains("does not match"));
        assert!(markup_error("<svg><circle/>").contains("unclosed"));
        assert!(markup_error("<svg width=10/>").contains("not quoted"));
        assert!(markup_error("<svg a='1' a='2'/>").contains("duplicate"));
        assert!(markup_error("<svg/><svg/>").contains("after the root"));
        assert!(markup_error("<svg><!-- open </svg>").contains("comment"));
        assert!(markup_error("<svg><text>&nbsp;</text></svg>").contains("unknown entity"));
        assert!(markup_error("<svg title='a<b'/>").contains("`<`"));
        assert!(markup_error("<svg a='1'b='2'/>").contains("whitespace"));
    }

    #[test]
    fn non_ascii_text_around_root_is_reported() {
        assert!(markup_error("<svg/>ééééé").contains("after the root"));
        assert!(markup_error("ééééé<svg/>").contains("expected `<`"));
        assert!(markup_error("<svg/>\n<!DOCTYPÉ>").contains("after the root"));
        assert!(markup_error("<ëlement/>").contains("expected `<svg>`"));

        let definition = parse_svg_markup(
            "<!-- café --><svg><title>Blätter 🍃</title><path aria-label='naïve'/></svg>",
        )
        .expect("parse");
        assert_eq!(definition.shapes[1].attribute("aria-label"), Some("naïve"));
    }

    #[test]
    fn every_truncation_of_a_document_is_an_error_not_a_panic() {
        let markup = "<?xml version='1.0'?><!DOCTYPE svg [<!ENTITY é 'x'>]>\
            <svg viewBox='0 0 24 24'><g><path d='M0 0' aria-label='ünïcödé &amp; 🍃'/>\
            <![CDATA[ ✓ ]]><!-- ☀ --></g></svg>";
        assert!(parse_svg_markup(markup).is_ok());

        for (end, _) in markup.char_indices().skip(1) {
            let truncated = &markup[..end];
            let result = std::panic::catch_unwind(|| parse_svg_markup(truncated));
            assert!(
                matches!(result, Ok(Err(IconError::Markup { .. }))),
                "truncation at byte {end} of {truncated:?} did not yield a markup error"
            );
        }
    }

    #[test]
    fn non_svg_root_is_rejected() {
        assert!(markup_error("<html><body/></html>").contains("expected `<svg>`"));
    }
}
