//! Tag-level HTML extraction helpers
//!
//! The catalog pages are simple, well-formed markup, so extraction works on
//! tag blocks and attributes directly rather than a full DOM.

/// Find the inner content of every `<tag ... class="...needle...">` block
///
/// Blocks are matched on the first closing `</tag>`, which is sufficient for
/// the catalog's non-self-nesting elements.
#[must_use]
pub fn class_blocks<'a>(html: &'a str, tag: &str, class_needle: &str) -> Vec<&'a str> {
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}>");
    let mut blocks = Vec::new();
    let mut from = 0;

    while let Some(rel) = html[from..].find(&open_pat) {
        let start = from + rel;
        let Some(open_end) = html[start..].find('>').map(|i| start + i + 1) else {
            break;
        };

        let open_tag = &html[start..open_end];
        let matches_class = attr(open_tag, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_needle));

        if matches_class {
            if let Some(close_rel) = html[open_end..].find(&close_pat) {
                blocks.push(&html[open_end..open_end + close_rel]);
                from = open_end + close_rel + close_pat.len();
                continue;
            }
        }
        from = open_end;
    }

    blocks
}

/// First `name="value"` attribute value inside `fragment`
#[must_use]
pub fn attr(fragment: &str, name: &str) -> Option<String> {
    let pat = format!("{name}=\"");
    let start = fragment.find(&pat)? + pat.len();
    let end = fragment[start..].find('"')? + start;
    Some(decode_entities(&fragment[start..end]))
}

/// Drop tags and collapse whitespace to single spaces
#[must_use]
pub fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;

    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    decode_entities(&normalize_ws(&out))
}

/// Collapse runs of whitespace into single spaces and trim
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the handful of entities the catalog emits
fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// Extract the rating label ("One".."Five") from a product block's
/// `star-rating` class list.
#[must_use]
pub fn rating_label(block: &str) -> Option<String> {
    let pat = "star-rating ";
    let start = block.find(pat)? + pat.len();
    let end = block[start..].find('"')? + start;
    let label = block[start..end].trim();
    (!label.is_empty()).then(|| label.to_string())
}

/// Extract the category from a detail page's breadcrumb (third item)
#[must_use]
pub fn breadcrumb_category(html: &str) -> Option<String> {
    let breadcrumb = class_blocks(html, "ul", "breadcrumb").into_iter().next()?;
    let item = li_texts(breadcrumb).into_iter().nth(2)?;
    (!item.is_empty()).then_some(item)
}

/// Inner texts of every `<li>` in `fragment`, in order
fn li_texts(fragment: &str) -> Vec<String> {
    let mut texts = Vec::new();
    let mut from = 0;

    while let Some(rel) = fragment[from..].find("<li") {
        let start = from + rel;
        let Some(open_end) = fragment[start..].find('>').map(|i| start + i + 1) else {
            break;
        };
        let end = fragment[open_end..]
            .find("</li>")
            .map_or(fragment.len(), |i| open_end + i);
        texts.push(strip_tags(&fragment[open_end..end]));
        from = end;
    }

    texts
}
