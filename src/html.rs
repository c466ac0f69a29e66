use crate::block::{BlockType, SpanStyle, TextSpan};
use crate::error::Error;
use crate::inline::text_to_spans;
use crate::node::HtmlNode;
use crate::parser::{FENCE, ORDERED_ITEM_RE, classify_block, is_fenced, markdown_to_blocks};

/// Convert a whole document to a `div` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, Error> {
    let children = markdown_to_blocks(markdown)
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Text of the first level-1 heading, verbatim.
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    markdown_to_blocks(markdown)
        .iter()
        .find_map(|block| block.trim().strip_prefix("# ").map(str::to_owned))
        .ok_or(Error::TitleNotFound)
}

/// Map a span to its HTML leaf.
pub fn span_to_html_node(span: &TextSpan) -> HtmlNode {
    let text = span.text();
    let url = span.url().unwrap_or_default();
    match span.style() {
        SpanStyle::Plain => HtmlNode::text(text),
        SpanStyle::Bold => HtmlNode::leaf("b", text),
        SpanStyle::Italic => HtmlNode::leaf("i", text),
        SpanStyle::Code => HtmlNode::leaf("code", text),
        SpanStyle::Link => HtmlNode::leaf("a", text).with_attribute("href", url),
        SpanStyle::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", text),
    }
}

/// Convert one block to its HTML subtree.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    let block = block.trim();
    match classify_block(block) {
        BlockType::Paragraph => paragraph_to_html_node(block),
        BlockType::Heading => heading_to_html_node(block),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => unordered_list_to_html_node(block),
        BlockType::OrderedList => ordered_list_to_html_node(block),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, Error> {
    Ok(text_to_spans(text)?
        .iter()
        .map(span_to_html_node)
        .collect())
}

fn paragraph_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    let paragraph = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&paragraph)?))
}

fn heading_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    let level = block.chars().take_while(|&c| c == '#').count();
    let text = block.get(level + 1..).unwrap_or_default();
    if text.is_empty() {
        return Err(Error::malformed(format!(
            "heading {block:?} has no text after its marker"
        )));
    }
    Ok(HtmlNode::parent(
        format!("h{level}"),
        text_to_children(text)?,
    ))
}

fn code_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    if !is_fenced(block) {
        return Err(Error::malformed("code block must open and close with ```"));
    }
    let inner = &block[FENCE.len()..block.len() - FENCE.len()];
    // The opening fence line may carry an info string.
    let code = inner.split_once('\n').map_or(inner, |(_, rest)| rest);
    Ok(HtmlNode::parent(
        "pre",
        vec![HtmlNode::parent("code", vec![HtmlNode::text(code)])],
    ))
}

fn quote_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    let mut lines = Vec::new();
    for line in block.split('\n') {
        if !line.starts_with('>') {
            return Err(Error::malformed(format!(
                "quote line {line:?} does not start with '>'"
            )));
        }
        lines.push(line.trim_start_matches('>').trim());
    }
    Ok(HtmlNode::parent(
        "blockquote",
        text_to_children(&lines.join(" "))?,
    ))
}

fn unordered_list_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    list_to_html_node(block, "ul", |line| line.strip_prefix("- ").unwrap_or(line))
}

fn ordered_list_to_html_node(block: &str) -> Result<HtmlNode, Error> {
    list_to_html_node(block, "ol", |line| {
        ORDERED_ITEM_RE
            .find(line)
            .map_or(line, |marker| &line[marker.end()..])
    })
}

fn list_to_html_node(
    block: &str,
    tag: &str,
    item_text: impl Fn(&str) -> &str,
) -> Result<HtmlNode, Error> {
    let items = block
        .split('\n')
        .map(|line| -> Result<HtmlNode, Error> {
            Ok(HtmlNode::parent("li", text_to_children(item_text(line))?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items))
}
