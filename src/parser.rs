use std::sync::LazyLock;

use regex::Regex;

use crate::block::BlockType;

pub(crate) const FENCE: &str = "```";

/// Two or more newlines separate blocks.
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} ").unwrap());

/// Ordered list marker: digits, a dot and one whitespace character.
pub(crate) static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Split a markdown document into trimmed, non-empty blocks in source order.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let markdown = markdown.replace("\r\n", "\n");
    BLANK_LINES_RE
        .split(&markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Classify a block by its shape. The first matching rule wins.
pub fn classify_block(block: &str) -> BlockType {
    let block = block.trim();

    if is_fenced(block) {
        return BlockType::Code;
    }

    let first_line = block.lines().next().unwrap_or_default();
    if HEADING_RE.is_match(first_line) {
        return BlockType::Heading;
    }

    let mut lines = block.split('\n');
    if lines.clone().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines.clone().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }
    if lines.all(|line| ORDERED_ITEM_RE.is_match(line)) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Opening and closing fences that do not overlap.
pub(crate) fn is_fenced(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}
