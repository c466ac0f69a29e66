mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
pub mod site;
pub mod template;

pub use block::{BlockType, SpanStyle, TextSpan};
pub use config::{BuildConfig, Config, ErrorPolicy, SiteConfig};
pub use error::{Error, SiteError};
pub use html::{block_to_html_node, extract_title, markdown_to_html_node, span_to_html_node};
pub use inline::{
    extract_images, extract_links, split_delimiter, split_images, split_links, text_to_spans,
};
pub use node::{Attributes, HtmlNode};
pub use parser::{classify_block, markdown_to_blocks};

/// Convert markdown to an HTML string wrapped in a single `div`.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    Ok(markdown_to_html_node(markdown)?.render())
}
