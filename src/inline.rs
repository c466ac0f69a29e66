//! Inline tokenizer: raw text to styled spans.
//!
//! Tokenizing runs a fixed sequence of passes over the plain spans: bold,
//! italic (`_` then `*`), inline code, then image and link markup. Each pass
//! leaves already-styled spans alone, so styles never nest.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::{SpanStyle, TextSpan};
use crate::error::Error;

/// `![alt](url)`; brackets are not allowed in the alt text, parentheses not in the url.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// `[text](url)`, shortest match.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

const DELIMITER_PASSES: [(&str, SpanStyle); 4] = [
    ("**", SpanStyle::Bold),
    ("_", SpanStyle::Italic),
    ("*", SpanStyle::Italic),
    ("`", SpanStyle::Code),
];

/// Tokenize a run of inline markdown into spans.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, Error> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, style) in DELIMITER_PASSES {
        spans = split_delimiter(spans, delimiter, style)?;
    }
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Split every plain span on `delimiter`, styling the enclosed pieces.
///
/// Pieces alternate plain and styled, starting and ending on plain. Empty
/// pieces are dropped. An even piece count means a delimiter was left open.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    style: SpanStyle,
) -> Result<Vec<TextSpan>, Error> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text().split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(Error::malformed(format!(
                "unclosed `{delimiter}` in {:?}",
                span.text()
            )));
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(piece));
            } else {
                out.push(TextSpan::new(piece, style));
            }
        }
    }
    Ok(out)
}

/// `(alt, url)` for every image in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    Markup::Image.find(text).into_iter().map(MarkupMatch::into_parts).collect()
}

/// `(text, url)` for every link in `text`, in order.
///
/// Matches directly preceded by `!` are image markup and are skipped.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    Markup::Link.find(text).into_iter().map(MarkupMatch::into_parts).collect()
}

/// Split image markup out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, Error> {
    split_markup(spans, Markup::Image)
}

/// Split link markup out of every plain span.
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, Error> {
    split_markup(spans, Markup::Link)
}

#[derive(Clone, Copy)]
enum Markup {
    Image,
    Link,
}

/// One markup occurrence, with its byte range in the searched text.
struct MarkupMatch {
    start: usize,
    end: usize,
    label: String,
    url: String,
}

impl MarkupMatch {
    fn into_parts(self) -> (String, String) {
        (self.label, self.url)
    }
}

impl Markup {
    fn find(self, text: &str) -> Vec<MarkupMatch> {
        let re = match self {
            Self::Image => &*IMAGE_RE,
            Self::Link => &*LINK_RE,
        };
        re.captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if matches!(self, Self::Link) && text[..whole.start()].ends_with('!') {
                    return None;
                }
                Some(MarkupMatch {
                    start: whole.start(),
                    end: whole.end(),
                    label: caps[1].to_owned(),
                    url: caps[2].to_owned(),
                })
            })
            .collect()
    }

    fn span(self, label: String, url: String) -> TextSpan {
        match self {
            Self::Image => TextSpan::image(label, url),
            Self::Link => TextSpan::link(label, url),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Link => "link",
        }
    }
}

fn split_markup(spans: Vec<TextSpan>, markup: Markup) -> Result<Vec<TextSpan>, Error> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text();
        let found = markup.find(text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for found in found {
            let Some(before) = text.get(cursor..found.start) else {
                return Err(Error::malformed(format!(
                    "{} markup at byte {} overlaps the previous match",
                    markup.name(),
                    found.start
                )));
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(markup.span(found.label, found.url));
            cursor = found.end;
        }
        let rest = &text[cursor..];
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn styled(text: &str, style: SpanStyle) -> TextSpan {
        TextSpan::new(text, style)
    }

    #[test]
    fn bold_in_middle() {
        let spans = split_delimiter(
            vec![TextSpan::plain(
                "This is a text node with a **bolded** word in the middle.",
            )],
            "**",
            SpanStyle::Bold,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is a text node with a "),
                styled("bolded", SpanStyle::Bold),
                TextSpan::plain(" word in the middle."),
            ]
        );
    }

    #[test]
    fn two_bold_sections() {
        let spans = split_delimiter(
            vec![TextSpan::plain(
                "This is a **text node** with two **bold sections** in the middle.",
            )],
            "**",
            SpanStyle::Bold,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is a "),
                styled("text node", SpanStyle::Bold),
                TextSpan::plain(" with two "),
                styled("bold sections", SpanStyle::Bold),
                TextSpan::plain(" in the middle."),
            ]
        );
    }

    #[test]
    fn star_italic() {
        let spans = split_delimiter(
            vec![TextSpan::plain("with *some italic words* here")],
            "*",
            SpanStyle::Italic,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("with "),
                styled("some italic words", SpanStyle::Italic),
                TextSpan::plain(" here"),
            ]
        );
    }

    #[test]
    fn styled_spans_pass_through_later_passes() {
        let spans = vec![
            styled("a_b_c", SpanStyle::Code),
            TextSpan::plain(" and _italic_"),
        ];
        let spans = split_delimiter(spans, "_", SpanStyle::Italic).unwrap();
        assert_eq!(
            spans,
            vec![
                styled("a_b_c", SpanStyle::Code),
                TextSpan::plain(" and "),
                styled("italic", SpanStyle::Italic),
            ]
        );
    }

    #[test]
    fn unclosed_delimiter_fails() {
        let err = text_to_spans("a **b c").unwrap_err();
        assert!(matches!(err, Error::MalformedMarkdown(_)));
        assert!(text_to_spans("a `b").is_err());
    }

    #[test]
    fn delimiter_balance() {
        assert_eq!(
            text_to_spans("a **b** c").unwrap(),
            vec![
                TextSpan::plain("a "),
                styled("b", SpanStyle::Bold),
                TextSpan::plain(" c"),
            ]
        );
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(text_to_spans("").unwrap().is_empty());
    }

    #[test]
    fn extract_image() {
        assert_eq!(
            extract_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)"),
            vec![(
                "image".to_owned(),
                "https://i.imgur.com/zjjcJKZ.png".to_owned()
            )]
        );
    }

    #[test]
    fn extract_multiple_links() {
        assert_eq!(
            extract_links(
                "a [link to web](https://www.google.com) and another [](https://www.google.com/image.png)"
            ),
            vec![
                (
                    "link to web".to_owned(),
                    "https://www.google.com".to_owned()
                ),
                (String::new(), "https://www.google.com/image.png".to_owned()),
            ]
        );
    }

    #[test]
    fn links_skip_image_markup() {
        assert!(extract_links("an ![alt](u) image").is_empty());
        assert_eq!(
            text_to_spans("![alt](u)").unwrap(),
            vec![TextSpan::image("alt", "u")]
        );
    }

    #[test]
    fn link_after_identical_bang_markup() {
        // The first copy is not an image (parenthesis in the url) and must stay plain.
        assert_eq!(
            text_to_spans("Look ![x](a(b) then [x](a(b)").unwrap(),
            vec![
                TextSpan::plain("Look ![x](a(b) then "),
                TextSpan::link("x", "a(b"),
            ]
        );
    }

    #[test]
    fn split_single_image() {
        let spans = split_images(vec![TextSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)",
        )])
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
            ]
        );
    }

    #[test]
    fn split_multiple_images() {
        let spans = split_images(vec![TextSpan::plain(
            "an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![image2](https://i.imgur.com/wow.png) end",
        )])
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and another "),
                TextSpan::image("image2", "https://i.imgur.com/wow.png"),
                TextSpan::plain(" end"),
            ]
        );
    }

    #[test]
    fn split_single_link() {
        let spans = split_links(vec![TextSpan::plain(
            "This is text with an [this link rocks](https://www.google.com/rocks)",
        )])
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::link("this link rocks", "https://www.google.com/rocks"),
            ]
        );
    }

    #[test]
    fn text_without_links_is_unchanged() {
        let spans = split_links(vec![TextSpan::plain("no links, oops!")]).unwrap();
        assert_eq!(spans, vec![TextSpan::plain("no links, oops!")]);
    }

    #[test]
    fn full_pipeline() {
        let spans = text_to_spans(
            "This is **text** with an _italic_ word and a `code block` and an ![image](https://i.imgur.com/zjjcJKZ.png) and a [link](https://boot.dev)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                styled("text", SpanStyle::Bold),
                TextSpan::plain(" with an "),
                styled("italic", SpanStyle::Italic),
                TextSpan::plain(" word and a "),
                styled("code block", SpanStyle::Code),
                TextSpan::plain(" and an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn no_nested_styles() {
        assert_eq!(
            text_to_spans("**bold _not italic_**").unwrap(),
            vec![styled("bold _not italic_", SpanStyle::Bold)]
        );
    }
}
