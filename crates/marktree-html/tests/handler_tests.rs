//! Integration tests for custom tag handlers.

use marktree_common::warning::{recorded_warnings, set_quiet};
use marktree_html::{
    HandlerRegistry, HtmlParser, ParseError, ParseErrorKind, Position, Scanner, TagHandler,
    TagNode,
};

fn handler_error(scanner: &Scanner<'_>, message: &str) -> ParseError {
    ParseError::Handler {
        tag: "tmpl".to_string(),
        message: message.to_string(),
        position: scanner.position(),
    }
}

/// `<tmpl {{ expr }}>` where `expr` may contain `>` and `/`.
fn template_tag(scanner: &mut Scanner<'_>) -> Result<TagNode, ParseError> {
    let position = scanner.position();
    if !scanner.match_str("<tmpl") {
        return Err(handler_error(scanner, "handler not positioned at tag start"));
    }
    scanner.skip_whitespace();
    if !scanner.match_str("{{") {
        return Err(handler_error(scanner, "expected '{{'"));
    }
    let expr = scanner.consume_until_str("}}").trim();
    if !scanner.match_str("}}") {
        return Err(handler_error(scanner, "expected '}}'"));
    }
    scanner.skip_whitespace();

    let mut node = TagNode::new("tmpl", position);
    node.set_attribute("expr", expr);
    if scanner.match_char('/') {
        node.is_self_closing = true;
    }
    if !scanner.match_char('>') {
        return Err(handler_error(scanner, "expected '>'"));
    }
    Ok(node)
}

fn parser() -> HtmlParser {
    set_quiet(true);
    HtmlParser::new().with_handler("tmpl", template_tag)
}

#[test]
fn test_handler_grammar() {
    let tree = parser()
        .parse("<tmpl {{ a > b / 2 }}>body <i>x</i></tmpl>")
        .unwrap();
    assert_eq!(tree.roots().len(), 1);

    let tmpl = tree.roots()[0];
    assert_eq!(tree[tmpl].attribute("expr").unwrap().value, "a > b / 2");
    assert_eq!(tree[tmpl].inner_text, "body");
    assert_eq!(tree[tmpl].inner_markup, "body <i>x</i>");
    assert_eq!(tree.children(tmpl).len(), 1);
}

#[test]
fn test_handler_sees_rewound_scanner() {
    let tree = parser().parse("<div>\n  <tmpl {{x}}/>\n</div>").unwrap();
    let tmpl = tree.find_by_name("tmpl").unwrap();
    assert_eq!(tree[tmpl].position, Position::new(2, 3, 8));
    assert!(tree[tmpl].is_self_closing);
    assert_eq!(tree.parent(tmpl), tree.find_by_name("div"));
}

#[test]
fn test_handler_error_propagates() {
    let err = parser().parse("<p><tmpl x></tmpl></p>").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Handler);
    assert!(err.to_string().contains("expected '{{'"));
}

#[test]
fn test_handler_match_is_case_sensitive() {
    let tree = parser().parse("<TMPL a=1></TMPL>").unwrap();
    let node = &tree[tree.roots()[0]];
    assert_eq!(node.name, "TMPL");
    assert_eq!(node.attribute("a").unwrap().value, "1");
}

#[test]
fn test_handler_node_closed_by_end_tag() {
    fn plain(scanner: &mut Scanner<'_>) -> Result<TagNode, ParseError> {
        let position = scanner.position();
        let _ = scanner.consume_until(|c| c == '>');
        let _ = scanner.take();
        Ok(TagNode::new("br", position))
    }

    let parser = HtmlParser::new().with_handler("br", plain);
    let tree = parser.parse("<br><b>x</b></br>").unwrap();
    let br = tree.roots()[0];
    assert!(!tree[br].is_self_closing);
    assert_eq!(tree.children(br).len(), 1);
    assert_eq!(tree[br].inner_markup, "<b>x</b>");
}

#[test]
fn test_handler_that_consumes_nothing_fails() {
    fn stuck(scanner: &mut Scanner<'_>) -> Result<TagNode, ParseError> {
        Ok(TagNode::new("loop", scanner.position()))
    }

    let parser = HtmlParser::new().with_handler("loop", stuck);
    match parser.parse("<p>\n  <loop></loop></p>").unwrap_err() {
        ParseError::Handler { tag, position, .. } => {
            assert_eq!(tag, "loop");
            assert_eq!(position, Position::new(2, 3, 6));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_handler_closure() {
    let mut parser = HtmlParser::new();
    parser.add_custom_handler("x-raw", |scanner: &mut Scanner<'_>| {
        let position = scanner.position();
        let _ = scanner.consume_until_str("/>");
        let _ = scanner.match_str("/>");
        let mut node = TagNode::new("x-raw", position);
        node.is_self_closing = true;
        Ok(node)
    });
    let tree = parser.parse("<p><x-raw <<odd>>/></p>").unwrap();
    let p = tree.roots()[0];
    assert_eq!(tree[tree.children(p)[0]].name, "x-raw");
}

#[test]
fn test_registry_replace_and_blank_names() {
    set_quiet(true);
    let mut registry = HandlerRegistry::new();
    assert!(registry.is_empty());

    let first: Box<dyn TagHandler> = Box::new(template_tag);
    assert!(registry.insert("tmpl", first));
    let second: Box<dyn TagHandler> = Box::new(template_tag);
    assert!(registry.insert("tmpl", second));
    let blank: Box<dyn TagHandler> = Box::new(template_tag);
    assert!(!registry.insert("  ", blank));

    assert_eq!(registry.len(), 1);
    assert!(registry.contains("tmpl"));
    assert!(!registry.contains("Tmpl"));
    assert!(
        recorded_warnings()
            .iter()
            .any(|w| w.contains("custom handler for <tmpl> replaced"))
    );

    let parser = HtmlParser::with_handlers(registry);
    assert_eq!(parser.handlers().len(), 1);
    assert!(parser.parse("<tmpl {{1}}/>").is_ok());
}
