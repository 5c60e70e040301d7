//! End-to-end parsing scenarios
//!
//! Each test parses a complete source text through the document driver and checks the
//! resulting article trees with the fluent `assert_tree` API, or the rendered output.

use folio::folio::ast::ListKind;
use folio::folio::diagnostics::CollectingSink;
use folio::folio::formats::RenderOptions;
use folio::folio::parsing::{parse_document, Document, ParseOptions};
use folio::folio::testing::assert_tree;
use rstest::rstest;

fn parse(source: &str) -> Document {
    parse_document(source, &ParseOptions::default(), &CollectingSink::new())
}

#[test]
fn test_title_with_article_id_and_paragraph() {
    let doc = parse("# Title [abc]\n\nHello");

    assert_eq!(doc.articles().len(), 1);
    assert_tree(&doc.articles()[0])
        .is_article()
        .id("abc")
        .child_count(1)
        .child(0, |section| {
            section
                .is_section()
                .class_name("root-section")
                .child_count(2)
                .child(0, |h| h.is_header(1).content("Title"))
                .child(1, |p| p.is_paragraph().content("Hello"))
        });
}

#[test]
fn test_code_block_keeps_lines_unparsed() {
    let doc = parse("# T\n```\nfoo\n[bar](baz)\n```\n");

    assert_tree(&doc.articles()[0]).child(0, |section| {
        section
            .child_count(2)
            .child(1, |code| code.code_lines(&["foo", "[bar](baz)"]).child_count(0))
    });
}

#[test]
fn test_list_followed_by_paragraph() {
    let doc = parse("# T\n- a\n- b\nc");

    assert_tree(&doc.articles()[0]).child(0, |section| {
        section
            .child_count(3)
            .child(1, |list| {
                list.is_list(ListKind::Unordered)
                    .child_count(2)
                    .child(0, |item| item.is_list_item().content("a"))
                    .child(1, |item| item.is_list_item().content("b"))
            })
            .child(2, |p| p.is_paragraph().content("c"))
    });
}

#[test]
fn test_malformed_direction_warns_and_creates_container() {
    let sink = CollectingSink::new();
    let doc = parse_document("# T\n{ [x]", &ParseOptions::default(), &sink);

    assert_eq!(
        sink.messages(),
        vec!["Defined direction is invalid; input: x".to_string()]
    );
    assert_tree(&doc.articles()[0]).child(0, |section| {
        section
            .child_count(2)
            .child(1, |div| div.is_div().class_name("content-container").child_count(0))
    });
}

#[test]
fn test_directed_container_holds_following_lines_until_closed() {
    let doc = parse("# T\n{ [r-l]\ninside\n}\noutside");

    assert_tree(&doc.articles()[0]).child(0, |section| {
        section
            .child_count(3)
            .child(1, |div| {
                div.class_name("content-container right-left")
                    .child_count(1)
                    .child(0, |p| p.content("inside"))
            })
            .child(2, |p| p.content("outside"))
    });
}

#[test]
fn test_image_link_and_file_upload() {
    let doc = parse(
        "# T\n![alt text](img/a.png)[Caption]\n[Docs](/docs)\n{report.pdf}[Yearly report](files/report.pdf)",
    );

    assert_tree(&doc.articles()[0]).child(0, |section| {
        section
            .child_count(4)
            .child(1, |figure| {
                figure
                    .is_figure()
                    .child(0, |img| img.is_image("alt text").content("img/a.png"))
                    .child(1, |cap| cap.is_figcaption().content("Caption"))
            })
            .child(2, |link| link.is_link().link_text("Docs").content("/docs"))
            .child(3, |upload| {
                upload
                    .is_div()
                    .class_name("fileupload")
                    .content("files/report.pdf")
                    .child_count(3)
                    .child(0, |icon| icon.is_image("icon of .txt files"))
                    .child(1, |text| {
                        text.class_name("fileupload-text")
                            .child(0, |p| p.class_name("fileupload-header").content("report.pdf"))
                            .child(1, |p| p.class_name("fileupload-desc").content("Yearly report"))
                    })
                    .child(2, |button| button.is_button().child_count(0))
            })
    });
}

#[test]
fn test_headers_after_the_first_nest_inside_first_section() {
    let doc = parse("# Top\n{\n## Inner\ntext\n### Deeper");

    assert_tree(&doc.articles()[0]).child_count(1).child(0, |top| {
        top.is_section()
            .child_count(4)
            .child(1, |div| div.is_div().child_count(0))
            .child(2, |inner| {
                inner
                    .is_section()
                    .child(0, |h| h.is_header(2).content("Inner"))
                    .child(1, |p| p.content("text"))
            })
            .child(3, |deeper| deeper.child(0, |h| h.is_header(3)))
    });
}

#[test]
fn test_unbalanced_closing_braces_never_lose_the_root() {
    let doc = parse("# T\n}\n}\n}\nstill here");

    assert_tree(&doc.articles()[0])
        .child_count(2)
        .child(1, |p| p.is_paragraph().content("still here"));
}

#[test]
fn test_deeply_nested_unterminated_containers() {
    let depth = 100_000;
    let source = format!("# T\n{}", "{\n".repeat(depth));

    let doc = parse(&source);
    let html = doc.render(&RenderOptions::with_indent_width(0));

    assert_eq!(html.matches("<div ").count(), depth);
    assert_eq!(html.matches("</div>").count(), depth);
    assert!(html.ends_with("</div>\n</section>\n</article>"));
}

#[rstest]
#[case("", 0)]
#[case("no header at all", 0)]
#[case("## only a subsection", 0)]
#[case("# A", 1)]
#[case("# A\n## B\n# C", 2)]
#[case("## A\n# B\n# C\n# D", 3)]
#[case("# A\n```\n# B\n```\n# C", 2)]
fn test_article_count(#[case] source: &str, #[case] expected: usize) {
    assert_eq!(parse(source).articles().len(), expected);
}

#[rstest]
#[case("\\- escaped", "\\- escaped")]
#[case("-not a list", "-not a list")]
#[case("see [a](b) inline", "see [a](b) inline")]
#[case("{ #two words }", "{ #two words }")]
#[case("####### seven", "####### seven")]
fn test_unrecognized_lines_become_paragraphs(#[case] line: &str, #[case] text: &str) {
    let doc = parse(&format!("# T\n{}", line));

    assert_tree(&doc.articles()[0]).child(0, |section| {
        section.child(1, |p| p.is_paragraph().content(text))
    });
}

#[test]
fn test_rendered_document() {
    let source = "\
stray preamble
# Guide [guide]
Welcome
![cat](img/cat.png)[A cat]
[Home](/index.html)
- one
- two
{ [l-r]
{ ##Aside }
}
{notes}[Notes](files/notes.txt)";

    let html = parse(source).render(&RenderOptions::default());

    insta::assert_snapshot!(html, @r#"
<article id="guide" class="">
    <section id="" class="root-section" href="">
        <h1 id="" class="">
            Guide
        </h1>
        <p id="" class="">Welcome</p>
        <figure id="" class="">
            <img id="" class="" src="img/cat.png" alt="img/cat.png">
            <figcaption id="" class="">A cat</figcaption>
        </figure>
        <a id="" class="" href="/index.html">
            Home
        </a>
        <ul id="" class="">
            <li id="" class="">one</li>
            <li id="" class="">two</li>
        </ul>
        <div id="" class="content-container left-right" href="">
            <h2 id="" class="">
                Aside
            </h2>
        </div>
        <div id="" class="fileupload" href="files/notes.txt">
            <img id="" class="" src="img/includes/text-file.webp" alt="img/includes/text-file.webp">
            <div id="" class="fileupload-text" href="">
                <p id="" class="fileupload-header">notes</p>
                <p id="" class="fileupload-desc">Notes</p>
            </div>
            <button id="" class=""></button>
        </div>
    </section>
</article>
"#);
}

#[test]
fn test_rendered_code_block_and_multiple_articles() {
    let source = "# One\n```\n  indented <tag>\n```\n# Two [second]";

    let html = parse(source).render(&RenderOptions::with_indent_width(2));

    let expected = "\
<article id=\"\" class=\"\">
  <section id=\"\" class=\"root-section\" href=\"\">
    <h1 id=\"\" class=\"\">
      One
    </h1>
    <pre id=\"\" class=\"\"><code>  indented <tag></code></pre>
  </section>
</article>
<article id=\"second\" class=\"\">
  <section id=\"\" class=\"root-section\" href=\"\">
    <h1 id=\"\" class=\"\">
      Two
    </h1>
  </section>
</article>";
    assert_eq!(html, expected);
}
