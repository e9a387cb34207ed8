//! End-to-end rendering of documents to text and styled buffers.
//!
//! Run with: cargo test --test rendering

use console_format::{
    buffer_to_text, BlockElement, BlockStyle, Color, ConsoleBuffer, ConsoleRenderer, Document,
    GridLength, HorizontalAlign, InlineElement, LineCharset, LineWidth, Orientation, Rect, Size,
    TextAlign, TextWrap, VerticalAlign,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render(doc: &mut Document, width: usize) -> String {
    ConsoleRenderer::render_document_to_text(doc, Rect::new(0, 0, width, Size::INFINITY)).unwrap()
}

fn lines(rows: &[&str]) -> String {
    rows.iter().map(|row| format!("{row}\n")).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn fixed_size_box_with_text() {
    init();
    let mut block = BlockElement::div()
        .with_size(10, 3)
        .with_align(HorizontalAlign::Left)
        .with_valign(VerticalAlign::Top)
        .with_child(InlineElement::span("abc"));

    assert_eq!(block.measure(Size::new(80, Size::INFINITY)), Size::new(10, 3));
    block.arrange(Rect::new(0, 0, 10, 3)).unwrap();
    assert_eq!(block.render_rect(), Some(Rect::new(0, 0, 10, 3)));

    let mut buffer = ConsoleBuffer::new(10, 3);
    block.render(&mut buffer).unwrap();
    assert_eq!(
        buffer_to_text(&buffer, LineCharset::Unicode),
        lines(&["abc       ", "          ", "          "])
    );
    assert!((3..10).all(|x| buffer.cell(x, 0).is_some_and(|c| !c.has_char())));
}

#[test]
fn hello_world_wraps_at_five() {
    init();
    let mut doc = Document::new().with_child("hello world");
    assert_eq!(render(&mut doc, 5), lines(&["hello", "world"]));
}

#[test]
fn long_word_overflows_and_is_clipped() {
    init();
    let mut doc = Document::new().with_child("hello world");
    assert_eq!(doc.measure(Size::new(4, Size::INFINITY)), Size::new(5, 2));
    assert_eq!(render(&mut doc, 4), lines(&["hell", "worl"]));
}

#[test]
fn grid_cells_share_borders() {
    init();
    let mut doc = Document::new().with_child(
        BlockElement::grid([GridLength::Auto, GridLength::Auto])
            .with_grid_stroke(LineWidth::Single)
            .with_children(["a", "bb", "ccc", "d"].map(|text| BlockElement::div().with_child(text))),
    );
    assert_eq!(
        render(&mut doc, 8),
        lines(&[
            "┌───┬──┐",
            "│a  │bb│",
            "├───┼──┤",
            "│ccc│d │",
            "└───┴──┘",
        ])
    );
}

#[test]
fn overflowing_grid_keeps_enclosing_border() {
    init();
    let mut doc = Document::new().with_child(
        BlockElement::div().with_border(LineWidth::Single).with_child(
            BlockElement::grid([GridLength::Auto])
                .with_grid_stroke(LineWidth::Single)
                .with_child(
                    BlockElement::div()
                        .with_child(InlineElement::span("aaaaaaaaaa").with_wrap(TextWrap::NoWrap)),
                ),
        ),
    );
    assert_eq!(
        render(&mut doc, 10),
        lines(&[
            "┌────────┐",
            "│┌──────┐│",
            "││aaaaaa││",
            "│└──────┘│",
            "└────────┘",
        ])
    );
}

#[test]
fn overflowing_grid_drops_hidden_separators() {
    init();
    let mut doc = Document::new().with_child(
        BlockElement::grid([GridLength::Fixed(3), GridLength::Fixed(3)])
            .with_grid_stroke(LineWidth::Double)
            .with_height(3)
            .with_children(["ab", "cd", "ef", "gh"].map(|text| BlockElement::div().with_child(text))),
    );
    assert_eq!(render(&mut doc, 6), lines(&["╔═══╦╗", "║ab ║║", "╚═══╩╝"]));
}

#[test]
fn adjacent_boxes_merge_shared_edge() {
    let mut buffer = ConsoleBuffer::new(9, 3);
    buffer.draw_rectangle(Rect::new(0, 0, 5, 3), LineWidth::Single, None);
    buffer.draw_rectangle(Rect::new(4, 0, 5, 3), LineWidth::Single, None);
    assert_eq!(
        buffer_to_text(&buffer, LineCharset::Unicode),
        lines(&["┌───┬───┐", "│   │   │", "└───┴───┘"])
    );
}

// =============================================================================
// Box model
// =============================================================================

#[test]
fn bordered_box_with_padding() {
    let mut doc = Document::new().with_child(
        BlockElement::div()
            .with_border(LineWidth::Single)
            .with_padding((1, 0))
            .with_child("hi"),
    );
    assert_eq!(render(&mut doc, 7), lines(&["┌─────┐", "│ hi  │", "└─────┘"]));
}

#[test]
fn double_border_and_margin() {
    let mut doc = Document::new().with_child(
        BlockElement::div()
            .with_margin((1, 0))
            .with_border(LineWidth::Double)
            .with_child("x"),
    );
    assert_eq!(render(&mut doc, 5), lines(&[" ╔═╗ ", " ║x║ ", " ╚═╝ "]));
}

#[test]
fn nested_alignment() {
    let mut doc = Document::new().with_child(
        BlockElement::div()
            .with_height(3)
            .with_child(
                BlockElement::div()
                    .with_align(HorizontalAlign::Center)
                    .with_child("ab"),
            )
            .with_child(
                BlockElement::div()
                    .with_align(HorizontalAlign::Right)
                    .with_child("cd"),
            ),
    );
    assert_eq!(render(&mut doc, 6), lines(&["  ab  ", "    cd", "      "]));
}

#[test]
fn horizontal_stack_of_fills() {
    let mut doc = Document::new().with_child(
        BlockElement::stack(Orientation::Horizontal)
            .with_child(BlockElement::fill('a').with_size(2, 1))
            .with_child(BlockElement::fill('b').with_size(3, 1)),
    );
    assert_eq!(render(&mut doc, 6), lines(&["aabbb "]));
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn spans_share_a_paragraph() {
    let mut doc = Document::new()
        .with_child("one ")
        .with_child(InlineElement::span("two three"))
        .with_child(InlineElement::line_break())
        .with_child("four");
    assert_eq!(render(&mut doc, 7), lines(&["one two", "three  ", "four   "]));
}

#[test]
fn text_alignment() {
    let mut doc = Document::new()
        .with_child(BlockElement::div().with_text_align(TextAlign::Center).with_child("ab"))
        .with_child(BlockElement::div().with_text_align(TextAlign::Right).with_child("ab"));
    assert_eq!(render(&mut doc, 6), lines(&["  ab  ", "    ab"]));
}

#[test]
fn inherited_char_wrap() {
    let mut doc = Document::new()
        .with_style(BlockStyle {
            text_wrap: Some(TextWrap::WrapChars),
            ..Default::default()
        })
        .with_child("hello world");
    assert_eq!(render(&mut doc, 5), lines(&["hello", " worl", "d    "]));
}

#[test]
fn nowrap_is_clipped() {
    let mut doc = Document::new().with_child(InlineElement::span("hello world").with_wrap(TextWrap::NoWrap));
    assert_eq!(render(&mut doc, 5), lines(&["hello"]));
}

#[test]
fn wide_characters() {
    let mut doc = Document::new().with_child("你好 世界");
    assert_eq!(render(&mut doc, 4), lines(&["你好", "世界"]));
}

#[test]
fn ascii_charset() {
    let mut doc = Document::new().with_child(BlockElement::div().with_border(LineWidth::Single).with_child("x"));
    let buffer = ConsoleRenderer::render_document(&mut doc, Rect::new(0, 0, 3, Size::INFINITY)).unwrap();
    assert_eq!(buffer_to_text(&buffer, LineCharset::Ascii), lines(&["+-+", "|x|", "+-+"]));
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn colors_are_inherited() {
    let mut doc = Document::new()
        .with_style(BlockStyle {
            color: Some(Color::Red),
            ..Default::default()
        })
        .with_child(
            BlockElement::div()
                .with_background(Color::Blue)
                .with_child(InlineElement::span("ab").with_color(Color::Green))
                .with_child("c"),
        );
    let buffer = ConsoleRenderer::render_document(&mut doc, Rect::new(0, 0, 4, Size::INFINITY)).unwrap();

    let cell = |x| buffer.cell(x, 0).copied().unwrap_or_default();
    assert_eq!(cell(0).ch, Some('a'));
    assert_eq!(cell(1).attrs.fg, Some(Color::Green));
    assert_eq!(cell(2).ch, Some('c'));
    assert_eq!(cell(2).attrs.fg, Some(Color::Red));
    assert!((0..4).all(|x| cell(x).attrs.bg == Some(Color::Blue)));
}

#[test]
fn border_uses_block_color() {
    let mut doc = Document::new().with_child(
        BlockElement::div()
            .with_border(LineWidth::Single)
            .with_color(Color::Yellow)
            .with_child("x"),
    );
    let buffer = ConsoleRenderer::render_document(&mut doc, Rect::new(0, 0, 3, Size::INFINITY)).unwrap();
    assert_eq!(buffer.cell(0, 0).map(|c| c.attrs.fg), Some(Some(Color::Yellow)));
    assert_eq!(buffer.cell(1, 1).map(|c| c.attrs.fg), Some(Some(Color::Yellow)));
}
