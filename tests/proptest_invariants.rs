//! Property-based tests for the layout, navigation, scroll and input
//! invariants.
//!
//! 1. **Wrap bound** - no wrapped line is wider than the requested width,
//!    counted in display cells.
//! 2. **Focus ids** - buttons get `0..count` in declaration order, nothing
//!    else gets an id.
//! 3. **Navigation bounds** - focus stays inside `[0, count)`.
//! 4. **Scroll-to-focus** - the focused range ends up inside the window.
//! 5. **UTF-8** - every scalar value decodes back to itself.
//! 6. **Button shape** - three lines, ruled top and bottom.

use std::time::Duration;

use proptest::prelude::*;
use spark_immediate::{
    adjust_scroll, button_block, decode_utf8, navigate, str_width, wrap_text, InputDecoder,
    InputEvent, Key, NavState, RenderLine, TestBackend, Widget, WidgetList,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn nav_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Tab),
        Just(Key::Enter),
        Just(Key::Space),
        Just(Key::Left),
        Just(Key::Rune),
        Just(Key::None),
    ]
}

#[derive(Debug, Clone, Copy)]
enum Decl {
    Text,
    Button,
    GroupStart,
    GroupEnd,
}

fn decl() -> impl Strategy<Value = Decl> {
    prop_oneof![
        Just(Decl::Text),
        Just(Decl::Button),
        Just(Decl::GroupStart),
        Just(Decl::GroupEnd),
    ]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wrapped_lines_fit_width(
        text in "[a-z ]{0,60}(\n[a-zA-Z0-9 ]{0,40}){0,3}",
        width in 1usize..40,
    ) {
        for line in wrap_text(&text, width) {
            prop_assert!(line.chars().count() <= width, "{line:?} wider than {width}");
        }
    }

    #[test]
    fn wrapped_wide_lines_fit_cells(
        text in "[a-z 中文字]{0,60}",
        width in 2usize..40,
    ) {
        let lines = wrap_text(&text, width);
        for line in &lines {
            prop_assert!(str_width(line) <= width, "{line:?} wider than {width} cells");
        }
        let kept: String = lines.concat().chars().filter(|c| *c != ' ').collect();
        let input: String = text.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(kept, input);
    }

    #[test]
    fn unbroken_token_is_hard_cut(token in "[a-z]{1,50}", width in 1usize..20) {
        let lines = wrap_text(&token, width);
        let (last, full) = lines.split_last().unwrap();
        for line in full {
            prop_assert_eq!(line.chars().count(), width);
        }
        prop_assert!(!last.is_empty());
        prop_assert_eq!(lines.concat(), token);
    }

    #[test]
    fn focus_ids_are_contiguous(decls in prop::collection::vec(decl(), 0..40)) {
        let mut list = WidgetList::new();
        let mut returned = Vec::new();
        for d in &decls {
            match d {
                Decl::Text => list.push_text("t"),
                Decl::Button => returned.push(list.push_button("b")),
                Decl::GroupStart => list.push_group_start(),
                Decl::GroupEnd => list.push_group_end(),
            }
        }

        let ids: Vec<usize> = list.iter().filter_map(Widget::focus_id).collect();
        let expected: Vec<usize> = (0..list.focus_count()).collect();
        prop_assert_eq!(&ids, &expected);
        prop_assert_eq!(&returned, &expected);

        for widget in &list {
            prop_assert_eq!(widget.focus_id().is_some(), matches!(widget, Widget::Button { .. }));
        }
    }

    #[test]
    fn navigation_stays_in_bounds(
        count in 1usize..20,
        start in 0usize..20,
        keys in prop::collection::vec(nav_key(), 0..50),
    ) {
        let mut state = NavState {
            focus_index: start % count,
            focus_count: count,
            ..NavState::default()
        };
        for key in keys {
            let before = state.focus_index;
            navigate(&mut state, &InputEvent::key(key));
            prop_assert!(state.focus_index < count);
            match key {
                Key::Up => prop_assert_eq!(state.focus_index, before.saturating_sub(1)),
                Key::Down => prop_assert_eq!(state.focus_index, (before + 1).min(count - 1)),
                Key::Tab => prop_assert_eq!(state.focus_index, (before + 1) % count),
                _ => prop_assert_eq!(state.focus_index, before),
            }
        }
    }

    #[test]
    fn scroll_keeps_focus_visible(
        total in 1usize..120,
        first_frac in 0.0f64..1.0,
        span in 1usize..6,
        window in 1usize..30,
        scroll in 0usize..150,
    ) {
        let span = span.min(window);
        let first = ((total as f64) * first_frac) as usize % total;
        let last = (first + span - 1).min(total - 1);

        let lines: Vec<RenderLine> = (0..total)
            .map(|i| {
                let mut line = RenderLine::from_text("x", 4, 0);
                if (first..=last).contains(&i) {
                    line.focus_id = Some(0);
                    line.line_in_widget = i - first;
                }
                line
            })
            .collect();

        let adjusted = adjust_scroll(scroll, &lines, 0, window);
        prop_assert!(adjusted <= first);
        prop_assert!(last < adjusted + window);
    }

    #[test]
    fn utf8_round_trip(ch in any::<char>()) {
        let mut bytes = [0u8; 4];
        let encoded = ch.encode_utf8(&mut bytes);
        prop_assert_eq!(decode_utf8(encoded.as_bytes()), Some((ch, encoded.len())));
    }

    #[test]
    fn decoder_emits_multibyte_runes(ch in any::<char>().prop_filter("multi-byte", |c| c.len_utf8() > 1)) {
        let mut decoder = InputDecoder::new();
        let mut bytes = [0u8; 4];
        decoder.feed(ch.encode_utf8(&mut bytes).as_bytes());

        let mut idle = TestBackend::default();
        let event = decoder.next_event(&mut idle, Duration::ZERO);
        prop_assert_eq!(event, InputEvent::rune(ch));
        prop_assert!(!decoder.has_pending());
    }

    #[test]
    fn button_block_shape(label in "[ -~]{0,30}", max_width in 4usize..60, id in 0usize..10) {
        let block = button_block(&label, max_width, id);
        prop_assert_eq!(block.lines.len(), 3);
        prop_assert!(block.width <= max_width);

        for (offset, line) in block.lines.iter().enumerate() {
            prop_assert_eq!(line.cells.len(), block.width);
            prop_assert_eq!(line.focus_id, Some(id));
            prop_assert_eq!(line.line_in_widget, offset);
        }

        for (row, (left, right)) in [(0, ('┌', '┐')), (2, ('└', '┘'))] {
            let text: Vec<char> = block.lines[row].text().chars().collect();
            prop_assert_eq!(text[0], left);
            prop_assert_eq!(text[text.len() - 1], right);
            prop_assert!(text[1..text.len() - 1].iter().all(|&c| c == '─'));
        }

        let middle = &block.lines[1].cells;
        prop_assert!(middle[1..middle.len() - 1].iter().all(|c| c.inverts_on_focus()));
    }
}
