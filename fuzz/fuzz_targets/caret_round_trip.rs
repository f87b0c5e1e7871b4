#![no_main]

use caret::{TreeRange, get_caret_position, set_caret_position, text_boundary_at};
use dom::{Document, Layout};
use libfuzzer_sys::fuzz_target;

// Input layout: first byte is the requested caret position, the rest is split
// on 0xFF into text nodes; a 0xFE prefix nests that text in a <b>.
fuzz_target!(|data: &[u8]| {
    let Some((&position, rest)) = data.split_first() else {
        return;
    };
    let mut doc = Document::new();
    let Ok(editor) = doc.append_element(doc.root(), "div", Layout::default()) else {
        return;
    };
    for chunk in rest.split(|b| *b == 0xFF) {
        let (parent, bytes) = match chunk.split_first() {
            Some((0xFE, tail)) => match doc.append_element(editor, "b", Layout::default()) {
                Ok(wrapper) => (wrapper, tail),
                Err(_) => return,
            },
            _ => (editor, chunk),
        };
        let text = String::from_utf8_lossy(bytes);
        if doc.append_text(parent, &text).is_err() {
            return;
        }
    }

    let total = doc.text_content(editor).chars().count();
    let position = usize::from(position);
    let expected = position.min(total);

    set_caret_position(&mut doc, editor, position).expect("editor accepts a caret");
    let boundary = text_boundary_at(&doc, editor, position);
    assert!(doc.is_text(boundary.node));
    assert_eq!(doc.selection_ranges(), &[TreeRange::collapsed(boundary)]);
    assert_eq!(get_caret_position(&mut doc, editor), Ok(expected));
});
