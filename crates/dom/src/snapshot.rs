use crate::document::Document;
use crate::types::{Id, Layout, NodeKind};

const TEXT_PREVIEW: usize = 40;

impl Document {
    /// Indented one-line-per-node dump of the tree, for golden comparisons and
    /// debugging. Elements carry their offset box, scroll and flags; text is
    /// quoted and truncated.
    pub fn outline(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        self.outline_node(self.root(), 0, &mut out);
        out
    }

    fn outline_node(&self, id: Id, depth: usize, out: &mut Vec<String>) {
        let Some(record) = self.record(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        match &record.kind {
            NodeKind::Document => out.push(format!("{indent}#document")),
            NodeKind::Element {
                name,
                control,
                legacy_text_range,
            } => {
                let mut line = format!("{indent}<{name}> {}", layout_summary(&record.layout));
                if *legacy_text_range {
                    line.push_str(" legacy");
                }
                if let Some(control) = control {
                    let sel = control.selection;
                    line.push_str(&format!(
                        " value={:?} sel={}..{}",
                        preview(&control.value),
                        sel.start,
                        sel.end
                    ));
                }
                if self.focused() == Some(id) {
                    line.push_str(" focused");
                }
                out.push(line);
            }
            NodeKind::Text { text } => out.push(format!("{indent}{:?}", preview(text))),
        }
        for child in &record.children {
            self.outline_node(*child, depth + 1, out);
        }
    }
}

fn layout_summary(layout: &Layout) -> String {
    let mut s = format!(
        "[{} {} {}x{}]",
        layout.offset_left, layout.offset_top, layout.width, layout.height
    );
    if layout.scroll_left != 0.0 || layout.scroll_top != 0.0 {
        s.push_str(&format!(" scroll={},{}", layout.scroll_left, layout.scroll_top));
    }
    if layout.positioned {
        s.push_str(" positioned");
    }
    if layout.clips {
        s.push_str(" clips");
    }
    s
}

fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > TEXT_PREVIEW {
        let cut: String = flat.chars().take(TEXT_PREVIEW).collect();
        format!("{cut}…")
    } else {
        flat
    }
}
