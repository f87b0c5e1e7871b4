//! TOML tree fixtures.
//!
//! ```toml
//! format = "dom-fixture-v1"
//!
//! [[nodes]]
//! name = "html"
//! layout = { width = 800, height = 600 }
//!
//! [[nodes.children]]
//! name = "div"
//! key = "editor"
//! children = [{ text = "abc" }, { text = "defgh" }]
//! ```
//!
//! A node with `text` is a text node; a node with `value` is a text control;
//! anything else is a plain element. `key` names a node for lookup from tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use dom::{Document, Id, Layout};
use serde::Deserialize;

pub const FIXTURE_FORMAT_V1: &str = "dom-fixture-v1";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    format: String,
    #[serde(default)]
    nodes: Vec<FixtureNode>,
    /// Expected `Document::outline()`, checked by `Fixture::expected_outline`.
    #[serde(default)]
    outline: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureNode {
    name: Option<String>,
    text: Option<String>,
    value: Option<String>,
    key: Option<String>,
    #[serde(default)]
    legacy_text_range: bool,
    #[serde(default)]
    layout: FixtureLayout,
    #[serde(default)]
    children: Vec<FixtureNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FixtureLayout {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    scroll_left: f32,
    scroll_top: f32,
    positioned: bool,
    clips: bool,
}

impl From<&FixtureLayout> for Layout {
    fn from(l: &FixtureLayout) -> Self {
        Layout {
            offset_left: l.left,
            offset_top: l.top,
            width: l.width,
            height: l.height,
            scroll_left: l.scroll_left,
            scroll_top: l.scroll_top,
            positioned: l.positioned,
            clips: l.clips,
        }
    }
}

/// A document built from a fixture, plus the ids of its keyed nodes.
pub struct Fixture {
    pub document: Document,
    keys: BTreeMap<String, Id>,
    outline: Vec<String>,
    origin: String,
}

impl Fixture {
    pub fn id(&self, key: &str) -> Id {
        *self
            .keys
            .get(key)
            .unwrap_or_else(|| panic!("fixture {} has no node keyed {key:?}", self.origin))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Outline lines declared in the fixture; empty when none were given.
    pub fn expected_outline(&self) -> &[String] {
        &self.outline
    }
}

pub fn load_fixture(path: &Path) -> Fixture {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"));
    parse_fixture(&content, &format!("{path:?}"))
}

pub fn parse_fixture(content: &str, origin: &str) -> Fixture {
    let file: FixtureFile = toml::from_str(content)
        .unwrap_or_else(|err| panic!("failed to parse fixture {origin}: {err}"));
    assert_eq!(
        file.format, FIXTURE_FORMAT_V1,
        "unsupported fixture format in {origin}"
    );

    let mut fixture = Fixture {
        document: Document::new(),
        keys: BTreeMap::new(),
        outline: file.outline,
        origin: origin.to_string(),
    };
    let root = fixture.document.root();
    for node in &file.nodes {
        build_node(&mut fixture, root, node);
    }
    fixture
}

fn build_node(fixture: &mut Fixture, parent: Id, node: &FixtureNode) {
    let origin = fixture.origin.clone();
    let doc = &mut fixture.document;
    let id = match (&node.name, &node.text, &node.value) {
        (None, Some(text), None) => {
            assert!(
                node.children.is_empty(),
                "text node {text:?} in {origin} cannot have children"
            );
            doc.append_text(parent, text)
        }
        (Some(name), None, Some(value)) => {
            doc.append_text_control(parent, name, value, Layout::from(&node.layout))
        }
        (Some(name), None, None) => doc.append_element(parent, name, Layout::from(&node.layout)),
        _ => panic!("node {node:?} in {origin} must have exactly one of `name` or `text`"),
    }
    .unwrap_or_else(|err| panic!("failed to build fixture {origin}: {err}"));

    if node.legacy_text_range {
        doc.set_legacy_text_range(id, true)
            .unwrap_or_else(|err| panic!("bad legacy_text_range in {origin}: {err}"));
    }
    if let Some(key) = &node.key {
        let previous = fixture.keys.insert(key.clone(), id);
        assert!(previous.is_none(), "duplicate key {key:?} in {origin}");
    }
    for child in &node.children {
        build_node(fixture, id, child);
    }
}
