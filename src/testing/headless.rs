//! HeadlessHost: an in-memory [`Host`] built from compiled markup.
//!
//! The scanner reads back only the subset the compiler emits: objects
//! (`Type {`), properties (`name: value`) and closing braces. Everything
//! else (imports, `property <type>` prefixes, handler call arguments) is
//! skipped.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use logos::Logos;
use slotmap::SlotMap;

use crate::chrome::Edge;
use crate::live::{Host, HostError, LiveId};
use crate::style::Value;

/// Markup token. Unlexable bytes (`(`, `|`, `;`) come back as errors and are
/// dropped.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
enum MarkupToken {
    #[token("{")]
    Open,

    #[token("}")]
    Close,

    #[token(":")]
    Colon,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier, possibly dotted: `Layout.fillWidth`, `Qt.Window`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*")]
    Ident,
}

/// One object of the live graph.
#[derive(Debug, Clone)]
pub struct LiveObject {
    /// Markup type, e.g. `Button` or `Rectangle`.
    pub type_name: String,
    pub properties: BTreeMap<String, Value>,
    pub children: Vec<LiveId>,
    pub parent: Option<LiveId>,
}

impl LiveObject {
    fn new(type_name: &str, parent: Option<LiveId>) -> Self {
        Self {
            type_name: type_name.to_owned(),
            properties: BTreeMap::new(),
            children: Vec::new(),
            parent,
        }
    }

    /// The `objectName` property.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("objectName")?.as_text()
    }
}

/// A host without a renderer: the live graph is a slotmap of
/// [`LiveObject`]s, native window gestures are recorded.
#[derive(Debug)]
pub struct HeadlessHost {
    objects: SlotMap<LiveId, LiveObject>,
    window: LiveId,
    move_requests: usize,
    resize_requests: Vec<Edge>,
    accept_gestures: bool,
}

impl HeadlessHost {
    /// Build the live graph from markup text. The first top-level object is
    /// the window; markup with no object yields an empty `Item` window.
    pub fn from_markup(markup: &str) -> Self {
        let tokens: Vec<(MarkupToken, &str)> = MarkupToken::lexer(markup)
            .spanned()
            .filter_map(|(token, span)| token.ok().map(|t| (t, &markup[span])))
            .collect();

        let mut objects: SlotMap<LiveId, LiveObject> = SlotMap::with_key();
        let mut window = None;
        let mut stack: Vec<LiveId> = Vec::new();
        let kind_at = |i: usize| tokens.get(i).map(|(token, _)| *token);

        let mut i = 0;
        while let Some(&(token, text)) = tokens.get(i) {
            match token {
                MarkupToken::Ident if kind_at(i + 1) == Some(MarkupToken::Open) => {
                    let parent = stack.last().copied();
                    let id = objects.insert(LiveObject::new(text, parent));
                    match parent.and_then(|p| objects.get_mut(p)) {
                        Some(parent) => parent.children.push(id),
                        None => {
                            window.get_or_insert(id);
                        }
                    }
                    stack.push(id);
                    i += 2;
                }
                MarkupToken::Ident if kind_at(i + 1) == Some(MarkupToken::Colon) => {
                    // `background: Rectangle {` holds an object, not a value.
                    if kind_at(i + 2) == Some(MarkupToken::Ident)
                        && kind_at(i + 3) == Some(MarkupToken::Open)
                    {
                        i += 2;
                        continue;
                    }
                    if let (Some(&(value_token, value_text)), Some(&owner)) =
                        (tokens.get(i + 2), stack.last())
                    {
                        if let Some(value) = parse_value(value_token, value_text) {
                            if let Some(object) = objects.get_mut(owner) {
                                object.properties.insert(text.to_owned(), value);
                            }
                        }
                    }
                    i += 3;
                }
                MarkupToken::Close => {
                    stack.pop();
                    i += 1;
                }
                _ => i += 1,
            }
        }

        let window = window.unwrap_or_else(|| objects.insert(LiveObject::new("Item", None)));
        tracing::debug!("headless host loaded {} live objects", objects.len());
        Self {
            objects,
            window,
            move_requests: 0,
            resize_requests: Vec::new(),
            accept_gestures: true,
        }
    }

    /// Make the native move/resize gestures report failure (builder).
    pub fn rejecting_gestures(mut self) -> Self {
        self.accept_gestures = false;
        self
    }

    /// The live object behind `id`.
    pub fn object(&self, id: LiveId) -> Option<&LiveObject> {
        self.objects.get(id)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the graph holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The first object named `name`, the window included, depth-first.
    pub fn find(&self, name: &str) -> Option<LiveId> {
        std::iter::once(self.window)
            .chain(self.descendants(self.window))
            .find(|&id| self.objects.get(id).and_then(LiveObject::name) == Some(name))
    }

    /// Objects carrying a kind tag, the window included, depth-first.
    pub fn tagged(&self) -> Vec<LiveId> {
        std::iter::once(self.window)
            .chain(self.descendants(self.window))
            .filter(|&id| self.kind_tag(id).is_some())
            .collect()
    }

    /// Drop an object and its subtree, as a host does when it fails to
    /// instantiate part of the markup. Handles into it become stale.
    pub fn remove(&mut self, id: LiveId) {
        let subtree: Vec<LiveId> = std::iter::once(id).chain(self.descendants(id)).collect();
        if let Some(parent) = self.objects.get(id).and_then(|o| o.parent) {
            if let Some(parent) = self.objects.get_mut(parent) {
                parent.children.retain(|&child| child != id);
            }
        }
        for object in subtree {
            self.objects.remove(object);
        }
    }

    /// Number of native move gestures requested.
    pub fn move_requests(&self) -> usize {
        self.move_requests
    }

    /// Edges of the native resize gestures requested, in order.
    pub fn resize_requests(&self) -> &[Edge] {
        &self.resize_requests
    }

    /// Every property of every object, one line each, in graph order.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        for id in std::iter::once(self.window).chain(self.descendants(self.window)) {
            let Some(object) = self.objects.get(id) else {
                continue;
            };
            let _ = writeln!(out, "{} {}", object.type_name, object.name().unwrap_or("-"));
            for (key, value) in &object.properties {
                let _ = writeln!(out, "  {key} = {value}");
            }
        }
        out
    }
}

fn parse_value(token: MarkupToken, text: &str) -> Option<Value> {
    match token {
        MarkupToken::Str => {
            let inner = unescape(&text[1..text.len() - 1]);
            Some(if inner.starts_with('#') {
                Value::Color(inner)
            } else {
                Value::Text(inner)
            })
        }
        MarkupToken::Number => text.parse().ok().map(Value::Number),
        MarkupToken::Ident => Some(match text {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            other => Value::Text(other.to_owned()),
        }),
        _ => None,
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

impl Host for HeadlessHost {
    fn window(&self) -> LiveId {
        self.window
    }

    fn find_child(&self, scope: LiveId, name: &str) -> Option<LiveId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.objects.get(id).and_then(LiveObject::name) == Some(name))
    }

    fn descendants(&self, scope: LiveId) -> Vec<LiveId> {
        let mut result = Vec::new();
        let mut stack: Vec<LiveId> = match self.objects.get(scope) {
            Some(object) => object.children.iter().rev().copied().collect(),
            None => return result,
        };
        while let Some(current) = stack.pop() {
            let Some(object) = self.objects.get(current) else {
                continue;
            };
            result.push(current);
            stack.extend(object.children.iter().rev().copied());
        }
        result
    }

    fn kind_tag(&self, object: LiveId) -> Option<&str> {
        self.objects.get(object)?.properties.get("qmlType")?.as_text()
    }

    fn property(&self, object: LiveId, name: &str) -> Option<Value> {
        self.objects.get(object)?.properties.get(name).cloned()
    }

    fn set_property(&mut self, object: LiveId, name: &str, value: Value) -> Result<(), HostError> {
        let live = self
            .objects
            .get_mut(object)
            .ok_or(HostError::StaleObject(object))?;
        live.properties.insert(name.to_owned(), value);
        Ok(())
    }

    fn start_system_move(&mut self) -> bool {
        self.move_requests += 1;
        self.accept_gestures
    }

    fn start_system_resize(&mut self, edge: Edge) -> bool {
        self.resize_requests.push(edge);
        self.accept_gestures
    }
}
