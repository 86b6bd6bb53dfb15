//! Binder: attaches declared nodes to live objects and wires connections.

use slotmap::SecondaryMap;

use crate::compose::{Composition, NodeId};
use crate::elements::{ElementKind, FRAME_OBJECT_NAME};
use crate::event::{Connections, EventKind, Signal, Slot};
use crate::live::{Host, LiveId};
use crate::style::properties::is_styled;

/// Errors from reaching the live object behind a declared node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("`{name}` has no live object")]
    UnboundNode { name: String },
    #[error("node does not exist in this composition")]
    UnknownNode,
}

/// Pointer signals that drive the default style transitions.
const STYLE_SIGNALS: [Signal; 3] = [Signal::HoverChanged, Signal::Pressed, Signal::Released];

/// The outcome of one binding pass.
#[derive(Debug, Default)]
pub struct Binding {
    bound: usize,
    unbound: Vec<NodeId>,
    connections: Connections,
    frame: Option<LiveId>,
    styled: Vec<(LiveId, ElementKind)>,
    primary: SecondaryMap<NodeId, EventKind>,
}

impl Binding {
    /// Number of nodes that found their live object, the root included.
    pub fn bound_count(&self) -> usize {
        self.bound
    }

    /// Named nodes left without a live object, depth-first.
    pub fn unbound(&self) -> &[NodeId] {
        &self.unbound
    }

    /// Whether every named node found its live object.
    pub fn is_complete(&self) -> bool {
        self.unbound.is_empty()
    }

    /// The signal/slot table built during binding.
    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    /// Mutable access to the connection table, for wiring added after binding.
    pub fn connections_mut(&mut self) -> &mut Connections {
        &mut self.connections
    }

    /// The frame object (`mainRect`), if the host has one.
    pub fn frame(&self) -> Option<LiveId> {
        self.frame
    }

    /// Live elements the style machine restyles, in graph order.
    pub fn styled(&self) -> &[(LiveId, ElementKind)] {
        &self.styled
    }

    /// The callback kind occupying `node`'s primary interaction slot.
    pub fn primary(&self, node: NodeId) -> Option<EventKind> {
        self.primary.get(node).copied()
    }

    /// Wire one callback of a bound node into the connection table.
    pub(crate) fn wire_callback(&mut self, node: NodeId, live: LiveId, kind: EventKind) {
        self.connections
            .connect(live, kind.signal(), Slot::Callback { node, kind });
        match (self.primary.get(node).copied(), kind) {
            (_, EventKind::Press) | (None, EventKind::Hover) => {
                self.primary.insert(node, kind);
            }
            _ => {}
        }
    }

    fn track(&mut self, live: LiveId, kind: ElementKind) {
        if self.styled.iter().any(|&(object, _)| object == live) {
            return;
        }
        self.styled.push((live, kind));
        if kind.is_interactive() {
            for signal in STYLE_SIGNALS {
                self.connections.connect(live, signal, Slot::StyleTransition);
            }
        }
    }
}

/// Bind `composition` to the live graph of `host`.
///
/// Clears previous live handles first. Missing live objects are logged and
/// recorded, never fatal.
pub fn bind(composition: &mut Composition, host: &dyn Host) -> Binding {
    composition.clear_bindings();
    let mut binding = Binding::default();
    let Some(root) = composition.root() else {
        tracing::warn!("binding an empty composition");
        return binding;
    };

    let window = host.window();
    composition.set_live(root, window);
    binding.bound += 1;
    bind_children(composition, host, root, Some(window), &mut binding);

    binding.frame = host.find_child(window, FRAME_OBJECT_NAME);
    if binding.frame.is_none() {
        tracing::warn!("window has no `{}` frame object", FRAME_OBJECT_NAME);
    }

    // Default style wiring for every styled live element, named or not.
    let scope = binding.frame.unwrap_or(window);
    for object in host.descendants(scope) {
        match host.kind_of(object) {
            Some(kind) if kind != ElementKind::MainFrame && is_styled(kind) => {
                binding.track(object, kind)
            }
            _ => {}
        }
    }

    for node in composition.walk_depth_first(root) {
        let Some(data) = composition.get(node) else {
            continue;
        };
        let Some(live) = data.live() else {
            continue;
        };
        if data.kind.is_interactive() {
            binding.track(live, data.kind);
        }
        for kind in data.callbacks().kinds() {
            binding.wire_callback(node, live, kind);
        }
    }

    tracing::debug!(
        "bound {} of {} nodes, {} unbound, {} styled elements, {} connections",
        binding.bound,
        composition.len(),
        binding.unbound.len(),
        binding.styled.len(),
        binding.connections.len()
    );
    binding
}

/// Bind the children of `parent`, looked up inside `scope`. A missing scope
/// leaves every named child unbound.
fn bind_children(
    composition: &mut Composition,
    host: &dyn Host,
    parent: NodeId,
    scope: Option<LiveId>,
    binding: &mut Binding,
) {
    let children = composition.children(parent).to_vec();
    for child in children {
        let Some(data) = composition.get(child) else {
            continue;
        };
        let is_layout = data.is_layout();
        let name = data.name.clone();

        let child_scope = if !name.is_empty() {
            let live = scope.and_then(|scope| host.find_child(scope, &name));
            match live {
                Some(live) => {
                    tracing::trace!("bound `{}` to {:?}", name, live);
                    composition.set_live(child, live);
                    binding.bound += 1;
                }
                None => {
                    if scope.is_some() {
                        tracing::warn!("no live object named `{}`", name);
                    } else {
                        tracing::warn!("`{}` is inside an unbound layout", name);
                    }
                    binding.unbound.push(child);
                }
            }
            live
        } else {
            // Unnamed layouts are transparent: their children are looked up
            // in the enclosing scope.
            scope
        };

        if is_layout {
            bind_children(composition, host, child, child_scope, binding);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Button, Label, MainFrame, Row, ScrollBox};
    use crate::event::callback;
    use crate::markup::compile;
    use crate::testing::HeadlessHost;

    fn compiled(ui: &Composition) -> HeadlessHost {
        HeadlessHost::from_markup(&compile(ui).unwrap())
    }

    // ── Name resolution ───────────────────────────────────────────────

    #[test]
    fn binds_every_named_node() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let row = ui.add(root, "row", Row::new()).unwrap();
        let ok = ui.add(row, "ok", Button::new("OK")).unwrap();
        let title = ui.add(root, "title", Label::new("Hi")).unwrap();
        let host = compiled(&ui);

        let binding = bind(&mut ui, &host);
        assert_eq!(binding.bound_count(), 4);
        assert!(binding.is_complete());
        assert_eq!(ui.live(root), Ok(host.window()));
        assert_eq!(ui.live(ok).ok(), host.find("ok"));
        assert_eq!(ui.live(title).ok(), host.find("title"));
        assert_eq!(binding.frame(), host.find(FRAME_OBJECT_NAME));
    }

    #[test]
    fn missing_object_is_recorded_not_fatal() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let row = ui.add(root, "row", Row::new()).unwrap();
        let ok = ui.add(row, "ok", Button::new("OK")).unwrap();
        let cancel = ui.add(row, "cancel", Button::new("Cancel")).unwrap();
        let mut host = compiled(&ui);
        let gone = host.find("cancel").unwrap();
        host.remove(gone);

        let binding = bind(&mut ui, &host);
        assert_eq!(binding.unbound(), &[cancel]);
        assert!(ui.live(ok).is_ok());
        assert_eq!(
            ui.live(cancel),
            Err(BindError::UnboundNode {
                name: "cancel".into()
            })
        );
    }

    #[test]
    fn unbound_layout_leaves_descendants_unbound() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let row = ui.add(root, "row", Row::new()).unwrap();
        let ok = ui.add(row, "ok", Button::new("OK")).unwrap();
        let mut host = compiled(&ui);
        let live_row = host.find("row").unwrap();
        host.remove(live_row);

        let binding = bind(&mut ui, &host);
        assert_eq!(binding.unbound(), &[row, ok]);
    }

    #[test]
    fn scoped_lookup_separates_equal_names() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let first = ui.add(root, "first", ScrollBox::new()).unwrap();
        let second = ui.add(root, "second", ScrollBox::new()).unwrap();
        let a = ui.add(first, "item", Label::new("A")).unwrap();
        let b = ui.add(second, "item", Label::new("B")).unwrap();
        let host = compiled(&ui);

        bind(&mut ui, &host);
        let live_a = ui.live(a).unwrap();
        let live_b = ui.live(b).unwrap();
        assert_ne!(live_a, live_b);
        assert_eq!(host.property(live_b, "text"), Some("B".into()));
    }

    #[test]
    fn unnamed_layout_is_transparent() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let row = ui.add(root, "", Row::new()).unwrap();
        let ok = ui.add(row, "ok", Button::new("OK")).unwrap();
        let host = compiled(&ui);

        let binding = bind(&mut ui, &host);
        assert!(binding.is_complete());
        assert!(ui.live(ok).is_ok());
        assert!(ui.live(row).is_err());
    }

    #[test]
    fn rebinding_starts_clean() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        ui.add(root, "ok", Button::new("OK")).unwrap();
        let host = compiled(&ui);
        let first = bind(&mut ui, &host);
        let second = bind(&mut ui, &host);
        assert_eq!(first.bound_count(), second.bound_count());
    }

    #[test]
    fn empty_composition_binds_nothing() {
        let mut ui = Composition::new();
        let host = HeadlessHost::from_markup("");
        let binding = bind(&mut ui, &host);
        assert_eq!(binding.bound_count(), 0);
        assert!(binding.connections().is_empty());
    }

    // ── Wiring ────────────────────────────────────────────────────────

    #[test]
    fn every_button_gets_style_transitions() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        ui.add(root, "named", Button::new("A")).unwrap();
        ui.add(root, "", Button::new("B")).unwrap();
        ui.add(root, "title", Label::new("T")).unwrap();
        let host = compiled(&ui);

        let binding = bind(&mut ui, &host);
        let buttons: Vec<LiveId> = binding
            .styled()
            .iter()
            .filter(|(_, kind)| *kind == ElementKind::Button)
            .map(|(live, _)| *live)
            .collect();
        assert_eq!(buttons.len(), 2);
        for live in buttons {
            for signal in STYLE_SIGNALS {
                assert_eq!(binding.connections().slots(live, signal), vec![Slot::StyleTransition]);
            }
        }
        let label = host.find("title").unwrap();
        assert!(binding.styled().contains(&(label, ElementKind::Label)));
        assert!(!binding.connections().is_connected(label, Signal::HoverChanged));
    }

    #[test]
    fn callbacks_wired_to_their_signals() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let ok = ui
            .add(
                root,
                "ok",
                Button::new("OK")
                    .on_click(|_| Ok(()))
                    .on_press(|_| Ok(()))
                    .on_hover(|_| Ok(())),
            )
            .unwrap();
        let host = compiled(&ui);

        let binding = bind(&mut ui, &host);
        let live = ui.live(ok).unwrap();
        assert_eq!(
            binding.connections().slots(live, Signal::Activated),
            vec![
                Slot::Callback { node: ok, kind: EventKind::Press },
                Slot::Callback { node: ok, kind: EventKind::Click },
            ]
        );
        assert_eq!(
            binding.connections().slots(live, Signal::HoverChanged),
            vec![
                Slot::StyleTransition,
                Slot::Callback { node: ok, kind: EventKind::Hover },
            ]
        );
        assert_eq!(binding.primary(ok), Some(EventKind::Press));
    }

    #[test]
    fn hover_is_primary_without_press() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let ok = ui.add(root, "ok", Button::new("OK").on_hover(|_| Ok(()))).unwrap();
        let plain = ui.add(root, "plain", Button::new("Plain")).unwrap();
        let host = compiled(&ui);

        let binding = bind(&mut ui, &host);
        assert_eq!(binding.primary(ok), Some(EventKind::Hover));
        assert_eq!(binding.primary(plain), None);
        let live = ui.live(ok).unwrap();
        assert!(!binding.connections().is_connected(live, Signal::Activated));
    }

    #[test]
    fn callbacks_on_unbound_nodes_are_not_wired() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Test"));
        let ok = ui.add(root, "ok", Button::new("OK")).unwrap();
        let host = compiled(&ui);
        ui.connect(ok, EventKind::Press, callback(|_| Ok(()))).unwrap();
        let missing = ui
            .add(root, "ghost", Button::new("Ghost").on_press(|_| Ok(())))
            .unwrap();

        let binding = bind(&mut ui, &host);
        assert_eq!(binding.unbound(), &[missing]);
        assert_eq!(binding.primary(missing), None);
        assert_eq!(binding.primary(ok), Some(EventKind::Press));
    }
}
