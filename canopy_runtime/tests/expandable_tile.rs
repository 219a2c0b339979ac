// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenario: an expandable tile component.
//!
//! The tile declares a reflected `expanded` flag, a numeric `max_height`,
//! and a color scheme enum. Clicking the host toggles `expanded` through a
//! gated transition; a keydown binding shares the same handler path. The
//! post-render hook measures the rendered body and reflects the measured
//! height, the way a real embedder would after layout.

use std::rc::Rc;

use canopy_capability::{DelegatesFocus, HostListener};
use canopy_property::{PropertyDescriptor, PropertyValues, Schema, Value};
use canopy_runtime::{ComponentDef, Element, Host, InstanceId, Runtime, View, ViewNode};
use canopy_transition::{Phase, TransitionEvent, TransitionKind, TransitionOutcome};

const TOGGLE: TransitionKind = TransitionKind {
    before: "tile-beingtoggled",
    after: "tile-toggled",
};

const SCHEMES: &[&str] = &["regular", "light"];

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Handler {
    Toggle,
}

/// Everything the runtime did to the embedder, in order.
#[derive(Debug, PartialEq)]
enum Op {
    SetAttr(InstanceId, String, String),
    RemoveAttr(InstanceId, String),
    AddListener(InstanceId, &'static str, Handler),
    RemoveListener(InstanceId, &'static str, Handler),
    Delegate(InstanceId, bool),
    Event(InstanceId, &'static str, Phase, bool, bool),
    RequestFlush,
    Present(InstanceId),
}

#[derive(Default)]
struct Embedder {
    ops: Vec<Op>,
    views: Vec<(InstanceId, View)>,
    veto_next_before: bool,
}

impl Host<Handler> for Embedder {
    fn set_attribute(&mut self, id: InstanceId, name: &str, value: &str) {
        self.ops.push(Op::SetAttr(id, name.into(), value.into()));
    }

    fn remove_attribute(&mut self, id: InstanceId, name: &str) {
        self.ops.push(Op::RemoveAttr(id, name.into()));
    }

    fn add_host_listener(&mut self, id: InstanceId, event: &'static str, handler: Handler) {
        self.ops.push(Op::AddListener(id, event, handler));
    }

    fn remove_host_listener(&mut self, id: InstanceId, event: &'static str, handler: Handler) {
        self.ops.push(Op::RemoveListener(id, event, handler));
    }

    fn set_focus_delegation(&mut self, id: InstanceId, delegate: bool) {
        self.ops.push(Op::Delegate(id, delegate));
    }

    fn dispatch(&mut self, id: InstanceId, event: &mut TransitionEvent<Value>) {
        let canceled = if event.phase() == Phase::Before && self.veto_next_before {
            self.veto_next_before = false;
            event.cancel()
        } else {
            false
        };
        self.ops.push(Op::Event(
            id,
            event.event_type(),
            event.phase(),
            event.cancelable(),
            canceled,
        ));
    }

    fn request_flush(&mut self) {
        self.ops.push(Op::RequestFlush);
    }

    fn present(&mut self, id: InstanceId, view: View) {
        self.ops.push(Op::Present(id));
        self.views.push((id, view));
    }
}

impl Embedder {
    fn flush_requests(&self) -> usize {
        self.ops.iter().filter(|o| **o == Op::RequestFlush).count()
    }

    fn events(&self) -> Vec<(&'static str, Phase, bool)> {
        self.ops
            .iter()
            .filter_map(|o| match o {
                Op::Event(_, name, phase, _, canceled) => Some((*name, *phase, *canceled)),
                _ => None,
            })
            .collect()
    }
}

fn render_tile(values: &PropertyValues, schema: &Schema) -> View {
    let expanded = schema.by_name("expanded").is_some_and(|p| values.bool(p));
    let scheme = schema
        .by_name("color_scheme")
        .map_or("regular", |p| values.tag(p));
    View::new().child(
        Element::new("div")
            .attr("part", "tile")
            .attr("data-scheme", scheme)
            .flag("expanded", expanded)
            .child(Element::new("slot"))
            .child(
                Element::new("button")
                    .attr("part", "toggle")
                    .child(if expanded { "Show less" } else { "Show more" }),
            ),
    )
}

/// Stand-in for measuring the rendered body after layout.
fn measure_body(
    id: InstanceId,
    changed: &[canopy_property::PropertyId],
    values: &PropertyValues,
    host: &mut dyn Host<Handler>,
) {
    let _ = changed;
    let _ = values;
    host.set_attribute(id, "data-measured-height", "240");
}

fn on_tile_event(
    runtime: &mut Runtime<Handler>,
    id: InstanceId,
    handler: Handler,
    host: &mut dyn Host<Handler>,
) {
    match handler {
        Handler::Toggle => {
            let Some(def) = runtime.definition(id) else {
                return;
            };
            let Some(expanded) = def.schema().by_name("expanded") else {
                return;
            };
            let current = runtime.values(id).is_some_and(|v| v.bool(expanded));
            let _ = runtime.transition(id, expanded, TOGGLE, Value::Bool(!current), host);
        }
    }
}

fn tile_def() -> Rc<ComponentDef<Handler>> {
    let mut schema = Schema::new();
    schema
        .declare(PropertyDescriptor::bool("expanded").reflect(true))
        .unwrap();
    schema
        .declare(PropertyDescriptor::number("max_height", 10.0).attribute("max-height"))
        .unwrap();
    schema
        .declare(
            PropertyDescriptor::tag("color_scheme", SCHEMES, "regular")
                .attribute("color-scheme")
                .reflect(true),
        )
        .unwrap();
    Rc::new(
        ComponentDef::new(schema, render_tile)
            .with_capability(DelegatesFocus::new())
            .with_capability(HostListener::new("click", Handler::Toggle))
            .with_capability(HostListener::new("keydown", Handler::Toggle))
            .on_updated(measure_body)
            .on_host_event(on_tile_event),
    )
}

#[test]
fn click_toggles_through_the_gate() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let def = tile_def();
    let expanded = def.schema().by_name("expanded").unwrap();
    let id = runtime.attach(def, &[], &mut host);
    runtime.flush(&mut host);
    host.ops.clear();

    runtime.deliver(id, "click", &mut host);

    // Exactly one cancelable before and one non-cancelable after, same
    // proposed detail on both.
    assert_eq!(
        host.events(),
        vec![
            ("tile-beingtoggled", Phase::Before, false),
            ("tile-toggled", Phase::After, false),
        ]
    );
    assert!(runtime.values(id).unwrap().bool(expanded));
    // The commit reflected the flag onto the host element.
    assert!(
        host.ops
            .contains(&Op::SetAttr(id, "expanded".into(), String::new()))
    );

    runtime.flush(&mut host);
    let view = &host.views.last().unwrap().1;
    let ViewNode::Element(tile) = &view.nodes()[0] else {
        panic!("expected tile element");
    };
    assert_eq!(tile.attribute("expanded"), Some(""));
}

#[test]
fn veto_leaves_state_attribute_and_schedule_untouched() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let def = tile_def();
    let expanded = def.schema().by_name("expanded").unwrap();
    let id = runtime.attach(def, &[], &mut host);
    runtime.flush(&mut host);
    host.ops.clear();

    host.veto_next_before = true;
    runtime.deliver(id, "click", &mut host);

    assert_eq!(
        host.events(),
        vec![("tile-beingtoggled", Phase::Before, true)]
    );
    assert!(!runtime.values(id).unwrap().bool(expanded));
    assert_eq!(host.flush_requests(), 0);
    assert!(!host.ops.iter().any(|o| matches!(o, Op::SetAttr(..))));

    // A later, uncanceled toggle goes through normally.
    runtime.deliver(id, "click", &mut host);
    assert!(runtime.values(id).unwrap().bool(expanded));
}

#[test]
fn unparsable_numeric_attribute_falls_back_to_default() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let def = tile_def();
    let max_height = def.schema().by_name("max_height").unwrap();
    let id = runtime.attach(def.clone(), &[("max-height", "300")], &mut host);
    assert_eq!(runtime.values(id).unwrap().number(max_height), 300.0);

    runtime.attribute_changed(id, "max-height", Some("abc"), &mut host);
    assert_eq!(runtime.values(id).unwrap().number(max_height), 10.0);

    // Attribute removal also lands on the default.
    runtime.attribute_changed(id, "max-height", Some("120"), &mut host);
    runtime.attribute_changed(id, "max-height", None, &mut host);
    assert_eq!(runtime.values(id).unwrap().number(max_height), 10.0);
}

#[test]
fn unknown_enum_attribute_keeps_default_tag() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let def = tile_def();
    let scheme = def.schema().by_name("color_scheme").unwrap();
    let id = runtime.attach(def, &[("color-scheme", "neon")], &mut host);
    assert_eq!(runtime.values(id).unwrap().tag(scheme), "regular");

    runtime.attribute_changed(id, "color-scheme", Some("light"), &mut host);
    assert_eq!(runtime.values(id).unwrap().tag(scheme), "light");
}

#[test]
fn detach_releases_every_binding_and_silences_delivery() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let def = tile_def();
    let expanded = def.schema().by_name("expanded").unwrap();
    let id = runtime.attach(def, &[], &mut host);

    let added: Vec<_> = host
        .ops
        .iter()
        .filter(|o| matches!(o, Op::AddListener(..)))
        .collect();
    assert_eq!(added.len(), 2);
    host.ops.clear();

    runtime.detach(id, &mut host);
    let removed: Vec<_> = host
        .ops
        .iter()
        .filter_map(|o| match o {
            Op::RemoveListener(_, event, handler) => Some((*event, *handler)),
            _ => None,
        })
        .collect();
    // Reverse declaration order, both bindings gone.
    assert_eq!(
        removed,
        vec![("keydown", Handler::Toggle), ("click", Handler::Toggle)]
    );
    assert!(host.ops.contains(&Op::Delegate(id, false)));

    // Delivery after detach is a no-op.
    host.ops.clear();
    runtime.deliver(id, "click", &mut host);
    assert!(host.ops.is_empty());
    assert!(runtime.values(id).is_none());
    let _ = expanded;
}

#[test]
fn burst_of_writes_renders_once_with_latest_values() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let def = tile_def();
    let expanded = def.schema().by_name("expanded").unwrap();
    let max_height = def.schema().by_name("max_height").unwrap();
    let id = runtime.attach(def, &[], &mut host);
    runtime.flush(&mut host);
    host.ops.clear();
    host.views.clear();

    runtime.write(id, expanded, Value::Bool(true), &mut host).unwrap();
    runtime
        .write(id, max_height, Value::Number(480.0), &mut host)
        .unwrap();
    runtime.write(id, expanded, Value::Bool(false), &mut host).unwrap();
    assert_eq!(host.flush_requests(), 1);

    runtime.flush(&mut host);
    assert_eq!(host.views.len(), 1);
    let ViewNode::Element(tile) = &host.views[0].1.nodes()[0] else {
        panic!("expected tile element");
    };
    assert_eq!(tile.attribute("expanded"), None);
    assert_eq!(runtime.values(id).unwrap().number(max_height), 480.0);
}

#[test]
fn post_render_hook_runs_after_present_with_host_access() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let id = runtime.attach(tile_def(), &[], &mut host);
    runtime.flush(&mut host);

    let present_at = host
        .ops
        .iter()
        .position(|o| *o == Op::Present(id))
        .expect("view presented");
    let measured_at = host
        .ops
        .iter()
        .position(|o| *o == Op::SetAttr(id, "data-measured-height".into(), "240".into()))
        .expect("hook reflected measurement");
    assert!(measured_at > present_at);
}

#[test]
fn focus_delegation_is_enabled_on_attach() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let id = runtime.attach(tile_def(), &[], &mut host);
    assert!(host.ops.contains(&Op::Delegate(id, true)));
}

#[test]
fn notification_events_do_not_gate_anything() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let id = runtime.attach(tile_def(), &[], &mut host);
    host.ops.clear();

    // Even with the veto flag armed, a notification cannot be canceled.
    host.veto_next_before = true;
    runtime.emit(id, "tile-selection-changed", Value::Number(3.0), &mut host);
    assert_eq!(
        host.events(),
        vec![("tile-selection-changed", Phase::After, false)]
    );
    assert_eq!(host.flush_requests(), 0);

    // Emitting from a detached instance is dropped.
    runtime.detach(id, &mut host);
    host.ops.clear();
    runtime.emit(id, "tile-selection-changed", Value::Number(4.0), &mut host);
    assert!(host.events().is_empty());
}

#[test]
fn two_instances_schedule_and_render_independently() {
    let mut runtime = Runtime::new();
    let mut host = Embedder::default();
    let def = tile_def();
    let expanded = def.schema().by_name("expanded").unwrap();
    let a = runtime.attach(def.clone(), &[], &mut host);
    let b = runtime.attach(def, &[("expanded", "")], &mut host);
    assert_eq!(host.flush_requests(), 1);

    runtime.flush(&mut host);
    let presented: Vec<_> = host.views.iter().map(|(id, _)| *id).collect();
    assert_eq!(presented, vec![a, b]);

    assert!(!runtime.values(a).unwrap().bool(expanded));
    assert!(runtime.values(b).unwrap().bool(expanded));
}
