use super::*;
use crate::{
    foundation::core::{Affine, Camera},
    render::blend::BlendMode,
    scene::model::SceneItem,
};

fn scene(items: &[(&str, BlendMode)]) -> SceneList {
    SceneList {
        base_blend: BlendMode::Normal,
        camera: Camera::new(9, Affine::IDENTITY),
        parent_transform: None,
        items: items
            .iter()
            .map(|(id, blend)| SceneItem::new(*id, *blend))
            .collect(),
    }
}

#[test]
fn report_collects_draws_calls_and_trace() {
    let s = scene(&[
        ("a", BlendMode::Normal),
        ("b", BlendMode::Add),
        ("c", BlendMode::Add),
        ("d", BlendMode::Normal),
    ]);
    let report = composite_scene(&s, NodeOpts { trace: true }).unwrap();

    assert_eq!(report.stats.drawables, 4);
    assert_eq!(report.stats.clones, 1);
    assert_eq!(report.stats.releases, 1);
    assert_eq!(report.trace.len(), 7);

    let ids = report
        .draws
        .iter()
        .map(|d| d.item.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
    assert!(report.draws.iter().all(|d| d.camera == 9 && !d.nested));
    assert_eq!(report.draws[1].blend, BlendMode::Add);

    // clone, set_blend_mode, use, release
    assert_eq!(report.calls.len(), 4);
}

#[test]
fn parent_transform_reaches_draws() {
    let mut s = scene(&[("a", BlendMode::Screen)]);
    s.parent_transform = Some(Affine::scale(2.0));
    let report = composite_scene(&s, NodeOpts::default()).unwrap();
    assert!(report.draws[0].nested);
    assert!(report.trace.is_empty());
}

#[test]
fn invalid_scene_is_rejected_before_drawing() {
    let s = scene(&[("a", BlendMode::Normal), ("a", BlendMode::Add)]);
    let err = composite_scene(&s, NodeOpts::default()).unwrap_err();
    assert!(err.to_string().contains("duplicate item id"));
}

#[test]
fn report_serializes_as_json() {
    let s = scene(&[("a", BlendMode::Erase)]);
    let report = composite_scene(&s, NodeOpts { trace: true }).unwrap();
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["stats"]["clones"], 1);
    assert_eq!(v["trace"][0]["event"], "clone");
    assert_eq!(v["trace"][0]["blend"], "erase");
    assert_eq!(v["calls"][0]["call"], "clone");
}
