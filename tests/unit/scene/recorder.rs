use super::*;
use crate::{foundation::core::Affine, render::recording::ContextLog};

#[test]
fn draws_snapshot_then_take_drains() {
    let log = ContextLog::new();
    let base = log.base_context(BlendMode::Normal);
    let recorder = DrawRecorder::new();
    let parent = Affine::translate((1.0, 2.0));

    SceneItem::new("a", BlendMode::Normal)
        .render(&recorder, &base, &Camera::new(4, Affine::IDENTITY), Some(&parent))
        .unwrap();

    let snapshot = recorder.draws();
    assert_eq!(
        snapshot,
        vec![DrawRecord {
            item: "a".to_string(),
            context: base.id(),
            blend: BlendMode::Normal,
            camera: 4,
            nested: true,
        }]
    );
    assert_eq!(recorder.draws(), snapshot);

    assert_eq!(recorder.take(), snapshot);
    assert!(recorder.draws().is_empty());
}

#[test]
fn mismatched_context_blend_is_a_draw_error() {
    let log = ContextLog::new();
    let base = log.base_context(BlendMode::Normal);
    let recorder = DrawRecorder::new();

    let err = SceneItem::new("glow", BlendMode::Add)
        .render(&recorder, &base, &Camera::default(), None)
        .unwrap_err();

    assert!(matches!(err, ListcompError::Draw(_)));
    assert!(recorder.draws().is_empty());
}
