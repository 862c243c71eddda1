use super::*;

const SCENE: &str = r#"
{
  "base_blend": "normal",
  "camera": { "id": 2 },
  "items": [
    { "id": "bg" },
    { "id": "glow", "blend": "add" },
    { "id": "shade", "blend": "multiply" }
  ]
}
"#;

#[test]
fn parses_items_with_default_blend() {
    let scene = SceneList::from_reader(SCENE.as_bytes()).unwrap();
    assert_eq!(scene.base_blend, BlendMode::Normal);
    assert_eq!(scene.camera.id, 2);
    assert!(scene.parent_transform.is_none());
    assert_eq!(
        scene.items,
        vec![
            SceneItem::new("bg", BlendMode::Normal),
            SceneItem::new("glow", BlendMode::Add),
            SceneItem::new("shade", BlendMode::Multiply),
        ]
    );
    scene.validate().unwrap();
}

#[test]
fn parent_transform_is_six_coefficients() {
    let json = r#"{ "parent_transform": [1.0, 0.0, 0.0, 1.0, 5.0, 6.0], "items": [] }"#;
    let scene = SceneList::from_reader(json.as_bytes()).unwrap();
    assert_eq!(
        scene.parent_transform,
        Some(TransformMatrix::translate((5.0, 6.0)))
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SceneList::from_reader("{ \"items\": 3 }".as_bytes()).unwrap_err();
    assert!(matches!(err, ListcompError::Serde(_)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut scene = SceneList::from_reader(SCENE.as_bytes()).unwrap();
    scene.items.push(SceneItem::new("glow", BlendMode::Screen));
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate item id 'glow'"));
}

#[test]
fn empty_ids_are_rejected() {
    let mut scene = SceneList::from_reader(SCENE.as_bytes()).unwrap();
    scene.items[1].id.clear();
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("item #1 has an empty id"));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = SceneList::from_path("target/does-not-exist/scene.json").unwrap_err();
    assert!(matches!(err, ListcompError::Validation(_)));
}
