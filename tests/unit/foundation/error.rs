use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ListcompError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ListcompError::draw("x").to_string().contains("draw error:"));
    assert!(
        ListcompError::context("x")
            .to_string()
            .contains("context error:")
    );
    assert!(
        ListcompError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ListcompError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
