use super::*;

#[test]
fn ids_are_allocated_in_order() {
    let log = ContextLog::new();
    let base = log.base_context(BlendMode::Normal);
    let a = base.get_clone();
    let b = a.get_clone();

    assert_eq!(base.id(), ContextId(0));
    assert_eq!(a.id(), ContextId(1));
    assert_eq!(b.id(), ContextId(2));
    assert_eq!(log.clone_count(), 2);
    assert_eq!(log.live_clones(), 2);

    a.release();
    b.release();
    log.check_balanced().unwrap();
}

#[test]
fn clone_copies_blend_mode() {
    let log = ContextLog::new();
    let base = log.base_context(BlendMode::Darken);
    let c = base.get_clone();
    assert_eq!(c.blend_mode(), BlendMode::Darken);
    c.release();
}

#[test]
fn releasing_base_is_a_violation() {
    let log = ContextLog::new();
    let base = log.base_context(BlendMode::Normal);
    base.release();

    assert_eq!(log.violations().len(), 1);
    let err = log.check_balanced().unwrap_err();
    assert!(err.to_string().contains("base context ctx0 released"));
}

#[test]
fn mutating_base_is_a_violation() {
    let log = ContextLog::new();
    let mut base = log.base_context(BlendMode::Normal);
    base.set_blend_mode(BlendMode::Add);

    assert!(log.violations()[0].contains("blend mode of base context"));
    assert!(log.check_balanced().is_err());
}

#[test]
fn live_clone_fails_balance_check() {
    let log = ContextLog::new();
    let base = log.base_context(BlendMode::Normal);
    let leaked = base.get_clone();

    let err = log.check_balanced().unwrap_err();
    assert!(err.to_string().contains("never released: ctx1"));

    leaked.release();
    log.check_balanced().unwrap();
}

#[test]
fn release_clears_current() {
    let log = ContextLog::new();
    let base = log.base_context(BlendMode::Normal);
    let mut c = base.get_clone();
    c.use_context();
    assert_eq!(log.current(), Some(c.id()));

    c.release();
    assert_eq!(log.current(), None);
    assert_eq!(log.use_count(), 1);
}

#[test]
fn calls_serialize_with_tag() {
    let call = ContextCall::Use { id: ContextId(4) };
    let json = serde_json::to_value(call).unwrap();
    assert_eq!(json, serde_json::json!({ "call": "use", "id": 4 }));
}
