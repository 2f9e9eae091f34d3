//! Tests for point lookups and typed access.

use ctxmap::{CtxMap, Value, map::MapError, value::ValueError};

use crate::helpers::*;

#[test]
fn test_typed_access() -> ctxmap::Result<()> {
    let map = setup_solver_map();

    assert_eq!(map.at::<String>("solver/method")?, "cg");
    assert_eq!(map.at::<i64>("solver/max_iter")?, 100);
    assert_eq!(map.at::<f64>("solver/tolerance")?, 1e-8);
    assert!(map.at::<bool>("output/verbose")?);
    assert_eq!(map.type_name_of("solver/method")?, "text");
    Ok(())
}

#[test]
fn test_missing_key_is_not_found() {
    let map = setup_abx_map();

    let err = map.at::<i64>("missing").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "map");
    assert!(matches!(
        err,
        ctxmap::Error::Map(MapError::KeyNotFound { ref key }) if key == "/missing"
    ));
}

#[test]
fn test_wrong_type_is_type_error() {
    let map = setup_abx_map();

    let err = map.at::<String>("a").unwrap_err();
    assert!(err.is_type_error());
    assert!(matches!(
        err,
        ctxmap::Error::Value(ValueError::TypeMismatch {
            expected: "text",
            actual: "int"
        })
    ));
}

#[test]
fn test_at_or_defaults_only_missing_keys() -> ctxmap::Result<()> {
    let map = setup_abx_map();

    assert_eq!(map.at_or("missing", 5i64)?, 5);
    assert_eq!(map.at_or("a", 5i64)?, 1);
    assert!(map.at_or("a", String::new()).unwrap_err().is_type_error());
    Ok(())
}

#[test]
fn test_value_raw_and_get_cloned() -> ctxmap::Result<()> {
    let map = setup_abx_map();

    assert_eq!(*map.value_raw("a/x")?, Value::Int(3));
    assert_eq!(map.get_cloned("b")?, Value::Int(2));
    assert!(map.value_raw("zz").unwrap_err().is_not_found());
    Ok(())
}

#[test]
fn test_exists_is_relative_to_location() -> ctxmap::Result<()> {
    let map = setup_abx_map();
    let view = map.view("a")?;

    assert!(view.exists("x")?);
    assert!(view.exists("")?);
    assert!(!view.exists("b")?);
    Ok(())
}

#[test]
fn test_custom_value_type() -> ctxmap::Result<()> {
    let mut map: CtxMap<u32> = CtxMap::default();
    map.insert("a", 1u32)?;
    map.insert("a/b", 2u32)?;

    let view = map.view("a")?;
    assert_eq!(*view.value_raw("b")?, 2);
    assert_eq!(view.clone().keys(), vec!["", "b"]);
    Ok(())
}
