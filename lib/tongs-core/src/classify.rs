//! Parameter classification.
//!
//! Turns endpoint-level static parameters and call-time arguments into
//! [`ClassifiedParams`], applying each parameter's honored role marker
//! and converter.

use serde_json::Value;
use tracing::{debug, warn};

use crate::{Arg, Bindings, ClassifiedParams, Param, ParamConverter, StaticParam};

/// Classify static parameters, then call arguments.
///
/// `params` and `args` are paired positionally; the caller guarantees
/// both have the same length.
#[must_use]
pub fn classify(statics: &[StaticParam], params: &[Param], args: &[Arg]) -> ClassifiedParams {
    let mut classified = ClassifiedParams::default();

    for static_param in statics {
        bind(&mut classified, static_param.param(), static_param.value());
    }
    for (param, arg) in params.iter().zip(args) {
        bind(&mut classified, param, arg);
    }

    classified
}

fn bind(classified: &mut ClassifiedParams, param: &Param, arg: &Arg) {
    let Some(marker) = param.marker() else {
        debug!("skipping parameter without role marker");
        return;
    };
    let bindings = classified.for_role_mut(marker.role());
    let converter = marker.converter();

    match arg {
        Arg::Null => {}
        Arg::Invalid(message) => {
            warn!(
                param = marker.name(),
                role = %marker.role(),
                error = %message,
                "dropping binding: argument could not be captured"
            );
        }
        Arg::Value(value) => push(bindings, marker.name(), converter, value),
        Arg::Seq(values) => {
            for value in values.iter().filter(|value| !value.is_null()) {
                push(bindings, marker.name(), converter, value);
            }
        }
        Arg::Map(entries) => {
            for (key, value) in entries.iter().filter(|(_, value)| !value.is_null()) {
                push(bindings, key, converter, value);
            }
        }
    }
}

fn push(bindings: &mut Bindings, name: &str, converter: &dyn ParamConverter, value: &Value) {
    match converter.convert(value) {
        Ok(text) => bindings.insert(name, text),
        Err(err) => {
            warn!(
                param = name,
                converter = converter.name(),
                error = %err,
                "dropping binding: conversion failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::{Error, JsonConverter, Role};

    #[test]
    fn static_params_come_first() {
        let statics = [StaticParam::query("token", "accepted")];
        let params = [Param::query("q")];
        let classified = classify(&statics, &params, &[Arg::from("rust")]);

        assert_eq!(
            classified.query.iter().collect::<Vec<_>>(),
            [("token", "accepted"), ("q", "rust")]
        );
    }

    #[test]
    fn null_binds_nothing() {
        let params = [Param::query("q"), Param::header("X-Id")];
        let classified = classify(&[], &params, &[Arg::Null, Arg::from(None::<u32>)]);
        assert!(classified.query.is_empty());
        assert!(classified.header.is_empty());
    }

    #[test]
    fn sequence_fans_out_under_declared_name() {
        let params = [Param::query("tag")];
        let classified = classify(&[], &params, &[Arg::from(vec!["a", "b"])]);
        assert_eq!(classified.query.get_all("tag").collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn map_fans_out_under_entry_keys() {
        let params = [Param::header("ignored")];
        let headers = BTreeMap::from([("X-A", "1"), ("X-B", "2")]);
        let classified = classify(&[], &params, &[Arg::map(headers)]);

        assert!(!classified.header.contains("ignored"));
        assert_eq!(classified.header.get("X-A"), Some("1"));
        assert_eq!(classified.header.get("X-B"), Some("2"));
    }

    #[test]
    fn map_values_use_declared_converter() {
        let params = [Param::body("ignored").with_converter(JsonConverter)];
        let classified = classify(&[], &params, &[Arg::map([("payload", json!({"a": 1}))])]);
        assert_eq!(classified.body.get("payload"), Some(r#"{"a":1}"#));
    }

    #[test]
    fn unmarked_params_are_skipped() {
        let params = [Param::unmarked(), Param::path("id")];
        let classified = classify(&[], &params, &[Arg::from("x"), Arg::from(3)]);
        assert_eq!(classified.path.iter().collect::<Vec<_>>(), [("id", "3")]);
    }

    #[test]
    fn only_first_marker_applies() {
        let params = [Param::query("q").with_marker(Role::Header, "X-Q")];
        let classified = classify(&[], &params, &[Arg::from("v")]);
        assert_eq!(classified.query.get("q"), Some("v"));
        assert!(classified.header.is_empty());
    }

    #[test]
    fn failing_converter_drops_binding() {
        let failing = |_: &Value| -> crate::Result<String> { Err(Error::conversion("q", "boom")) };
        let params = [Param::query("q").with_converter(failing), Param::query("r")];
        let classified = classify(&[], &params, &[Arg::from(1), Arg::from(2)]);
        assert_eq!(classified.query.iter().collect::<Vec<_>>(), [("r", "2")]);
    }
}
