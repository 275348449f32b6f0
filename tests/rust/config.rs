use std::collections::HashMap;

use ib_bridge::core::config::{
    BridgeConfig, InitFailurePolicy, DEFAULT_LOG_FILTER, DEFAULT_MAX_RESULTS, ENV_INIT_FAILURE,
    ENV_LOG_FILTER, ENV_MAX_RESULTS,
};
use ib_bridge::core::errors::CoreError;
use rstest::rstest;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = BridgeConfig::from_lookup(lookup(&[])).expect("defaults are valid");
    assert_eq!(config, BridgeConfig::default());
    assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(config.init_failure, InitFailurePolicy::Abort);
}

#[test]
fn environment_values_override_defaults() {
    let config = BridgeConfig::from_lookup(lookup(&[
        (ENV_MAX_RESULTS, " 5 "),
        (ENV_LOG_FILTER, "ib_bridge=debug"),
        (ENV_INIT_FAILURE, "Reset"),
    ]))
    .expect("valid config");

    assert_eq!(config.max_results, 5);
    assert_eq!(config.log_filter, "ib_bridge=debug");
    assert_eq!(config.init_failure, InitFailurePolicy::Reset);
}

#[test]
fn blank_log_filter_keeps_default() {
    let config = BridgeConfig::from_lookup(lookup(&[(ENV_LOG_FILTER, "  ")])).expect("valid");
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
}

#[rstest]
#[case(ENV_MAX_RESULTS, "many")]
#[case(ENV_MAX_RESULTS, "0")]
#[case(ENV_MAX_RESULTS, "-3")]
#[case(ENV_INIT_FAILURE, "ignore")]
fn invalid_values_are_config_errors(#[case] key: &str, #[case] value: &str) {
    let result = BridgeConfig::from_lookup(lookup(&[(key, value)]));
    assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
}

#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let config = BridgeConfig::from_json(r#"{"max_results": 3}"#).expect("valid json");
    assert_eq!(config.max_results, 3);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(config.init_failure, InitFailurePolicy::Abort);

    let config = BridgeConfig::from_json(r#"{"init_failure": "reset"}"#).expect("valid json");
    assert_eq!(config.init_failure, InitFailurePolicy::Reset);
}

#[rstest]
#[case(r#"{"max_results": 0}"#)]
#[case(r#"{"init_failure": "explode"}"#)]
#[case(r#"{"log_filter": ""}"#)]
#[case("not json")]
fn invalid_json_config_is_rejected(#[case] raw: &str) {
    assert!(matches!(
        BridgeConfig::from_json(raw),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn largest_max_results_is_accepted() {
    let config = BridgeConfig::from_lookup(lookup(&[(ENV_MAX_RESULTS, "18446744073709551615")]))
        .expect("valid config");
    assert_eq!(config.max_results, usize::MAX);
}

#[rstest]
#[case(&[(ENV_LOG_FILTER, "ib_bridge=debug"), (ENV_MAX_RESULTS, "zero")], "ib_bridge=debug")]
#[case(&[(ENV_LOG_FILTER, "  "), (ENV_INIT_FAILURE, "ignore")], DEFAULT_LOG_FILTER)]
#[case(&[], DEFAULT_LOG_FILTER)]
fn log_filter_resolves_even_when_other_values_are_invalid(
    #[case] pairs: &[(&str, &str)],
    #[case] expected: &str,
) {
    assert_eq!(BridgeConfig::log_filter_from_lookup(lookup(pairs)), expected);
}
