//! Configuration tests

use pipeq::prelude::*;

#[test]
fn test_config_json_round_trip() {
    let cfg = QueryConfig::default()
        .with_set_order(SetOrder::FirstSeen)
        .with_stable_sort(false);
    let json = serde_json::to_string(&cfg).expect("serialize config");
    assert!(json.contains("\"first_seen\""));
    let back = QueryConfig::from_json(&json).expect("parse config");
    assert_eq!(back, cfg);
}

#[test]
fn test_config_partial_json_keeps_defaults() {
    let cfg = QueryConfig::from_json(r#"{"set_order":"first_seen"}"#).unwrap();
    assert_eq!(cfg.set_order, SetOrder::FirstSeen);
    assert!(cfg.stable_sort);

    assert!(QueryConfig::from_json(r#"{"set_order":"sorted"}"#).is_err());
}

#[test]
fn test_stable_sort_keeps_ties_in_source_order() {
    let rows = vec![("b", 1), ("a", 0), ("c", 1), ("d", 0)];
    let out = Query::new(rows)
        .with_config(QueryConfig::default().with_stable_sort(true))
        .order_by(|x, y| x.1 < y.1)
        .select(|r| Ok(r.0))
        .results()
        .unwrap();
    assert_eq!(out, vec!["a", "d", "b", "c"]);
}

#[test]
fn test_unstable_sort_still_orders_keys() {
    let out = Query::new(vec![5, 1, 4, 1, 3])
        .with_config(QueryConfig::default().with_stable_sort(false))
        .order_by(|a, b| a < b)
        .results()
        .unwrap();
    assert_eq!(out, vec![1, 1, 3, 4, 5]);
}

#[test]
fn test_config_from_env() {
    std::env::set_var("PIPEQ_SET_ORDER", "first_seen");
    std::env::set_var("PIPEQ_STABLE_SORT", "0");
    let cfg = QueryConfig::from_env();
    assert_eq!(cfg.set_order, SetOrder::FirstSeen);
    assert!(!cfg.stable_sort);

    // Unparsable values keep the defaults.
    std::env::set_var("PIPEQ_SET_ORDER", "sorted");
    std::env::set_var("PIPEQ_STABLE_SORT", "bogus");
    let cfg = QueryConfig::from_env();
    assert_eq!(cfg, QueryConfig::default());

    std::env::set_var("PIPEQ_SET_ORDER", "first_seen");
    let cfg = QueryConfig::from_env();
    assert_eq!(cfg.set_order, SetOrder::FirstSeen);
    assert!(cfg.stable_sort);

    std::env::remove_var("PIPEQ_SET_ORDER");
    std::env::remove_var("PIPEQ_STABLE_SORT");
    assert_eq!(QueryConfig::from_env(), QueryConfig::default());
}
