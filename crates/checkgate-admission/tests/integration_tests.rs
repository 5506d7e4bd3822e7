//! Integration tests for country admission over inline configuration

use checkgate_admission::{is_admitted, AdmissionDecision, AdmissionPolicy, CountryFilter};
use checkgate_config::Configuration;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

const CHECK: &str = "BaseTestCheck";

/// Assert both the one-shot function and the resolved filter agree on `expected`
fn assert_admission(json: &str, country: &str, expected: bool) {
    let config = Configuration::from_json(json).unwrap();
    let check = config.for_check(CHECK);

    assert_eq!(is_admitted(&check, country), expected, "is_admitted({country}) for {json}");
    assert_eq!(
        CountryFilter::from_lookup(&check).is_admitted(country),
        expected,
        "CountryFilter::is_admitted({country}) for {json}"
    );
}

#[test]
fn test_no_countries() {
    assert_admission(r#"{}"#, "AIA", true);
    assert_admission(r#"{"BaseTestCheck": {}}"#, "AIA", true);
    assert_admission(r#"{"BaseTestCheck": {"countries.whitelist": []}}"#, "AIA", true);
}

#[test]
fn test_whitelist_countries() {
    let config = r#"{"BaseTestCheck": {"countries.whitelist": ["AIA", "DOM"]}}"#;
    assert_admission(config, "AIA", true);
    assert_admission(config, "DOM", true);
    assert_admission(config, "IRN", false);
}

#[test]
fn test_blacklist_countries() {
    let config = r#"{"BaseTestCheck": {"countries.blacklist": ["AIA", "DOM"]}}"#;
    assert_admission(config, "AIA", false);
    assert_admission(config, "DOM", false);
    assert_admission(config, "IRN", true);
}

#[test]
fn test_combination_countries() {
    let config = r#"{"BaseTestCheck": {
        "countries.whitelist": ["IRN", "IRQ"],
        "countries.blacklist": ["AIA", "DOM"]
    }}"#;
    assert_admission(config, "IRN", true);
    assert_admission(config, "IRQ", true);
    assert_admission(config, "AIA", false);
    assert_admission(config, "DOM", false);

    let overlapping = r#"{"BaseTestCheck": {
        "countries.whitelist": ["IRN"],
        "countries.blacklist": ["IRN"]
    }}"#;
    assert_admission(overlapping, "IRN", true);
}

#[test]
fn test_legacy_countries_key() {
    assert_admission(r#"{"BaseTestCheck": {"countries": []}}"#, "AIA", true);

    let legacy = r#"{"BaseTestCheck": {"countries": ["IRN"], "countries.blacklist": ["IRN"]}}"#;
    assert_admission(legacy, "IRN", true);
    assert_admission(legacy, "AIA", false);
}

#[test]
fn test_whitelist_key_preferred_over_legacy() {
    let config = r#"{"BaseTestCheck": {"countries.whitelist": ["DOM"], "countries": ["AIA"]}}"#;
    assert_admission(config, "DOM", true);
    assert_admission(config, "AIA", false);
}

#[test]
fn test_nested_keys() {
    let config = r#"{"BaseTestCheck": {"countries": {"blacklist": ["AIA"]}}}"#;
    assert_admission(config, "AIA", false);
    assert_admission(config, "IRN", true);
}

#[test]
fn test_other_checks_do_not_leak() {
    let config = r#"{"OtherCheck": {"countries.whitelist": ["AIA"]}}"#;
    assert_admission(config, "IRN", true);
}

#[test]
fn test_malformed_list_is_ignored() {
    let config = r#"{"BaseTestCheck": {
        "countries.whitelist": "AIA",
        "countries.blacklist": ["DOM"]
    }}"#;
    assert_admission(config, "IRN", true);
    assert_admission(config, "DOM", false);
}

#[test]
fn test_toml_configuration() {
    let config = Configuration::from_toml(
        r#"
        [BaseTestCheck]
        countries.whitelist = ["IRN", "IRQ"]
        countries.blacklist = ["IRN"]
        "#,
    )
    .unwrap();
    let filter = CountryFilter::from_lookup(&config.for_check(CHECK));

    assert_eq!(filter.decide("IRN"), AdmissionDecision::Whitelisted);
    assert_eq!(filter.decide("AIA"), AdmissionDecision::NotWhitelisted);
}

#[test]
fn test_shared_across_threads() {
    let config = Configuration::from_json(
        r#"{"BaseTestCheck": {"countries.blacklist": ["AIA", "DOM"]}}"#,
    )
    .unwrap();
    let policy: Arc<dyn AdmissionPolicy + Send + Sync> =
        Arc::new(CountryFilter::from_lookup(&config.for_check(CHECK)));

    let handles: Vec<_> = ["AIA", "DOM", "IRN", "IRQ"]
        .into_iter()
        .map(|country| {
            let policy = Arc::clone(&policy);
            std::thread::spawn(move || (country, policy.is_admitted(country)))
        })
        .collect();

    for handle in handles {
        let (country, admitted) = handle.join().unwrap();
        assert_eq!(admitted, country.starts_with('I'), "{country}");
    }
}

fn code() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["AIA", "DOM", "IRN", "IRQ", "aia", ""]).prop_map(String::from)
}

fn lists(entries: Vec<(&str, Vec<String>)>) -> HashMap<String, Vec<String>> {
    entries.into_iter().map(|(key, values)| (key.to_string(), values)).collect()
}

proptest! {
    /// Property: a non-empty whitelist alone decides, whatever the blacklist holds
    #[test]
    fn test_whitelist_decides(
        whitelist in prop::collection::vec(code(), 1..4),
        blacklist in prop::collection::vec(code(), 0..4),
        country in code(),
    ) {
        let config = lists(vec![
            ("countries.whitelist", whitelist.clone()),
            ("countries.blacklist", blacklist),
        ]);

        prop_assert_eq!(is_admitted(&config, &country), whitelist.contains(&country));
        prop_assert_eq!(
            CountryFilter::from_lookup(&config).is_admitted(&country),
            whitelist.contains(&country)
        );
    }

    /// Property: without a whitelist, admission is the blacklist's complement
    #[test]
    fn test_blacklist_complement(
        blacklist in prop::collection::vec(code(), 0..4),
        explicit_empty_whitelist in any::<bool>(),
        country in code(),
    ) {
        let mut entries = vec![("countries.blacklist", blacklist.clone())];
        if explicit_empty_whitelist {
            entries.push(("countries.whitelist", Vec::new()));
        }
        let config = lists(entries);

        prop_assert_eq!(is_admitted(&config, &country), !blacklist.contains(&country));
        prop_assert_eq!(
            CountryFilter::from_lookup(&config).is_admitted(&country),
            !blacklist.contains(&country)
        );
    }

    /// Property: the legacy key behaves exactly like `countries.whitelist`
    #[test]
    fn test_legacy_alias_equivalence(
        whitelist in prop::collection::vec(code(), 0..4),
        blacklist in prop::collection::vec(code(), 0..4),
        country in code(),
    ) {
        let current = lists(vec![
            ("countries.whitelist", whitelist.clone()),
            ("countries.blacklist", blacklist.clone()),
        ]);
        let legacy = lists(vec![
            ("countries", whitelist),
            ("countries.blacklist", blacklist),
        ]);

        prop_assert_eq!(is_admitted(&current, &country), is_admitted(&legacy, &country));
        prop_assert_eq!(
            CountryFilter::from_lookup(&current).decide(&country),
            CountryFilter::from_lookup(&legacy).decide(&country)
        );
    }
}
