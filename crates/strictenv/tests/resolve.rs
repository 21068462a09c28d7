use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use strictenv::{
    resolve, resolve_with, DefaultReporter, EnvError, EnvValue, Errors, Schema, Validator,
};

fn full_schema() -> Schema {
    Schema::from([
        ("HOST".to_owned(), Validator::string()),
        ("IP".to_owned(), Validator::ip_address()),
        ("PORT".to_owned(), Validator::port()),
        ("IS_TEST".to_owned(), Validator::boolean()),
        ("EMAIL".to_owned(), Validator::email()),
        ("HOME_PAGE".to_owned(), Validator::url()),
        ("CONFIG".to_owned(), Validator::json()),
        ("AGENTS".to_owned(), Validator::number()),
    ])
}

fn valid_environment() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("HOST".to_owned(), "google".to_owned()),
        ("IP".to_owned(), "192.168.0.1".to_owned()),
        ("PORT".to_owned(), "8000".to_owned()),
        ("IS_TEST".to_owned(), "True".to_owned()),
        ("EMAIL".to_owned(), "test@gmail.com".to_owned()),
        ("HOME_PAGE".to_owned(), "https://www.google.com".to_owned()),
        ("CONFIG".to_owned(), r#"{"concurrency": 20}"#.to_owned()),
        ("AGENTS".to_owned(), "4".to_owned()),
    ])
}

#[test]
fn all_eight_variants_resolve_to_their_typed_values() {
    let env = resolve(&valid_environment(), &full_schema()).expect("all keys valid");

    assert_eq!(env.get_str("HOST"), Some("google"));
    assert_eq!(env.get_str("IP"), Some("192.168.0.1"));
    assert_eq!(env.get_int("PORT"), Some(8000));
    assert_eq!(env.get_bool("IS_TEST"), Some(true));
    assert_eq!(env.get_str("EMAIL"), Some("test@gmail.com"));
    assert_eq!(env.get_str("HOME_PAGE"), Some("https://www.google.com"));
    assert_eq!(
        env.get_json("CONFIG"),
        Some(&serde_json::json!({"concurrency": 20}))
    );
    assert_eq!(env.get_int("AGENTS"), Some(4));
    assert_eq!(env.len(), 8);
}

#[test]
fn one_invalid_key_fails_the_whole_pass_by_default() {
    let mut environment = valid_environment();
    environment.insert("PORT".to_owned(), "8000A".to_owned());

    assert_eq!(
        resolve(&environment, &full_schema()),
        Err(EnvError::Failed)
    );
}

#[test]
fn a_callback_reporter_absorbs_the_failure_and_is_called_once() {
    let mut environment = valid_environment();
    environment.insert("PORT".to_owned(), "8000A".to_owned());

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Errors::new()));
    let reporter = {
        let calls = Arc::clone(&calls);
        let seen = Arc::clone(&seen);
        DefaultReporter::with_on_error(move |errors| {
            calls.fetch_add(1, Ordering::SeqCst);
            *seen.lock().unwrap() = errors.clone();
        })
    };

    let env = resolve_with(&environment, &full_schema(), &reporter).expect("delegated");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.keys().collect::<Vec<_>>(), vec!["PORT"]);
    assert!(matches!(seen["PORT"], EnvError::Invalid { .. }));

    // Best-effort result: everything except the failing key.
    assert!(!env.contains_key("PORT"));
    assert_eq!(env.len(), 7);
}

#[test]
fn every_invalid_key_is_reported_not_just_the_first() {
    let environment = BTreeMap::from([
        ("HOST".to_owned(), "google".to_owned()),
        ("IP".to_owned(), "1".to_owned()),
        ("PORT".to_owned(), "8000A".to_owned()),
        ("IS_TEST".to_owned(), "t".to_owned()),
        ("EMAIL".to_owned(), "test_gmail.com".to_owned()),
        ("HOME_PAGE".to_owned(), "://www.google.com".to_owned()),
        ("CONFIG".to_owned(), r#"{"concurrency"= 20}"#.to_owned()),
        ("AGENTS".to_owned(), "4A".to_owned()),
    ]);

    let seen = Arc::new(Mutex::new(Errors::new()));
    let reporter = {
        let seen = Arc::clone(&seen);
        DefaultReporter::with_on_error(move |errors| {
            *seen.lock().unwrap() = errors.clone();
        })
    };

    let env = resolve_with(&environment, &full_schema(), &reporter).expect("delegated");

    assert_eq!(env.keys().collect::<Vec<_>>(), vec!["HOST"]);
    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.keys().collect::<Vec<_>>(),
        vec!["AGENTS", "CONFIG", "EMAIL", "HOME_PAGE", "IP", "IS_TEST", "PORT"]
    );
    assert!(seen.values().all(|e| matches!(e, EnvError::Invalid { .. })));
}

#[test]
fn defaults_fill_absent_keys_without_revalidation() {
    let environment = BTreeMap::from([("HOST".to_owned(), "google".to_owned())]);
    let schema = Schema::from([
        ("HOST".to_owned(), Validator::string()),
        ("PORT".to_owned(), Validator::port().default(8000)),
        (
            "CONFIG".to_owned(),
            Validator::json().default(serde_json::json!({"concurrency": 20})),
        ),
    ]);

    let env = resolve(&environment, &schema).expect("defaults cover the gaps");
    assert_eq!(env.get_str("HOST"), Some("google"));
    assert_eq!(env.get_int("PORT"), Some(8000));
    assert_eq!(
        env.get_json("CONFIG"),
        Some(&serde_json::json!({"concurrency": 20}))
    );
}

#[test]
fn choices_are_enforced_against_coerced_values_during_resolution() {
    let environment = BTreeMap::from([("MODE".to_owned(), "C".to_owned())]);
    let schema = Schema::from([(
        "MODE".to_owned(),
        Validator::string().choices(["A", "B"]),
    )]);

    let seen = Arc::new(Mutex::new(Errors::new()));
    let reporter = {
        let seen = Arc::clone(&seen);
        DefaultReporter::with_on_error(move |errors| {
            *seen.lock().unwrap() = errors.clone();
        })
    };

    let env = resolve_with(&environment, &schema, &reporter).expect("delegated");
    assert!(env.is_empty());
    assert_eq!(
        seen.lock().unwrap()["MODE"],
        EnvError::Invalid {
            message: "Invalid str input: C, not in [A, B]".to_owned()
        }
    );
}

#[test]
fn the_result_is_a_value_snapshot() {
    let env = resolve(&valid_environment(), &full_schema()).expect("all keys valid");
    let copy = env.clone();

    // There is no mutating API; the only way to "change" a result is to
    // resolve again, and clones compare equal to the original snapshot.
    assert_eq!(copy, env);
    assert_eq!(copy["PORT"], EnvValue::Int(8000));
}
