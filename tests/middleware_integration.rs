//! Public API tests for the tracing middleware and its demonstration targets

use dsf::diagnostics::MemorySink;
use dsf::error::DsfError;
use dsf::gdp::{per_capita_gdp_v2, NationalAccounts};
use dsf::greeting::{format_greeting, greet, GreetingArgs};
use dsf::middleware::{trace, Operation, TraceOptions, ENTRY_MARKER};
use dsf::person::Person;

fn shout(word: &str) -> String {
    word.to_uppercase()
}

dsf::traced_fn! {
    fn traced_shout(word: &'static str) -> String => shout;
}

dsf::traced_fn! {
    fn traced_per_capita(accounts: NationalAccounts) -> Result<f64, DsfError> => per_capita_gdp_v2;
}

#[test]
fn test_macro_and_explicit_trace_are_indistinguishable() {
    let via_macro = MemorySink::new();
    let explicit = MemorySink::new();

    let a = traced_shout(&via_macro, "hey");
    let b = trace(shout, &explicit).invoke("hey");

    assert_eq!(a, b);
    assert_eq!(via_macro.records(), explicit.records());
    assert_eq!(via_macro.records(), vec!["hey", "result: HEY"]);
}

#[test]
fn test_macro_relays_errors_unchanged() {
    let sink = MemorySink::new();
    let accounts = NationalAccounts::new(1.0, 1.0, 1.0, 1.0, 0.0);

    let err = traced_per_capita(&sink, accounts).unwrap_err();
    let direct = per_capita_gdp_v2(accounts).unwrap_err();

    assert_eq!(err.to_string(), direct.to_string());
    assert!(!sink.records().iter().any(|r| r.starts_with("result:")));
}

#[test]
fn test_configurable_outputs_differ_only_in_argument_and_result_records() {
    let args = GreetingArgs::new("Matt").last_name("Wilson");
    let argument_records = ["Matt", "last_name: Wilson"];

    let mut outputs = Vec::new();
    for log_start in [false, true] {
        for log_end in [false, true] {
            let sink = MemorySink::new();
            TraceOptions::configurable(log_start, log_end)
                .apply(greet, &sink)
                .invoke(args.clone());

            let records = sink.records();
            assert_eq!(records[0], ENTRY_MARKER);
            assert_eq!(
                records.iter().any(|r| argument_records.contains(&r.as_str())),
                log_start
            );
            assert_eq!(records.iter().any(|r| r == "result: ()"), log_end);
            outputs.push(records);
        }
    }

    outputs.sort();
    outputs.dedup();
    assert_eq!(outputs.len(), 4);
}

#[test]
fn test_greeting_examples() {
    assert_eq!(format_greeting(&GreetingArgs::new("stupid")), "hello, stupid!");
    assert_eq!(
        format_greeting(&GreetingArgs::new("stupid").middle_name("and").last_name("ugly")),
        "hello, stupid and ugly!"
    );
    assert_eq!(
        format_greeting(&GreetingArgs::new("Matt").last_name("Wilson")),
        "hello, Matt Wilson!"
    );
}

#[test]
fn test_person_round_trip() {
    let mut person = Person::new("Matt", "Wilson");
    assert_eq!(person.display_name(), "Matt Wilson");

    person.set_display_name("Matt Wilson").unwrap();
    assert_eq!(person.first_name, "Matt");
    assert_eq!(person.last_name, "Wilson");

    assert!(matches!(
        person.set_display_name("Matt"),
        Err(DsfError::ValueFormat { .. })
    ));
    assert!(matches!(
        person.set_display_name("  "),
        Err(DsfError::ValueFormat { .. })
    ));
}
