//! Signup Form Example
//!
//! A minimal host registry wired through the adapter: fields declare which
//! named rules apply to them, the registry looks the wrappers up at
//! submit time, and failures print their localized messages.

use std::collections::BTreeMap;
use std::fs::File;

use plumb::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

/// A toy form-state host: a name-to-wrapper map plus the distinguished
/// required validator.
#[derive(Default)]
struct FormState {
    required: Option<ValidationFn>,
    validations: BTreeMap<String, ValidationFn>,
}

impl ValidationRegistry for FormState {
    fn set_required(&mut self, validation: ValidationFn) {
        self.required = Some(validation);
    }

    fn register_validation(&mut self, name: &str, validation: ValidationFn) {
        self.validations.insert(name.to_string(), validation);
    }
}

impl FormState {
    fn validate(&self, name: &str, value: &Value, label: &str, params: &[Param]) -> Option<String> {
        self.validations
            .get(name)
            .and_then(|validation| validation(value, label, params))
    }
}

fn main() {
    let log_file = File::create("signup.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut form = FormState::default();
    FormAdapter::default().plug_into(&mut form);

    // (field label, value, rule, params)
    let submissions: Vec<(&str, Value, &str, Vec<Param>)> = vec![
        ("Name", Value::from("Kilgore Trout"), "required", vec![]),
        ("Email", Value::from("kilgore@trout"), "email", vec![]),
        ("Password", Value::from("abc"), "minlen", vec![Param::from(8)]),
        ("Age", Value::from("17"), "gte", vec![Param::from(18)]),
        ("Website", Value::from("gopher://trout.test"), "url", vec![]),
        ("Website", Value::Null, "url", vec![]),
    ];

    for (label, value, rule, params) in submissions {
        match form.validate(rule, &value, label, &params) {
            Some(message) => println!("✗ {message}"),
            None => println!("✓ {label} ok"),
        }
    }
}
