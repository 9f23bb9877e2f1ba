//!
//! The run classifier.
//!

pub mod outcome;
pub mod submission;

use std::collections::BTreeMap;

use crate::model::machine::Machine;
use crate::model::result::comparison::Comparison;
use crate::model::test::variant::Variant;
use crate::model::test::Test;

use self::outcome::Outcome;
use self::submission::Submission;

///
/// Classifies the `submission` against the archived `machines`, applying the
/// implied change in place.
///
/// The hierarchy is walked top-down and the first missing level decides the
/// outcome. A failed comparison leaves the baseline untouched.
///
pub fn classify(machines: &mut BTreeMap<String, Machine>, submission: &Submission) -> Outcome {
    let variant = || {
        Variant::new(
            submission.test_configuration.clone(),
            submission.results.clone(),
        )
    };

    let machine = match machines.get_mut(submission.machine.as_str()) {
        Some(machine) => machine,
        None => {
            let mut machine = Machine::default();
            machine
                .push(submission.machine_configuration.clone())
                .tests
                .insert(submission.test.clone(), Test::new(variant()));
            machines.insert(submission.machine.clone(), machine);
            return Outcome::NewMachine;
        }
    };

    let configuration = match machine.configuration_mut(&submission.machine_configuration) {
        Some(configuration) => configuration,
        None => {
            machine
                .push(submission.machine_configuration.clone())
                .tests
                .insert(submission.test.clone(), Test::new(variant()));
            return Outcome::NewConfiguration;
        }
    };

    let test = match configuration.tests.get_mut(submission.test.as_str()) {
        Some(test) => test,
        None => {
            configuration
                .tests
                .insert(submission.test.clone(), Test::new(variant()));
            return Outcome::NewTest;
        }
    };

    let stored = match test.variant_mut(&submission.test_configuration) {
        Some(stored) => stored,
        None => {
            test.push(variant());
            return Outcome::NewTestConfiguration;
        }
    };

    match stored.results.compare(&submission.results) {
        Comparison::Matched => Outcome::Passed,
        Comparison::Extended { added } => {
            tracing::debug!(test = %submission.test, ?added, "Extending the baseline");
            stored.results = submission.results.clone();
            Outcome::UpdatedTest
        }
        Comparison::Mismatched { mismatches } => {
            for mismatch in mismatches.iter() {
                tracing::warn!(
                    machine = %submission.machine,
                    test = %submission.test,
                    "Result mismatch: {mismatch}"
                );
            }
            Outcome::Failed
        }
    }
}
