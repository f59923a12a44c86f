//! Property-based invariant tests for the step generator and validator.
//!
//! 1. Every snapshot is a permutation of the input
//! 2. The trace opens with Init and closes with Complete
//! 3. The settled prefix is final after each pass
//! 4. The tentative minimum stays inside the unsorted part
//! 5. Determinism
//! 6. The validator accepts exactly the well-formed inputs

use proptest::prelude::*;
use selection_studio::input::{share, validate, Bounds};
use selection_studio::trace::{generate, Event, Phase};

// ── Strategies ──────────────────────────────────────────────────────────

fn array_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..150, 0..14)
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn every_step_is_a_permutation(input in array_strategy()) {
        let trace = generate(&input);
        let expected = sorted(&input);
        for step in trace.iter() {
            prop_assert_eq!(step.array.len(), input.len());
            prop_assert_eq!(sorted(&step.array), expected.clone());
        }
    }

    #[test]
    fn framed_by_init_and_complete(input in array_strategy()) {
        let trace = generate(&input);
        prop_assert_eq!(trace.first().phase, Phase::Init);
        prop_assert_eq!(&trace.first().array, &input);
        prop_assert!(trace.first().focused.is_empty());

        let last = trace.last();
        prop_assert_eq!(last.phase, Phase::Complete);
        prop_assert_eq!(&last.array, &sorted(&input));
        prop_assert_eq!(last.focused.clone(), (0..input.len()).collect::<Vec<_>>());

        let inits = trace.iter().filter(|s| s.phase == Phase::Init).count();
        let completes = trace.iter().filter(|s| s.phase == Phase::Complete).count();
        prop_assert_eq!(inits, 1);
        prop_assert_eq!(completes, 1);
    }

    #[test]
    fn settled_prefix_never_changes(input in array_strategy()) {
        let trace = generate(&input);
        let expected = sorted(&input);
        let steps = trace.steps();

        for (k, step) in steps.iter().enumerate() {
            if let Event::PassComplete { settled } = step.event {
                prop_assert_eq!(&step.array[..settled], &expected[..settled]);
                prop_assert_eq!(step.focused.clone(), (0..settled).collect::<Vec<_>>());
                for later in &steps[k..] {
                    prop_assert_eq!(&later.array[..settled], &step.array[..settled]);
                }
            }
        }
    }

    #[test]
    fn tentative_min_within_unsorted_part(input in array_strategy()) {
        let trace = generate(&input);
        let n = input.len();
        let mut pass = None;

        for step in trace.iter() {
            match step.event {
                Event::SeedMin { index, .. } => pass = Some(index),
                Event::PassComplete { .. } => pass = None,
                _ => {}
            }
            if let Some(min) = step.tentative_min {
                let i = pass.expect("tentative minimum outside a pass");
                prop_assert!(min >= i && min < n);
            }
            if step.phase == Phase::Comparing {
                prop_assert!(step.tentative_min.is_some());
            }
        }
    }

    #[test]
    fn focus_sizes(input in array_strategy()) {
        let trace = generate(&input);
        for step in trace.iter() {
            match step.phase {
                Phase::Comparing | Phase::FoundNewMin => prop_assert_eq!(step.focused.len(), 1),
                Phase::Swapping => {
                    prop_assert_eq!(step.focused.len(), 2);
                    prop_assert_ne!(step.focused[0], step.focused[1]);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn generate_is_deterministic(input in array_strategy()) {
        prop_assert_eq!(generate(&input), generate(&input));
    }

    #[test]
    fn validator_accepts_well_formed(values in prop::collection::vec(1i64..=99, 10)) {
        prop_assert_eq!(validate(&share::encode(&values)), Ok(values.clone()));
        let spaced = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("  \n ");
        prop_assert_eq!(validate(&spaced), Ok(values));
    }

    #[test]
    fn validator_iff(tokens in prop::collection::vec(prop_oneof![
        (-20i64..130).prop_map(|v| v.to_string()),
        "[a-z]{1,3}",
    ], 0..14)) {
        let text = tokens.join(",");
        let bounds = Bounds::default();
        let well_formed = tokens.len() == bounds.len
            && tokens.iter().all(|t| t.parse::<i64>().map(|v| bounds.contains(v)).unwrap_or(false));
        prop_assert_eq!(validate(&text).is_ok(), well_formed);
    }
}
