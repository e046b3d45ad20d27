//! Property-based tests for repository selection.
//!
//! These tests use proptest to generate random repository and exclusion
//! lists and verify that selection behaves like a set difference.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{exclusion_set, Environment, Exclusion, Options, Settings};
    use crate::output::{Reporter, Verbosity};
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn resolve(repositories: Vec<String>, exclude: Vec<Exclusion>) -> Settings {
        let options = Options {
            user: Some("alice".to_string()),
            server: Some("review.example.com".to_string()),
            repositories,
            exclude,
            ..Default::default()
        };
        let env = Environment {
            user: None,
            cwd: PathBuf::from("/"),
        };
        let mut reporter = Reporter::new(Verbosity::Quiet, Vec::new());
        Settings::resolve(options, &env, &mut reporter).unwrap()
    }

    fn exclusion() -> impl Strategy<Value = Exclusion> {
        prop_oneof![
            1 => Just(Exclusion::Defaults),
            4 => "[a-z]{1,3}(/[a-z]{1,3})?".prop_map(Exclusion::Name),
        ]
    }

    proptest! {
        /// Property: nothing that is excluded is ever selected
        #[test]
        fn selected_never_contains_excluded(
            repos in prop::collection::vec("[a-z]{1,3}(/[a-z]{1,3})?", 0..12),
            exclude in prop::collection::vec(exclusion(), 0..6),
        ) {
            let settings = resolve(repos, exclude);
            for name in settings.selected() {
                prop_assert!(!settings.exclude.contains(name));
            }
        }

        /// Property: selected plus excluded-and-requested covers every request
        #[test]
        fn selected_is_set_difference(
            repos in prop::collection::vec("[a-z]{1,3}", 0..12),
            exclude in prop::collection::vec(exclusion(), 0..6),
        ) {
            let settings = resolve(repos.clone(), exclude);
            let selected: BTreeSet<&str> = settings.selected().collect();
            let requested: BTreeSet<&str> = repos.iter().map(String::as_str).collect();
            for name in &requested {
                prop_assert_eq!(
                    selected.contains(name),
                    !settings.exclude.contains(*name)
                );
            }
            prop_assert!(selected.is_subset(&requested));
        }

        /// Property: excluding names nobody asked for changes nothing
        #[test]
        fn unrelated_exclusions_have_no_effect(
            repos in prop::collection::vec("[a-m]{1,4}", 0..12),
            others in prop::collection::vec("[n-z]{1,4}", 0..6),
        ) {
            let plain = resolve(repos.clone(), vec![]);
            let excluded = resolve(
                repos,
                others.into_iter().map(Exclusion::Name).collect(),
            );
            let a: Vec<&str> = plain.selected().collect();
            let b: Vec<&str> = excluded.selected().collect();
            prop_assert_eq!(a, b);
        }

        /// Property: exclusion order and repetition do not matter
        #[test]
        fn exclusion_set_ignores_order(items in prop::collection::vec(exclusion(), 0..8)) {
            let mut reversed = items.clone();
            reversed.reverse();
            let mut doubled = items.clone();
            doubled.extend(items.iter().cloned());
            prop_assert_eq!(exclusion_set(&items), exclusion_set(&reversed));
            prop_assert_eq!(exclusion_set(&items), exclusion_set(&doubled));
        }
    }
}
