use std::collections::BTreeMap;

use profile_core::{FlagSet, MergeEngine, walk};
use profile_test_utils::TestProfileTree;
use proptest::prelude::*;

fn token() -> impl Strategy<Value = (String, bool)> {
    ("[a-e]", any::<bool>())
}

fn render_token((name, enabled): &(String, bool)) -> String {
    if *enabled {
        name.clone()
    } else {
        format!("-{name}")
    }
}

/// Expected final state: the last occurrence of each name wins
fn last_write(tokens: &[(String, bool)]) -> BTreeMap<String, bool> {
    tokens.iter().cloned().collect()
}

proptest! {
    #[test]
    fn flag_set_keeps_last_write_per_name(tokens in prop::collection::vec(token(), 0..40)) {
        let mut set = FlagSet::new();
        for t in &tokens {
            set.apply(&render_token(t));
        }

        let expected = last_write(&tokens);
        prop_assert_eq!(set.len(), expected.len());
        for (name, enabled) in &expected {
            prop_assert_eq!(set.get(name), Some(*enabled));
        }
    }

    #[test]
    fn rendered_flag_set_reapplies_to_itself(tokens in prop::collection::vec(token(), 0..40)) {
        let mut set = FlagSet::new();
        for t in &tokens {
            set.apply(&render_token(t));
        }

        let mut reread = FlagSet::new();
        reread.apply_all(&set.render());
        prop_assert_eq!(reread, set);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn child_tokens_override_parent_tokens(
        parent in prop::collection::vec(token(), 0..12),
        child in prop::collection::vec(token(), 0..12),
    ) {
        let lines = |tokens: &[(String, bool)]| -> String {
            tokens.iter().map(|t| render_token(t) + "\n").collect()
        };
        let tree = TestProfileTree::new();
        tree.write("parent", "use.mask", &lines(parent.as_slice()));
        tree.write("child", "use.mask", &lines(child.as_slice()));
        tree.parents("child", &["parent"]);

        let mut engine = MergeEngine::new();
        walk(tree.profile("child"), &mut engine).unwrap();

        let combined: Vec<_> = parent.iter().chain(&child).cloned().collect();
        let expected = last_write(&combined);
        let state = engine.into_state();
        match state.flags("use.mask") {
            Some(set) => {
                for (name, enabled) in &expected {
                    prop_assert_eq!(set.get(name), Some(*enabled));
                }
                prop_assert_eq!(set.len(), expected.len());
            }
            None => prop_assert!(expected.is_empty()),
        }
    }
}
