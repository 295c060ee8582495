use immutable::{
    deep_clone, get_in, merge_in, pull_at_in, push_in, remove_in, set_in, update_in, with_mutations, Structure,
};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

fn any_structure() -> impl Strategy<Value = Structure> {
    let leaf = prop_oneof![
        Just(Structure::Null),
        any::<bool>().prop_map(Structure::from),
        any::<i64>().prop_map(Structure::from),
        "[a-z]{0,4}".prop_map(Structure::from),
    ];
    leaf.prop_recursive(
        3,  // No more than 3 branch levels deep
        32, // Target around 32 total elements
        4,  // Each collection is up to 4 elements long
        |inner| {
            prop_oneof![
                vec(inner.clone(), 0..4).prop_map(Structure::from),
                btree_map("[a-c]", inner, 0..4).prop_map(|m| m.into_iter().collect::<Structure>()),
            ]
        },
    )
}

fn any_state() -> impl Strategy<Value = Structure> {
    btree_map("[a-c]", any_structure(), 0..4).prop_map(|m| m.into_iter().collect::<Structure>())
}

fn any_path() -> impl Strategy<Value = Vec<String>> {
    vec("[a-c]", 1..4)
}

proptest! {
    #[test]
    fn writes_never_touch_the_input(
        state in any_state(),
        path in any_path(),
        value in any_structure(),
    ) {
        let snapshot = deep_clone(&state);
        let _ = set_in(&state, &path, value.clone());
        let _ = merge_in(&state, &path, value.clone());
        let _ = push_in(&state, &path, [value]);
        let _ = remove_in(&state, &path);
        let _ = pull_at_in(&state, &path, &[0]);
        prop_assert_eq!(&state, &snapshot);
    }

    #[test]
    fn set_in_then_get_in_round_trips(
        state in any_state(),
        path in any_path(),
        value in any_structure().prop_filter("stored nulls read as missing", |v| !v.is_null()),
    ) {
        let result = set_in(&state, &path, value.clone());
        prop_assert!(result.ptr_eq(&state) || get_in(&result, &path) == Some(value));
    }

    #[test]
    fn missing_paths_are_identity(state in any_state(), tail in vec("[a-c]", 0..3)) {
        let mut path = vec!["missing".to_string()];
        path.extend(tail);
        prop_assert!(update_in(&state, &path, |v| v).ptr_eq(&state));
        prop_assert!(remove_in(&state, &path).ptr_eq(&state));
        prop_assert!(pull_at_in(&state, &path, &[0]).ptr_eq(&state));
    }

    #[test]
    fn untouched_siblings_are_shared(
        left in any_state(),
        right in any_state(),
        path in any_path(),
        value in any_structure(),
    ) {
        let state: Structure = [("left", left), ("right", right)].into_iter().collect();
        let mut full = vec!["left".to_string()];
        full.extend(path);
        let result = set_in(&state, &full, value);
        prop_assert!(result.get("right").unwrap().ptr_eq(state.get("right").unwrap()));
    }

    #[test]
    fn removed_paths_no_longer_exist(state in any_state(), path in any_path()) {
        let result = remove_in(&state, &path);
        prop_assert_eq!(get_in(&result, &path), None);
    }

    #[test]
    fn batch_equals_sequential_calls(
        state in any_state(),
        first in any_path(),
        second in any_path(),
        value in any_structure(),
    ) {
        let sequential = set_in(&state, &first, value.clone());
        let sequential = push_in(&sequential, &second, [value.clone()]);
        let batched = with_mutations(&state, |m| {
            m.set_in(&first, value.clone()).push_in(&second, [value.clone()]);
        });
        prop_assert_eq!(batched, sequential);
    }
}
