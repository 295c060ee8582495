use immutable::{
    clear, deep_clone, empty_state, get, get_in, merge, merge_deep, merge_in, pull_at_in, push, push_in, remove, remove_in, set,
    set_key, set_in, unshift, unshift_in, update, update_in, with_mutations, Structure,
};
use serde_json::json;

fn default_state() -> Structure {
    Structure::from(json!({
        "defaultProp1": {"nestedProp1": "nestedProp1"},
        "defaultProp2": "defaultProp2",
        "defaultProp3": "defaultProp3"
    }))
}

fn array_state() -> Structure {
    Structure::from(json!({
        "defaultProp1": {"nestedProp1": "nestedProp1"},
        "defaultProp2": "defaultProp2",
        "defaultProp3": ["defaultArrayItem"]
    }))
}

fn nested_array_state() -> Structure {
    Structure::from(json!({
        "defaultProp1": {"nestedProp1": ["nestedProp1", "nestedProp2", "nestedProp3"]},
        "defaultProp2": "defaultProp2",
        "defaultProp3": "defaultProp3"
    }))
}

// ── clear / get / get_in ──────────────────────────────────────────────────

#[test]
fn clear_returns_empty_singleton() {
    let result = clear();
    assert_eq!(result, json!({}));
    assert!(result.ptr_eq(&empty_state()));
}

#[test]
fn get_one_deep() {
    let state = default_state();
    assert_eq!(get(&Structure::from(json!({})), "defaultProp1"), None);
    assert_eq!(get(&state, "wrongLocation"), None);
    assert_eq!(get(&state, "defaultProp3"), Some(Structure::from("defaultProp3")));
}

#[test]
fn get_treats_falsy_as_missing() {
    let state = Structure::from(json!({"zero": 0, "no": false, "blank": "", "nil": null, "list": []}));
    for key in ["zero", "no", "blank", "nil"] {
        assert_eq!(get(&state, key), None, "{key}");
    }
    assert_eq!(get(&state, "list"), Some(Structure::from(json!([]))));
}

#[test]
fn get_in_paths() {
    let state = default_state();
    assert_eq!(get_in(&Structure::from(json!({})), &["defaultProp1", "nestedProp1"]), None);
    assert_eq!(get_in(&state, &["defaultProp1", "defaultProp2"]), None);
    assert_eq!(get_in(&state, &["defaultProp3", "x"]), None);
    assert_eq!(
        get_in(&state, &["defaultProp1", "nestedProp1"]),
        Some(Structure::from("nestedProp1"))
    );
}

#[test]
fn get_in_shares_the_subtree() {
    let state = default_state();
    let found = get_in(&state, &["defaultProp1"]).unwrap();
    assert!(found.ptr_eq(state.get("defaultProp1").unwrap()));
}

// ── set ───────────────────────────────────────────────────────────────────

#[test]
fn set_key_on_empty_state() {
    let result = set_key(&Structure::from(json!({})), "defaultProp1", "defaultProp1");
    assert_eq!(result, json!({"defaultProp1": "defaultProp1"}));
}

#[test]
fn set_key_with_empty_key_is_noop() {
    let state = default_state();
    assert!(set_key(&state, "", "defaultProp1").ptr_eq(&state));
}

#[test]
fn set_key_creates_and_replaces() {
    let state = default_state();
    let snapshot = deep_clone(&state);

    let result = set_key(&state, "addProp4", "addProp4");
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": {"nestedProp1": "nestedProp1"},
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3",
            "addProp4": "addProp4"
        })
    );

    let result = set_key(&state, "defaultProp1", "addProp4");
    assert_eq!(
        result,
        json!({
            "defaultProp1": "addProp4",
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3"
        })
    );
}

#[test]
fn set_whole_state() {
    let state = default_state();
    assert!(set(&state, default_state()).ptr_eq(&state));
    assert_eq!(set(&state, json!([1])), json!([1]));
}

#[test]
fn set_in_creates_intermediate_maps() {
    let state = default_state();
    let result = set_in(&state, &["a", "b", "c"], 1);
    assert_eq!(get_in(&result, &["a", "b", "c"]), Some(Structure::from(1)));
    assert!(result.get("defaultProp1").unwrap().ptr_eq(state.get("defaultProp1").unwrap()));
}

#[test]
fn set_in_through_scalar_is_noop() {
    let state = default_state();
    assert!(set_in(&state, &["defaultProp2", "x"], 1).ptr_eq(&state));
    assert!(set_in::<&str>(&state, &[], 1).ptr_eq(&state));
}

// ── update / update_in ────────────────────────────────────────────────────

fn replace_default_prop1(x: Option<Structure>) -> Structure {
    match x {
        Some(v) if v == json!({"nestedProp1": "nestedProp1"}) => Structure::from("addProp4"),
        other => other.unwrap_or_default(),
    }
}

#[test]
fn update_empty_state() {
    let state = Structure::from(json!({}));
    let result = update(&state, "defaultProp1", replace_default_prop1);
    assert_eq!(result, json!({}));
    assert!(result.ptr_eq(&state));
}

#[test]
fn update_one_deep() {
    let state = default_state();
    let snapshot = deep_clone(&state);
    let result = update(&state, "defaultProp1", replace_default_prop1);
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": "addProp4",
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3"
        })
    );
}

fn replace_nested_prop1(x: Structure) -> Structure {
    if x == Structure::from("nestedProp1") {
        Structure::from("addProp4")
    } else {
        x
    }
}

#[test]
fn update_in_empty_state() {
    let result = update_in(&empty_state(), &["defaultProp1", "nestedProp1"], replace_nested_prop1);
    assert!(result.ptr_eq(&empty_state()));
}

#[test]
fn update_in_nested() {
    let state = default_state();
    let snapshot = deep_clone(&state);
    let result = update_in(&state, &["defaultProp1", "nestedProp1"], replace_nested_prop1);
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": {"nestedProp1": "addProp4"},
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3"
        })
    );
}

#[test]
fn update_in_does_not_create_location() {
    let state = default_state();
    let result = update_in(&state, &["defaultProp1", "addProp4"], replace_nested_prop1);
    assert!(result.ptr_eq(&state));
}

// ── merge / merge_in ──────────────────────────────────────────────────────

#[test]
fn merge_into_empty_state() {
    let result = merge(&Structure::from(json!({})), json!({"nestedProp1": "nestedProp1"}));
    assert_eq!(result, json!({"nestedProp1": "nestedProp1"}));
}

#[test]
fn merge_adds_keys() {
    let state = default_state();
    let snapshot = deep_clone(&state);
    let result = merge(&state, json!({"addProp4": "addProp4"}));
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": {"nestedProp1": "nestedProp1"},
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3",
            "addProp4": "addProp4"
        })
    );
}

#[test]
fn merge_non_map_leaves_state_alone() {
    let state = default_state();
    assert!(merge(&state, Structure::Null).ptr_eq(&state));
    assert!(merge(&state, 5).ptr_eq(&state));
    assert!(merge(&state, json!([9])).ptr_eq(&state));
    assert!(merge(&state, "defaultProp2").ptr_eq(&state));
}

#[test]
fn merge_map_into_null_state() {
    let result = merge(&Structure::Null, json!({"addProp4": "addProp4"}));
    assert_eq!(result, json!({"addProp4": "addProp4"}));
}

#[test]
fn merge_deep_is_merge() {
    let state = default_state();
    let patch = json!({"defaultProp1": {"addProp4": "addProp4"}});
    let result = merge_deep(&state, patch.clone());
    assert_eq!(result, merge(&state, patch));
    assert_eq!(get_in(&result, &["defaultProp1", "nestedProp1"]), Some(Structure::from("nestedProp1")));
    assert!(merge_deep(&state, 5).ptr_eq(&state));
}

#[test]
fn update_on_sequence_needs_an_index() {
    let state = Structure::from(json!(["defaultArrayItem"]));
    assert!(update(&state, "x", |_| Structure::from(0)).ptr_eq(&state));
    assert!(update(&state, "99", |_| Structure::from(0)).ptr_eq(&state));
}

#[test]
fn merge_in_empty_state() {
    let result = merge_in(&Structure::from(json!({})), &["defaultProp1"], json!({"nestedProp1": "nestedProp1"}));
    assert_eq!(result, json!({"defaultProp1": {"nestedProp1": "nestedProp1"}}));
}

#[test]
fn merge_in_at_location() {
    let state = default_state();
    let snapshot = deep_clone(&state);
    let result = merge_in(&state, &["defaultProp1"], json!({"addProp4": "addProp4"}));
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": {"nestedProp1": "nestedProp1", "addProp4": "addProp4"},
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3"
        })
    );
}

#[test]
fn merge_in_creates_location() {
    let state = default_state();
    let result = merge_in(&state, &["addProp4"], json!({"nestedProp1": "nestedProp1"}));
    assert_eq!(
        result,
        json!({
            "defaultProp1": {"nestedProp1": "nestedProp1"},
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3",
            "addProp4": {"nestedProp1": "nestedProp1"}
        })
    );
}

#[test]
fn merge_in_over_scalar_is_noop() {
    let state = default_state();
    assert!(merge_in(&state, &["defaultProp2"], json!({"a": 1})).ptr_eq(&state));
}

// ── push / push_in ────────────────────────────────────────────────────────

#[test]
fn push_creates_sequence() {
    let result = push(&Structure::from(json!({})), "addProp4", ["addProp4"]);
    assert_eq!(result, json!({"addProp4": ["addProp4"]}));
}

#[test]
fn push_appends() {
    let state = array_state();
    let snapshot = deep_clone(&state);
    let result = push(&state, "defaultProp3", ["addProp4"]);
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": {"nestedProp1": "nestedProp1"},
            "defaultProp2": "defaultProp2",
            "defaultProp3": ["defaultArrayItem", "addProp4"]
        })
    );
}

#[test]
fn push_never_overwrites_non_sequence() {
    let state = array_state();
    assert!(push(&state, "defaultProp1", ["addProp4"]).ptr_eq(&state));
    assert!(push(&state, "defaultProp2", ["addProp4"]).ptr_eq(&state));
}

#[test]
fn push_in_creates_nested_sequence() {
    let result = push_in(&Structure::from(json!({})), &["defaultProp1", "nestedProp1"], ["addProp4"]);
    assert_eq!(result, json!({"defaultProp1": {"nestedProp1": ["addProp4"]}}));
}

#[test]
fn push_in_appends_nested() {
    let state = Structure::from(json!({"defaultProp1": {"nestedProp1": ["nestedProp1"]}, "defaultProp2": "defaultProp2"}));
    let snapshot = deep_clone(&state);
    let result = push_in(&state, &["defaultProp1", "nestedProp1"], ["addProp4"]);
    assert_eq!(state, snapshot);
    assert_eq!(
        get_in(&result, &["defaultProp1", "nestedProp1"]),
        Some(Structure::from(json!(["nestedProp1", "addProp4"])))
    );
}

#[test]
fn push_in_through_scalar_is_noop() {
    let state = Structure::from(json!({"a": {"b": "scalar"}}));
    assert!(push_in(&state, &["a", "b"], ["x"]).ptr_eq(&state));
    assert!(push_in(&state, &["a", "b", "c"], ["x"]).ptr_eq(&state));
}

#[test]
fn push_turns_empty_map_into_sequence() {
    let state = Structure::from(json!({"a": {}}));
    assert_eq!(push(&state, "a", [1, 2]), json!({"a": [1, 2]}));
}

// ── unshift / unshift_in ──────────────────────────────────────────────────

#[test]
fn unshift_creates_sequence() {
    let result = unshift(&Structure::from(json!({})), "addProp4", ["addProp4"]);
    assert_eq!(result, json!({"addProp4": ["addProp4"]}));
}

#[test]
fn unshift_prepends() {
    let state = array_state();
    let snapshot = deep_clone(&state);
    let result = unshift(&state, "defaultProp3", ["addProp4"]);
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": {"nestedProp1": "nestedProp1"},
            "defaultProp2": "defaultProp2",
            "defaultProp3": ["addProp4", "defaultArrayItem"]
        })
    );
}

#[test]
fn unshift_keeps_relative_order() {
    let state = Structure::from(json!({"l": ["c"]}));
    assert_eq!(unshift(&state, "l", ["a", "b"]), json!({"l": ["a", "b", "c"]}));
}

#[test]
fn unshift_never_overwrites_non_sequence() {
    let state = array_state();
    assert!(unshift(&state, "defaultProp1", ["addProp4"]).ptr_eq(&state));
}

#[test]
fn unshift_in_nested() {
    let result = unshift_in(&Structure::from(json!({})), &["defaultProp1", "nestedProp1"], ["addProp4"]);
    assert_eq!(result, json!({"defaultProp1": {"nestedProp1": ["addProp4"]}}));

    let state = Structure::from(json!({"defaultProp1": {"nestedProp1": ["nestedProp1"]}}));
    let result = unshift_in(&state, &["defaultProp1", "nestedProp1"], ["addProp4"]);
    assert_eq!(result, json!({"defaultProp1": {"nestedProp1": ["addProp4", "nestedProp1"]}}));
}

// ── pull_at_in ────────────────────────────────────────────────────────────

#[test]
fn pull_at_in_empty_state() {
    let result = pull_at_in(&empty_state(), &["defaultProp1", "nestedProp1"], &[1]);
    assert!(result.ptr_eq(&empty_state()));
}

#[test]
fn pull_at_in_removes_index() {
    let state = nested_array_state();
    let snapshot = deep_clone(&state);
    let result = pull_at_in(&state, &["defaultProp1", "nestedProp1"], &[1]);
    assert_eq!(state, snapshot);
    assert_eq!(
        get_in(&result, &["defaultProp1", "nestedProp1"]),
        Some(Structure::from(json!(["nestedProp1", "nestedProp3"])))
    );
}

#[test]
fn pull_at_in_several_indices() {
    let state = nested_array_state();
    let result = pull_at_in(&state, &["defaultProp1", "nestedProp1"], &[2, 0]);
    assert_eq!(
        get_in(&result, &["defaultProp1", "nestedProp1"]),
        Some(Structure::from(json!(["nestedProp2"])))
    );
}

#[test]
fn pull_at_in_out_of_range_is_noop() {
    let state = nested_array_state();
    assert!(pull_at_in(&state, &["defaultProp1", "nestedProp1"], &[10]).ptr_eq(&state));
    assert!(pull_at_in(&state, &["defaultProp1", "nestedProp1"], &[0, 3]).ptr_eq(&state));
    assert!(pull_at_in(&state, &["defaultProp2"], &[0]).ptr_eq(&state));
}

// ── remove / remove_in ────────────────────────────────────────────────────

#[test]
fn remove_from_empty_state() {
    assert!(remove(&empty_state(), "defaultProp1").ptr_eq(&empty_state()));
}

#[test]
fn remove_top_level_key() {
    let state = nested_array_state();
    let snapshot = deep_clone(&state);
    let result = remove(&state, "defaultProp1");
    assert_eq!(state, snapshot);
    assert_eq!(result, json!({"defaultProp2": "defaultProp2", "defaultProp3": "defaultProp3"}));
}

#[test]
fn remove_in_from_empty_state() {
    assert!(remove_in(&empty_state(), &["defaultProp1", "nestedProp1"]).ptr_eq(&empty_state()));
}

#[test]
fn remove_in_leaves_parent() {
    let state = nested_array_state();
    let snapshot = deep_clone(&state);
    let result = remove_in(&state, &["defaultProp1", "nestedProp1"]);
    assert_eq!(state, snapshot);
    assert_eq!(
        result,
        json!({
            "defaultProp1": {},
            "defaultProp2": "defaultProp2",
            "defaultProp3": "defaultProp3"
        })
    );
}

#[test]
fn remove_in_leaf_only_with_sibling_sharing() {
    let state = Structure::from(json!({"a": {"b": {"c": 1, "d": 2}}, "e": {"f": 3}}));
    let result = remove_in(&state, &["a", "b", "c"]);
    assert_eq!(result, json!({"a": {"b": {"d": 2}}, "e": {"f": 3}}));
    assert!(!result.get("a").unwrap().ptr_eq(state.get("a").unwrap()));
    assert!(result.get("e").unwrap().ptr_eq(state.get("e").unwrap()));
}

// ── with_mutations ────────────────────────────────────────────────────────

#[test]
fn with_mutations_matches_sequential_calls() {
    let state = nested_array_state();

    let sequential = push_in(&state, &["defaultProp1", "nestedProp1"], ["nestedProp4"]);
    let sequential = set_in(&sequential, &["defaultProp1", "flag"], true);
    let sequential = remove(&sequential, "defaultProp2");

    let batched = with_mutations(&state, |m| {
        m.push_in(&["defaultProp1", "nestedProp1"], ["nestedProp4"])
            .set_in(&["defaultProp1", "flag"], true)
            .delete_in(&["defaultProp2"]);
    });

    assert_eq!(batched, sequential);
    assert!(batched.get("defaultProp3").unwrap().ptr_eq(state.get("defaultProp3").unwrap()));
}

#[test]
fn with_mutations_noop_batch_returns_input() {
    let state = default_state();
    let result = with_mutations(&state, |m| {
        m.set_key("defaultProp2", "changed").set_key("defaultProp2", "defaultProp2");
    });
    assert!(result.ptr_eq(&state));
}

#[test]
fn with_mutations_get_in_then_write() {
    let state = default_state();
    let result = with_mutations(&state, |m| {
        m.get_in(&["defaultProp1"]).set_key("extra", 1);
    });
    assert_eq!(result, json!({"nestedProp1": "nestedProp1", "extra": 1}));
}
