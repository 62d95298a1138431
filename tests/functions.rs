use lodex::{FormatParams, MatchesProperty, UuidGenerator};
use serde_json::{json, Map, Value};

fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object fixture, got {}", other),
    }
}

#[test]
fn immutable_merge_leaves_inputs_untouched() {
    let src = json!({"a": 1, "b": 2, "nested": {"x": [1, 2, 3]}});
    let dest = json!({"c": 3, "d": 4, "nested": {"x": [7], "y": true}});
    let src_before = src.clone();
    let dest_before = dest.clone();

    let merged = lodex::immutable_merge(&src, &dest);

    assert_eq!(src, src_before);
    assert_eq!(dest, dest_before);
    assert_eq!(
        merged,
        json!({"a": 1, "b": 2, "c": 3, "d": 4, "nested": {"x": [7, 2, 3], "y": true}})
    );
}

#[test]
fn immutable_merge_result_is_independent_of_src() {
    let src = json!({"list": [{"id": 1}]});
    let mut merged = lodex::immutable_merge(&src, &json!({}));

    merged["list"][0]["id"] = json!(99);

    assert_eq!(src, json!({"list": [{"id": 1}]}));
}

#[test]
fn upsert_length_is_non_matching_count_plus_one() {
    let base = vec![
        json!({"team": "red", "n": 1}),
        json!({"team": "blue", "n": 2}),
        json!({"team": "red", "n": 3}),
        json!({"team": "green", "n": 4}),
    ];
    let matcher = json!({"team": "red"});
    let replacement = json!({"team": "red", "n": 0});

    let result = lodex::upsert(&base, &matcher, replacement.clone());

    let non_matching = base
        .iter()
        .filter(|v| v["team"] != json!("red"))
        .count();
    assert_eq!(result.len(), non_matching + 1);
    assert_eq!(result.last(), Some(&replacement));
    assert_eq!(
        result.iter().filter(|v| **v == replacement).count(),
        1
    );
    assert!(result[..result.len() - 1]
        .iter()
        .all(|v| v["team"] != json!("red")));
}

#[test]
fn upsert_with_property_matcher() {
    let base = vec![json!({"meta": {"sku": "a"}}), json!({"meta": {"sku": "b"}})];

    let result = lodex::upsert(
        &base,
        &MatchesProperty::new("meta.sku", json!("a")),
        json!({"meta": {"sku": "a", "qty": 2}}),
    );

    assert_eq!(
        result,
        vec![
            json!({"meta": {"sku": "b"}}),
            json!({"meta": {"sku": "a", "qty": 2}}),
        ]
    );
}

#[test]
fn format_examples() {
    assert_eq!(
        lodex::format_positional("Other {} are {}", &[json!("people"), json!("good plumbers")]),
        "Other people are good plumbers"
    );
    assert_eq!(
        lodex::format_named(
            "/categ/{cat}/{isbn}",
            &record(json!({"isbn": "034038204X"}))
        ),
        "/categ//034038204X"
    );
    assert_eq!(
        lodex::format("message without params", &FormatParams::None),
        "message without params"
    );
}

#[test]
fn format_dispatches_like_loose_callers_expect() {
    let named = FormatParams::from_args(vec![json!({"cat": "books", "isbn": "034038204X"})]);
    assert_eq!(
        lodex::format("/categ/{cat}/{isbn}", &named),
        "/categ/books/034038204X"
    );

    let positional = FormatParams::from_args(vec![json!("books"), json!("034038204X")]);
    assert_eq!(
        lodex::format("/categ/{cat}/{isbn}", &positional),
        "/categ/books/034038204X"
    );
}

#[test]
fn ordinal_examples() {
    let cases = [
        (1.0, "st"),
        (2.0, "nd"),
        (3.0, "rd"),
        (11.0, "th"),
        (12.0, "th"),
        (13.0, "th"),
        (21.0, "st"),
        (142.0, "nd"),
    ];

    for (number, suffix) in cases {
        assert_eq!(lodex::ordinal(number), suffix, "ordinal({})", number);
    }
}

#[test]
fn uuid_round_trip() {
    for _ in 0..10_000 {
        let id = lodex::uuid();
        let nibbles: Vec<char> = id.chars().collect();

        assert!(lodex::is_uuid(&id), "{}", id);
        assert_eq!(nibbles[14], '4');
        assert!(['8', '9', 'a', 'b'].contains(&nibbles[19]), "{}", id);
    }

    assert!(!lodex::is_uuid("not-a-uuid"));
}

#[test]
fn seeded_uuids_are_valid_and_reproducible() {
    let mut generator = UuidGenerator::seeded(2024);
    let first = generator.next_uuid();

    assert!(lodex::is_uuid(&first));
    assert_eq!(UuidGenerator::seeded(2024).next_uuid(), first);
}

#[test]
fn pluck_examples() {
    let nested = vec![json!({"p": {"c": 1}}), json!({"p": {"c": 2}})];
    assert_eq!(lodex::pluck_values(&nested, "p.c"), vec![json!(1), json!(2)]);

    let flat = vec![json!({"a": 1}), json!({"a": 2})];
    assert_eq!(lodex::pluck_values(&flat, "a"), vec![json!(1), json!(2)]);
}

#[test]
fn chain_composes_the_function_set() {
    let result = lodex::chain(json!([
        {"id": 1, "tags": {"primary": "x"}},
        {"id": 2, "tags": {"primary": "y"}},
    ]))
    .upsert(&json!({"id": 2}), json!({"id": 2, "tags": {"primary": "z"}}))
    .pluck("tags.primary")
    .into_value();

    assert_eq!(result, json!(["x", "z"]));
}
