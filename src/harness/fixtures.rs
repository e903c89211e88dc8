//! Built-in fixture groups, one per standard utility.

use serde_json::json;

use super::{EqualityMode, TestGroup};

/// The literal groups the `arraykit` binary runs, in order.
pub fn builtin_groups() -> Vec<TestGroup> {
    vec![
        TestGroup::new("mergeArrays", EqualityMode::Deep)
            .case(json!([[1, 2], [3, 4]]), json!([1, 2, 3, 4]))
            .case(json!([[], []]), json!([])),
        TestGroup::new("exceptFirst", EqualityMode::Deep)
            .case(json!(["delfin", 2]), json!([2]))
            .case(json!([[], {}, 2, null]), json!([{}, 2, null])),
        TestGroup::new("last2Parameters", EqualityMode::Deep)
            .case(json!(["delfin", 2, 3, null, {}]), json!([null, {}]))
            .case(json!(["delfin"]), json!(["delfin"])),
        TestGroup::new("indexOf", EqualityMode::Deep)
            .case(json!(["delfin", ["delfin", "foo", "bar"]]), json!(0))
            .case(json!(["bar", ["delfin", "foo", "bar"]]), json!(2)),
        TestGroup::new("findNonEmptyTask", EqualityMode::Deep)
            .case(
                json!([[{"content": ""}, {"content": "Niepusty task"}]]),
                json!({"content": "Niepusty task"}),
            )
            .case(
                json!([[{"content": "foo"}, {"content": ""}]]),
                json!({"content": "foo"}),
            ),
        TestGroup::new("oddIndex", EqualityMode::Deep)
            .case(json!([[0, 2, 4, 8, 5]]), json!(4))
            .case(json!([[1, 2, 4, 8, 5]]), json!(0)),
        TestGroup::new("hasStrawberry", EqualityMode::Shallow)
            .case(json!([["banana", "apple", "strawberry"]]), json!(true))
            .case(json!([["pineapple", "mango"]]), json!(false)),
        TestGroup::new("someAdult", EqualityMode::Shallow)
            .case(
                json!([[{"name": "Krzysiek", "age": 17}, {"name": "Szymon", "age": 23}]]),
                json!(true),
            )
            .case(
                json!([[{"name": "Marcin", "age": 15}, {"name": "Kalina", "age": 14}]]),
                json!(false),
            )
            .case(json!([[]]), json!(false)),
        TestGroup::new("onlyString", EqualityMode::Shallow)
            .case(json!(["Szymon", null, {}, []]), json!(false))
            .case(
                json!([[{"name": "Marcin", "age": 15}, {"name": "Kalina", "age": 14}], "123"]),
                json!(false),
            )
            .case(json!(["123", "foo", "bar"]), json!(true)),
        TestGroup::new("filterPremium", EqualityMode::Deep)
            .case(
                json!([["mercedes", "aUdi", "BMW"]]),
                json!(["mercedes", "aUdi", "BMW"]),
            )
            .case(json!([["Mercedes", "opel", "foo"]]), json!(["Mercedes"]))
            .case(json!([["123", "foo", "bar"]]), json!([])),
        TestGroup::new("getColors", EqualityMode::Deep)
            .case(
                json!([{"brand": "mercedes", "color": "red"}, {"brand": "audi", "color": "yellow"}]),
                json!(["red", "yellow"]),
            )
            .case(json!([]), json!([])),
        TestGroup::new("sortPeople", EqualityMode::Deep)
            .case(
                json!([[{"name": "Szymon", "age": 99}, {"name": "Krzysztof", "age": 17}]]),
                json!([{"name": "Krzysztof", "age": 17}, {"name": "Szymon", "age": 99}]),
            )
            .case(
                json!([[
                    {"name": "Marcin", "age": 30},
                    {"name": "Kalina", "age": 20},
                    {"name": "Domka", "age": 10}
                ]]),
                json!([
                    {"name": "Domka", "age": 10},
                    {"name": "Kalina", "age": 20},
                    {"name": "Marcin", "age": 30}
                ]),
            ),
    ]
}
