#[cfg(test)]
mod tests {
    use crate::value::{FieldMatch, QueryValue};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_key_order() {
        let value = QueryValue::from(json!({ "z": 1, "a": 2, "m": 3 }));
        let QueryValue::Object(entries) = value else {
            panic!("expected an object");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_classify() {
        let array = QueryValue::from(json!([1, 2]));
        assert!(matches!(array.classify(), FieldMatch::Set(items) if items.len() == 2));

        let operators = QueryValue::from(json!({ "$gt": 1 }));
        assert!(matches!(
            operators.classify(),
            FieldMatch::Operators(entries) if entries.len() == 1
        ));

        let date = QueryValue::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(matches!(date.classify(), FieldMatch::Literal(QueryValue::Date(_))));

        assert!(matches!(QueryValue::Null.classify(), FieldMatch::Literal(QueryValue::Null)));
    }

    #[test]
    fn test_deserialize() {
        let value: QueryValue = serde_json::from_str(r#"{"Id": ["1", "2"]}"#).unwrap();
        assert_eq!(
            value,
            QueryValue::object([("Id", QueryValue::array(["1", "2"]))])
        );
    }

    #[test]
    fn test_option_and_float_conversions() {
        assert_eq!(QueryValue::from(None::<i32>), QueryValue::Null);
        assert_eq!(QueryValue::from(Some("x")), QueryValue::String("x".to_string()));
        assert_eq!(
            QueryValue::try_from(2.5).unwrap(),
            QueryValue::from(serde_json::json!(2.5))
        );
        assert!(QueryValue::try_from(f64::NAN).is_err());
        assert!(QueryValue::try_from(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display_renders_json() {
        let date = QueryValue::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(date.to_string(), "\"2024-01-01T00:00:00.000Z\"");
        assert_eq!(QueryValue::from(json!({ "a": [1] })).to_string(), r#"{"a":[1]}"#);
    }
}
