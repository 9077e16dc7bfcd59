//! Literal formatting tests

#[cfg(test)]
mod tests {
    use crate::errors::TranslateError;
    use crate::query_builder::format::{
        format_date, format_literal, format_value, is_iso_date, quote,
    };
    use crate::query_builder::operators::ComparisonOperator;
    use crate::value::QueryValue;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_iso_date_predicate_accepts_extended_formats() {
        for value in [
            "1999-01-01",
            "1999-01",
            "2024-02-29",
            "2024-06-15T10",
            "2024-06-15T10:30",
            "2024-06-15T10:30:45",
            "2024-06-15T10:30:45.123",
            "2024-06-15T10:30:45,5",
            "2024-06-15 10:30:45",
            "2024-06-15T10:30:45Z",
            "2024-06-15T10:30:45.000Z",
            "2024-06-15T10:30:45+02:00",
            "2024-06-15T10:30:45-0530",
            "2024-06-15T10:30+01",
        ] {
            assert!(is_iso_date(value), "{} should be a date", value);
        }
    }

    #[test]
    fn test_iso_date_predicate_rejects_other_strings() {
        for value in [
            "",
            "vini",
            "%vini%",
            "2020",
            "20200101",
            "123456789101112",
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-06-31",
            "2024-06-15T25:00",
            "2024-06-15T10:60",
            "2024-06-15T10:30:45+24:00",
            "2024-06-15T",
            " 2024-06-15",
            "2024-06-15Z",
            "15/06/2024",
        ] {
            assert!(!is_iso_date(value), "{} should not be a date", value);
        }
    }

    #[test]
    fn test_format_literal_scalars() {
        assert_eq!(format_literal(&QueryValue::Null).unwrap(), "null");
        assert_eq!(format_literal(&true.into()).unwrap(), "true");
        assert_eq!(format_literal(&false.into()).unwrap(), "false");
        assert_eq!(format_literal(&42.into()).unwrap(), "42");
        assert_eq!(format_literal(&(-7).into()).unwrap(), "-7");
        assert_eq!(format_literal(&QueryValue::try_from(1.55).unwrap()).unwrap(), "1.55");
        assert_eq!(format_literal(&"Vini".into()).unwrap(), "'Vini'");
    }

    #[test]
    fn test_format_literal_date_string_is_bare() {
        assert_eq!(format_literal(&"2024-06-15".into()).unwrap(), "2024-06-15");
        assert_eq!(
            format_literal(&"2024-06-15T10:30:45Z".into()).unwrap(),
            "2024-06-15T10:30:45Z"
        );
    }

    #[test]
    fn test_format_literal_date_value() {
        let date = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 45).unwrap();
        assert_eq!(format_date(&date), "2024-06-15T10:30:45.000Z");
        assert_eq!(
            format_literal(&date.into()).unwrap(),
            "2024-06-15T10:30:45.000Z"
        );
    }

    #[test]
    fn test_format_literal_compound_values() {
        assert!(format_literal(&QueryValue::from(json!([1]))).is_none());
        assert!(format_literal(&QueryValue::from(json!({ "a": 1 }))).is_none());
    }

    #[test]
    fn test_format_is_idempotent() {
        let value = QueryValue::from(json!("O'Brien"));
        let first = format_literal(&value).unwrap();
        let second = format_literal(&value).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_quote_escapes_single_quotes() {
        assert_eq!(quote("O'Brien"), r"'O\'Brien'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_quote_escapes_backslashes() {
        assert_eq!(quote("C:\\"), r"'C:\\'");
        assert_eq!(quote(r"a\'b"), r"'a\\\'b'");
        assert_eq!(quote(r"\\server\share"), r"'\\\\server\\share'");
    }

    #[test]
    fn test_quote_keeps_like_escapes() {
        assert_eq!(quote(r"100\%"), r"'100\%'");
        assert_eq!(quote(r"a\_b%"), r"'a\_b%'");
    }

    #[test]
    fn test_format_value_list_preserves_order() {
        let values = QueryValue::from(json!(["b", 3, "a", 1.5, false, null]));
        assert_eq!(
            format_value("X", ComparisonOperator::In, &values).unwrap(),
            "('b',3,'a',1.5,false,null)"
        );
    }

    #[test]
    fn test_format_value_list_quotes_date_strings() {
        let values = QueryValue::from(json!(["2024-06-15"]));
        assert_eq!(
            format_value("X", ComparisonOperator::NotIn, &values).unwrap(),
            "('2024-06-15')"
        );

        let date = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let values = QueryValue::array([date]);
        assert_eq!(
            format_value("X", ComparisonOperator::In, &values).unwrap(),
            "(2024-06-15T00:00:00.000Z)"
        );
    }

    #[test]
    fn test_format_value_list_rejects_compound_elements() {
        for values in [json!([1, { "a": 1 }]), json!([[1, 2]])] {
            let result = format_value("X", ComparisonOperator::In, &QueryValue::from(values));
            match result {
                Err(TranslateError::InvalidArrayElement { field, .. }) => assert_eq!(field, "X"),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_format_value_empty_list() {
        let result = format_value("X", ComparisonOperator::In, &QueryValue::from(json!([])));
        assert!(matches!(
            result,
            Err(TranslateError::InvalidValueForOperator { .. })
        ));
    }

    #[test]
    fn test_format_value_scalar_operator() {
        let value = QueryValue::from(json!("%acme%"));
        assert_eq!(
            format_value("Name", ComparisonOperator::Like, &value).unwrap(),
            "'%acme%'"
        );
    }
}
