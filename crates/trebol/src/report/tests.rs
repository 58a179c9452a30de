//! Tests for the report configuration surface.
//!
//! Each group exercises one component: registry lookups, column
//! validation, convention dispatch, historical sub-blocks, and the closed
//! type enumerations.

#![allow(clippy::redundant_clone)]

use super::*;
use std::collections::BTreeMap;

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

mod registry_tests {
    use super::*;

    #[test]
    fn test_all_registered_names_are_valid() {
        for (name, _) in registered_columns() {
            assert!(is_valid_column(name), "registry entry {name} not found");
        }
    }

    #[test]
    fn test_registry_size() {
        assert_eq!(registered_columns().count(), 30);
    }

    #[test]
    fn test_unregistered_names_are_invalid() {
        assert!(!is_valid_column("bogusColumn"));
        assert!(!is_valid_column(""));
        assert!(!is_valid_column("expression"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(is_valid_column("complexity"));
        assert!(!is_valid_column("Complexity"));
        assert!(is_valid_column("SUM"));
        assert!(!is_valid_column("sum"));
    }

    #[test]
    fn test_policy_assignment() {
        assert_eq!(lookup_column("complexity"), Some(FormatPolicy::RawOnly));
        assert_eq!(
            lookup_column("coveredStatements"),
            Some(FormatPolicy::MultiFormat)
        );
        assert_eq!(
            lookup_column("totalPercentageCovered"),
            Some(FormatPolicy::MultiFormat)
        );
        assert_eq!(lookup_column("nope"), None);
    }

    #[test]
    fn test_policy_allows() {
        assert!(FormatPolicy::RawOnly.allows("raw"));
        assert!(!FormatPolicy::RawOnly.allows("bar"));
        assert!(!FormatPolicy::RawOnly.allows("%"));
        for format in ["raw", "bar", "longbar", "%"] {
            assert!(FormatPolicy::MultiFormat.allows(format));
        }
        assert!(!FormatPolicy::MultiFormat.allows("pie"));
    }
}

mod column_tests {
    use super::*;
    use crate::TrebolError;

    #[test]
    fn test_unknown_column_rejected() {
        let err = ReportColumn::new("bogusColumn", attrs(&[])).unwrap_err();
        assert_eq!(
            err,
            TrebolError::UnknownColumn {
                column: "bogusColumn".to_string()
            }
        );
    }

    #[test]
    fn test_empty_attributes_accepted() {
        let col = ReportColumn::new("complexity", attrs(&[])).unwrap();
        assert_eq!(col.column(), "complexity");
        assert!(col.attributes().is_empty());
    }

    #[test]
    fn test_raw_only_column_accepts_raw() {
        let col = ReportColumn::new("complexity", attrs(&[("format", "raw")])).unwrap();
        assert_eq!(col.attributes()["format"], "raw");
    }

    #[test]
    fn test_raw_only_column_rejects_multi_formats() {
        for format in ["bar", "longbar", "%"] {
            let err = ReportColumn::new("complexity", attrs(&[("format", format)])).unwrap_err();
            assert_eq!(
                err,
                TrebolError::InvalidFormat {
                    column: "complexity".to_string(),
                    format: format.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_multi_format_column_accepts_all_formats() {
        for format in ["raw", "bar", "longbar", "%"] {
            assert!(ReportColumn::new("coveredStatements", attrs(&[("format", format)])).is_ok());
        }
    }

    #[test]
    fn test_multi_format_column_rejects_unknown_format() {
        let err =
            ReportColumn::new("coveredStatements", attrs(&[("format", "pie")])).unwrap_err();
        assert!(matches!(err, TrebolError::InvalidFormat { .. }));
    }

    #[test]
    fn test_min_max_accept_integers() {
        let col = ReportColumn::new(
            "totalPercentageCovered",
            attrs(&[("min", "0"), ("max", "100")]),
        )
        .unwrap();
        assert_eq!(col.attributes()["min"], "0");
        assert_eq!(col.attributes()["max"], "100");
    }

    #[test]
    fn test_min_accepts_negative_integers() {
        assert!(ReportColumn::new("complexity", attrs(&[("min", "-10")])).is_ok());
    }

    #[test]
    fn test_min_max_reject_non_integers() {
        for value in ["ten", "1.5", "", "0x10", "1e3"] {
            let err = ReportColumn::new("complexity", attrs(&[("max", value)])).unwrap_err();
            assert_eq!(
                err,
                TrebolError::InvalidNumber {
                    column: "complexity".to_string(),
                    value: value.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_scope_accepts_fixed_set() {
        for scope in ["package", "class", "method"] {
            assert!(ReportColumn::new("complexity", attrs(&[("scope", scope)])).is_ok());
        }
    }

    #[test]
    fn test_scope_rejects_other_values() {
        for scope in ["file", "Package", "packages", ""] {
            let err = ReportColumn::new("complexity", attrs(&[("scope", scope)])).unwrap_err();
            assert!(matches!(err, TrebolError::InvalidScope { .. }));
        }
    }

    #[test]
    fn test_unknown_attribute_rejected_regardless_of_value() {
        let err = ReportColumn::new("complexity", attrs(&[("color", "red")])).unwrap_err();
        assert_eq!(
            err,
            TrebolError::UnknownAttribute {
                column: "complexity".to_string(),
                attribute: "color".to_string(),
            }
        );
    }

    #[test]
    fn test_all_four_attributes_together() {
        let col = ReportColumn::new(
            "coveredMethods",
            attrs(&[
                ("format", "longbar"),
                ("min", "0"),
                ("max", "50"),
                ("scope", "method"),
            ]),
        )
        .unwrap();
        assert_eq!(col.attributes().len(), 4);
    }

    #[test]
    fn test_json_round_trip() {
        let col =
            ReportColumn::new("coveredStatements", attrs(&[("format", "bar")])).unwrap();
        let json = col.to_json().unwrap();
        let back = ReportColumn::from_json(&json).unwrap();
        assert_eq!(back, col);
    }

    #[test]
    fn test_from_json_revalidates_unknown_column() {
        let err =
            ReportColumn::from_json(r#"{"column":"bogus","attributes":{}}"#).unwrap_err();
        assert!(matches!(err, TrebolError::UnknownColumn { .. }));
    }

    #[test]
    fn test_from_json_revalidates_attributes() {
        let err = ReportColumn::from_json(
            r#"{"column":"complexity","attributes":{"format":"bar"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TrebolError::InvalidFormat { .. }));
    }
}

mod columns_convention_tests {
    use super::*;
    use crate::TrebolError;

    #[test]
    fn test_new_convention_is_empty() {
        let convention = ColumnsConvention::new();
        assert!(convention.is_empty());
        assert!(convention.columns().is_empty());
    }

    #[test]
    fn test_configure_preserves_call_order() {
        let mut convention = ColumnsConvention::new();
        convention
            .configure("complexity", attrs(&[("format", "raw")]))
            .unwrap();
        convention
            .configure("coveredStatements", attrs(&[("format", "bar")]))
            .unwrap();

        let columns = convention.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].column(), "complexity");
        assert_eq!(columns[1].column(), "coveredStatements");
    }

    #[test]
    fn test_duplicate_names_permitted_and_preserved() {
        let mut convention = ColumnsConvention::new();
        convention
            .configure("coveredMethods", attrs(&[("scope", "class")]))
            .unwrap();
        convention
            .configure("coveredMethods", attrs(&[("scope", "method")]))
            .unwrap();

        assert_eq!(convention.columns().len(), 2);
        assert_eq!(convention.columns()[0].attributes()["scope"], "class");
        assert_eq!(convention.columns()[1].attributes()["scope"], "method");
    }

    #[test]
    fn test_unsupported_name_rejected_without_mutation() {
        let mut convention = ColumnsConvention::new();
        convention
            .configure("complexity", attrs(&[("format", "raw")]))
            .unwrap();

        let err = convention
            .configure("bogusColumn", attrs(&[("format", "raw")]))
            .unwrap_err();
        assert_eq!(
            err,
            TrebolError::UnsupportedColumn {
                column: "bogusColumn".to_string()
            }
        );
        assert_eq!(convention.columns().len(), 1);
    }

    #[test]
    fn test_validation_failure_leaves_sequence_untouched() {
        let mut convention = ColumnsConvention::new();
        let err = convention
            .configure("complexity", attrs(&[("format", "bar")]))
            .unwrap_err();
        assert!(matches!(err, TrebolError::InvalidFormat { .. }));
        assert!(convention.is_empty());
    }

    #[test]
    fn test_json_columns_in_order() {
        let mut convention = ColumnsConvention::new();
        convention
            .configure("complexity", attrs(&[("format", "raw")]))
            .unwrap();
        convention.configure("files", attrs(&[])).unwrap();

        let json = convention.json_columns().unwrap();
        assert_eq!(json.len(), 2);
        assert!(json[0].contains("complexity"));
        assert!(json[1].contains("files"));
    }
}

mod historical_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let convention = HistoricalConvention::new();
        assert!(!convention.enabled);
        assert_eq!(convention.history_includes, "clover-*.xml.gz");
        assert_eq!(convention.package_filter, None);
        assert_eq!(convention.from, None);
        assert_eq!(convention.to, None);
        assert!(convention.added_block().is_none());
        assert!(convention.movers().is_empty());
    }

    #[test]
    fn test_added_defaults() {
        let added = HistoricalAdded::default();
        assert_eq!(added.range, 5);
        assert_eq!(added.interval, None);
    }

    #[test]
    fn test_mover_defaults() {
        let mover = HistoricalMover::default();
        assert_eq!(mover.threshold, 1);
        assert_eq!(mover.range, 5);
        assert_eq!(mover.interval, None);
    }

    #[test]
    fn test_added_configurator_mutates_fresh_block() {
        let mut convention = HistoricalConvention::new();
        convention.added(|a| {
            a.range = 10;
            a.interval = Some("4 weeks".to_string());
        });

        let added = convention.added_block().unwrap();
        assert_eq!(added.range, 10);
        assert_eq!(added.interval.as_deref(), Some("4 weeks"));
    }

    #[test]
    fn test_second_added_call_overwrites_first() {
        let mut convention = HistoricalConvention::new();
        convention.added(|a| a.range = 10);
        convention.added(|a| a.range = 20);

        assert_eq!(convention.added_block().unwrap().range, 20);
    }

    #[test]
    fn test_movers_accumulate_in_call_order() {
        let mut convention = HistoricalConvention::new();
        convention.mover(|m| m.threshold = 1);
        convention.mover(|m| m.threshold = 2);
        convention.mover(|m| m.threshold = 3);

        let thresholds: Vec<i32> = convention.movers().iter().map(|m| m.threshold).collect();
        assert_eq!(thresholds, vec![1, 2, 3]);
    }

    #[test]
    fn test_identical_movers_not_deduplicated() {
        let mut convention = HistoricalConvention::new();
        convention.mover(|_| {});
        convention.mover(|_| {});
        assert_eq!(convention.movers().len(), 2);
    }

    #[test]
    fn test_added_json_round_trip() {
        let added = HistoricalAdded {
            interval: Some("2 months".to_string()),
            ..HistoricalAdded::default()
        };
        let back = HistoricalAdded::from_json(&added.to_json().unwrap()).unwrap();
        assert_eq!(back, added);
    }

    #[test]
    fn test_mover_json_round_trip() {
        let mover = HistoricalMover {
            threshold: 3,
            range: 7,
            interval: Some("1 week".to_string()),
        };
        let back = HistoricalMover::from_json(&mover.to_json().unwrap()).unwrap();
        assert_eq!(back, mover);
    }

    #[test]
    fn test_json_added_absent_when_unconfigured() {
        let convention = HistoricalConvention::new();
        assert_eq!(convention.json_added().unwrap(), None);
    }

    #[test]
    fn test_json_movers_in_order() {
        let mut convention = HistoricalConvention::new();
        convention.mover(|m| m.range = 1);
        convention.mover(|m| m.range = 2);

        let json = convention.json_movers().unwrap();
        assert_eq!(json.len(), 2);
        assert!(json[0].contains("\"range\":1"));
        assert!(json[1].contains("\"range\":2"));
    }
}

mod report_type_tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_strings() {
        assert_eq!(ReportType::Xml.format(), "xml");
        assert_eq!(ReportType::Json.format(), "json");
        assert_eq!(ReportType::Html.format(), "html");
        assert_eq!(ReportType::Pdf.format(), "pdf");
    }

    #[test]
    fn test_all_formats_in_declaration_order() {
        assert_eq!(ReportType::all_formats(), ["xml", "json", "html", "pdf"]);
    }

    #[test]
    fn test_from_str_accepts_format_strings() {
        for format in ReportType::all_formats() {
            let parsed = ReportType::from_str(format).unwrap();
            assert_eq!(parsed.format(), format);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(ReportType::from_str("csv").is_err());
        assert!(ReportType::from_str("XML").is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ReportType::Pdf).unwrap();
        assert_eq!(json, "\"pdf\"");
        let back: ReportType = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(back, ReportType::Html);
    }
}

mod flush_policy_tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_policies_in_declaration_order() {
        assert_eq!(
            FlushPolicy::all_policies(),
            ["directed", "interval", "threaded"]
        );
    }

    #[test]
    fn test_from_str_round_trip() {
        for policy in FlushPolicy::all_policies() {
            let parsed = FlushPolicy::from_str(policy).unwrap();
            assert_eq!(parsed.policy(), policy);
        }
        assert!(FlushPolicy::from_str("eager").is_err());
    }
}

mod parse_properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any i32 rendered as decimal is a valid min/max value.
        #[test]
        fn prop_decimal_integers_accepted(n: i32) {
            let result = ReportColumn::new("complexity", attrs(&[("min", &n.to_string())]));
            prop_assert!(result.is_ok());
        }

        /// Strings with any non-digit, non-sign character are rejected.
        #[test]
        fn prop_non_numeric_rejected(s in "[a-zA-Z]{1,8}") {
            let result = ReportColumn::new("complexity", attrs(&[("max", &s)]));
            prop_assert!(result.is_err());
        }

        /// Registry lookups never panic on arbitrary input.
        #[test]
        fn prop_lookup_total(s in ".*") {
            let _ = is_valid_column(&s);
            let _ = lookup_column(&s);
        }
    }
}
