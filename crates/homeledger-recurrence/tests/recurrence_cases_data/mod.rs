use chrono::NaiveDate;
use homeledger_recurrence::{
    FrequencyConfig, FrequencyKind, RecurrenceResult, RecurrenceRule, upcoming_occurrences,
};

pub struct RecurrenceCase {
    pub name: &'static str,
    pub kind: &'static str,
    pub config: &'static str,
    pub anchor: Option<&'static str>,
    pub from: &'static str,
    /// Upcoming occurrences strictly after `from`; `None` when the rule must be rejected.
    pub expected: Option<&'static [&'static str]>,
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "monthly_fifteenth",
            kind: "monthly",
            config: r#"{"day_of_month": 15}"#,
            anchor: None,
            from: "2024-01-01",
            expected: Some(&["2024-01-15", "2024-02-15", "2024-03-15"]),
        },
        RecurrenceCase {
            name: "monthly_from_on_candidate",
            kind: "monthly",
            config: r#"{"day_of_month": 15}"#,
            anchor: None,
            from: "2024-01-15",
            expected: Some(&["2024-02-15"]),
        },
        RecurrenceCase {
            name: "monthly_day_31_clamps",
            kind: "monthly",
            config: r#"{"day_of_month": 31}"#,
            anchor: None,
            from: "2024-01-31",
            expected: Some(&["2024-02-29", "2024-03-31", "2024-04-30"]),
        },
        RecurrenceCase {
            name: "monthly_end_of_month_leap_year",
            kind: "monthly",
            config: r#"{"is_end_of_month": true}"#,
            anchor: None,
            from: "2024-02-01",
            expected: Some(&["2024-02-29", "2024-03-31"]),
        },
        RecurrenceCase {
            name: "monthly_end_of_month_common_year",
            kind: "monthly",
            config: r#"{"is_end_of_month": true}"#,
            anchor: None,
            from: "2023-02-01",
            expected: Some(&["2023-02-28"]),
        },
        RecurrenceCase {
            name: "monthly_end_of_month_from_last_day",
            kind: "monthly",
            config: r#"{"is_end_of_month": true}"#,
            anchor: None,
            from: "2024-01-31",
            expected: Some(&["2024-02-29"]),
        },
        RecurrenceCase {
            name: "monthly_missing_day",
            kind: "monthly",
            config: "{}",
            anchor: None,
            from: "2024-01-01",
            expected: None,
        },
        RecurrenceCase {
            name: "weekly_friday",
            kind: "weekly",
            config: r#"{"day_of_week": "friday"}"#,
            anchor: None,
            from: "2024-01-10",
            expected: Some(&["2024-01-12", "2024-01-19"]),
        },
        RecurrenceCase {
            name: "weekly_from_on_weekday",
            kind: "weekly",
            config: r#"{"day_of_week": "wednesday"}"#,
            anchor: None,
            from: "2024-01-10",
            expected: Some(&["2024-01-17"]),
        },
        RecurrenceCase {
            name: "weekly_unknown_weekday",
            kind: "weekly",
            config: r#"{"day_of_week": "someday"}"#,
            anchor: None,
            from: "2024-01-10",
            expected: None,
        },
        RecurrenceCase {
            name: "biweekly_anchored",
            kind: "biweekly",
            config: r#"{"day_of_week": "friday"}"#,
            anchor: Some("2024-01-05"),
            from: "2024-01-01",
            expected: Some(&["2024-01-05", "2024-01-19", "2024-02-02"]),
        },
        RecurrenceCase {
            name: "biweekly_without_anchor",
            kind: "biweekly",
            config: r#"{"day_of_week": "friday"}"#,
            anchor: None,
            from: "2024-01-01",
            expected: None,
        },
        RecurrenceCase {
            name: "semi_monthly_first_and_fifteenth",
            kind: "semi_monthly",
            config: r#"{"first_day": 1, "second_day": 15}"#,
            anchor: None,
            from: "2024-01-01",
            expected: Some(&["2024-01-15", "2024-02-01", "2024-02-15"]),
        },
        RecurrenceCase {
            name: "semi_monthly_both_passed",
            kind: "semi_monthly",
            config: r#"{"first_day": 1, "second_day": 15}"#,
            anchor: None,
            from: "2024-01-20",
            expected: Some(&["2024-02-01"]),
        },
        RecurrenceCase {
            name: "semi_monthly_end_of_month",
            kind: "semi_monthly",
            config: r#"{"first_day": 15, "is_second_end_of_month": true}"#,
            anchor: None,
            from: "2024-02-15",
            expected: Some(&["2024-02-29", "2024-03-15"]),
        },
        RecurrenceCase {
            name: "semi_monthly_days_out_of_order",
            kind: "semi_monthly",
            config: r#"{"first_day": 20, "second_day": 5}"#,
            anchor: None,
            from: "2024-01-25",
            expected: Some(&["2024-02-20", "2024-03-20"]),
        },
        RecurrenceCase {
            name: "quarterly_regular",
            kind: "quarterly",
            config: r#"{"quarterly_type": "regular", "day_of_month": 15}"#,
            anchor: None,
            from: "2024-02-10",
            expected: Some(&["2024-04-15", "2024-07-15", "2024-10-15", "2025-01-15"]),
        },
        RecurrenceCase {
            name: "quarterly_custom_mid_year",
            kind: "quarterly",
            config: r#"{"quarterly_type": "custom", "custom_dates": ["03-15", "06-18", "09-19", "12-09"]}"#,
            anchor: None,
            from: "2024-07-01",
            expected: Some(&["2024-09-19", "2024-12-09", "2025-03-15"]),
        },
        RecurrenceCase {
            name: "quarterly_custom_year_end",
            kind: "quarterly",
            config: r#"{"quarterly_type": "custom", "custom_dates": ["03-15", "06-18", "09-19", "12-09"]}"#,
            anchor: None,
            from: "2024-12-10",
            expected: Some(&["2025-03-15"]),
        },
        RecurrenceCase {
            name: "quarterly_custom_declaration_order",
            kind: "quarterly",
            config: r#"{"quarterly_type": "custom", "custom_dates": ["12-01", "03-01", "06-01", "09-01"]}"#,
            anchor: None,
            from: "2024-02-01",
            expected: Some(&["2024-12-01", "2025-12-01"]),
        },
        RecurrenceCase {
            name: "quarterly_custom_wrong_count",
            kind: "quarterly",
            config: r#"{"quarterly_type": "custom", "custom_dates": ["01-01"]}"#,
            anchor: None,
            from: "2024-01-01",
            expected: None,
        },
        RecurrenceCase {
            name: "yearly_tax_day",
            kind: "yearly",
            config: r#"{"month": 4, "day": 15}"#,
            anchor: None,
            from: "2024-01-01",
            expected: Some(&["2024-04-15", "2025-04-15"]),
        },
        RecurrenceCase {
            name: "yearly_from_on_date",
            kind: "yearly",
            config: r#"{"month": 4, "day": 15}"#,
            anchor: None,
            from: "2024-04-15",
            expected: Some(&["2025-04-15"]),
        },
        RecurrenceCase {
            name: "yearly_leap_day",
            kind: "yearly",
            config: r#"{"month": 2, "day": 29}"#,
            anchor: None,
            from: "2024-03-01",
            expected: Some(&["2025-02-28", "2026-02-28", "2027-02-28", "2028-02-29"]),
        },
        RecurrenceCase {
            name: "yearly_month_out_of_range",
            kind: "yearly",
            config: r#"{"month": 13, "day": 1}"#,
            anchor: None,
            from: "2024-01-01",
            expected: None,
        },
        RecurrenceCase {
            name: "per_paycheck_has_no_next_date",
            kind: "per_paycheck",
            config: r#"{"paycheck_trigger": "period_start"}"#,
            anchor: None,
            from: "2024-01-01",
            expected: None,
        },
    ]
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Bad date {value}: {err}"))
}

fn run_case(case: &RecurrenceCase, count: usize) -> RecurrenceResult<Vec<NaiveDate>> {
    let kind = FrequencyKind::parse(case.kind)
        .unwrap_or_else(|| panic!("Case {} has unknown kind {}", case.name, case.kind));
    let config: FrequencyConfig = serde_json::from_str(case.config)
        .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));
    let rule = RecurrenceRule::from_config(kind, &config)?;
    upcoming_occurrences(
        &rule,
        case.anchor.map(parse_date),
        parse_date(case.from),
        count,
    )
}

pub fn assert_case(case: &RecurrenceCase) {
    let Some(expected) = case.expected else {
        assert!(
            run_case(case, 1).is_err(),
            "Case {} should have been rejected",
            case.name
        );
        return;
    };

    let actual = run_case(case, expected.len())
        .unwrap_or_else(|err| panic!("Case {} failed: {}", case.name, err));
    let expected: Vec<NaiveDate> = expected.iter().copied().map(parse_date).collect();
    assert_eq!(actual, expected, "Case {} did not match", case.name);
}
