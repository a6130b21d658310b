use payroll_client::documents;
use payroll_client::validation::{Schema, BUNDLED_SCHEMA};
use payroll_client::OperationKind;

#[test]
fn registry_conforms_to_bundled_schema() {
    let schema = Schema::bundled().unwrap();
    for doc in documents::registry() {
        let violations = schema.validate(doc);
        assert!(violations.is_empty(), "{}: {violations:?}", doc.name);
    }
}

#[test]
fn schema_drift_is_detected() {
    // A live schema where the generated capacity column was dropped.
    let drifted = BUNDLED_SCHEMA.replacen("  payrollCapacityHours: Numeric\n", "", 1);
    let schema = Schema::parse(&drifted).unwrap();

    let violations = schema.validate_all(documents::registry());
    assert!(!violations.is_empty());
    assert!(violations.iter().any(|v| {
        v.operation == "GetTeamWorkloadOptimized"
            && v.message == "field WorkSchedule.payrollCapacityHours does not exist"
    }));
    assert!(violations
        .iter()
        .all(|v| v.message.contains("payrollCapacityHours")));
}

#[test]
fn dropped_filter_column_is_detected() {
    // The column still exists but is no longer filterable.
    let drifted = BUNDLED_SCHEMA.replacen("  adjustedEftDate: DateComparisonExp\n", "", 1);
    let schema = Schema::parse(&drifted).unwrap();

    let mut failing: Vec<String> = schema
        .validate_all(documents::registry())
        .into_iter()
        .map(|v| {
            assert!(
                v.message.ends_with("input PayrollDatesBoolExp has no field adjustedEftDate"),
                "{v}"
            );
            v.operation
        })
        .collect();
    failing.sort();
    failing.dedup();
    assert_eq!(failing, vec!["GetDashboardStats", "GetUpcomingPayrollDates"]);
}

#[test]
fn subscription_root_is_required_for_subscriptions() {
    let without_subscriptions = BUNDLED_SCHEMA.replacen("  subscription: subscription_root\n", "", 1);
    let schema = Schema::parse(&without_subscriptions).unwrap();

    let failing: Vec<&str> = schema
        .validate_all(documents::registry())
        .into_iter()
        .map(|v| documents::find(&v.operation).unwrap().name)
        .collect();
    let subscriptions: Vec<&str> = documents::of_kind(OperationKind::Subscription)
        .map(|doc| doc.name)
        .collect();
    assert_eq!(failing, subscriptions);
}
