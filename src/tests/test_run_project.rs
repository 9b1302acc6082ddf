use crate::core::daily_cost::calculate_daily_cost;
use crate::core::energy_waste::calculator::Severity;
use crate::core::home::HeatingType;
use crate::core::space_heat_demand::schedule::HeatingRates;
use crate::core::units::round_to_fixed;
use crate::errors::{CalculationError, CostSaverError};
use crate::output::{SinkOutput, StringOutput};
use crate::{run_project, ProjectFlags};
use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::Value;

#[fixture]
fn project_json() -> &'static str {
    r#"{
        "home": {"postcode": "SW1A 1AA", "homeType": "detached", "heatingType": "gas",
                 "occupants": 3, "constructionYear": 1965, "insulationLevel": "poor"},
        "environment": {"temperature": 4.0, "windSpeed": 5.0, "humidity": 80.0, "month": 0},
        "hourlyTemperatures": [4.0, 3.5, 3.0, 2.5],
        "appliances": [{"name": "fridge", "quantity": 1, "hoursPerDay": 24},
                       {"name": "washing machine", "quantity": 1, "hoursPerDay": 1}],
        "bill": {"monthlyBill": 250.0, "unitRate": 35.0, "standingCharge": 80.0}
    }"#
}

#[rstest]
fn test_run_project_calculates_every_section(project_json: &str) {
    let output = StringOutput::new();

    let results = run_project(project_json.as_bytes(), &output, &ProjectFlags::empty()).unwrap();

    assert!(results.home_validation.unwrap().valid);
    assert!(results.heating_load_kwh.unwrap() > 0.);
    assert!(results.heat_loss.unwrap().total > 0.);
    let schedule = results.schedule.unwrap();
    assert_eq!(schedule.len(), 24);
    assert_eq!(schedule[23].temperature, 4.);
    assert_eq!(results.appliances.unwrap().total_daily, 10.2);
    assert!(results.waste_validation.unwrap().valid);
    assert_eq!(results.waste.unwrap().severity, Severity::High);
    assert!(results.household_cost.unwrap().daily_cost.total_cost > 0.);

    assert_eq!(output.file_names(), vec!["results.json", "schedule.csv"]);
}

#[rstest]
fn test_run_project_costs_household_with_heating_load(project_json: &str) {
    let results = run_project(project_json.as_bytes(), SinkOutput, &ProjectFlags::empty()).unwrap();

    let heating_load_kwh = results.heating_load_kwh.unwrap();
    let household_cost = results.household_cost.unwrap();
    // detached home, 3 occupants
    assert_relative_eq!(household_cost.base_consumption_kwh, 19.84, max_relative = 1e-12);
    assert_eq!(
        household_cost.daily_cost,
        calculate_daily_cost(
            household_cost.base_consumption_kwh,
            heating_load_kwh,
            &HeatingType::Gas,
            &HeatingRates::default()
        )
    );
    assert!(household_cost
        .monthly_projection
        .upgrade_recommendations
        .iter()
        .any(|recommendation| recommendation.starts_with("Loft insulation")));
}

#[rstest]
#[case(r#"{"home": {"homeType": "flat", "heatingType": "gas", "occupants": 1}}"#, 2.91)]
#[case(
    r#"{"home": {"homeType": "flat", "heatingType": "mixed", "occupants": 1},
        "rates": {"electricity": 0.3}}"#,
    3.35
)]
fn test_run_project_costs_household_without_temperatures(
    #[case] json: &str,
    #[case] total_cost: f64,
) {
    let results = run_project(json.as_bytes(), SinkOutput, &ProjectFlags::empty()).unwrap();

    let daily_cost = results.household_cost.unwrap().daily_cost;
    assert_eq!(daily_cost.heating_cost, 0.);
    assert_eq!(daily_cost.total_cost, total_cost);
}

#[rstest]
fn test_run_project_costs_heating_from_schedule_without_environment() {
    let json = r#"{
        "home": {"homeType": "terraced", "heatingType": "electricity"},
        "hourlyTemperatures": [2.0]
    }"#;

    let results = run_project(json.as_bytes(), SinkOutput, &ProjectFlags::empty()).unwrap();

    let scheduled_kwh: f64 = results
        .schedule
        .unwrap()
        .iter()
        .map(|hour| hour.heating_kwh)
        .sum();
    let household_cost = results.household_cost.unwrap();
    assert!(household_cost.daily_cost.heating_cost > 0.);
    assert_eq!(
        household_cost.daily_cost.heating_cost,
        round_to_fixed(scheduled_kwh * 0.28, 2)
    );
}

#[rstest]
#[case(" sw1a1aa ", Some("SW1A 1AA"))]
#[case("ec1a   1bb", Some("EC1A 1BB"))]
#[case("nowhere", None)]
fn test_run_project_reports_canonical_postcode(
    #[case] postcode: &str,
    #[case] expected: Option<&str>,
) {
    let json = serde_json::json!({
        "home": {"postcode": postcode, "homeType": "flat", "heatingType": "gas"}
    })
    .to_string();

    let results =
        run_project(json.as_bytes(), SinkOutput, &ProjectFlags::VALIDATE_ONLY).unwrap();

    assert_eq!(results.postcode.as_deref(), expected);
    assert_eq!(results.home_validation.unwrap().valid, expected.is_some());
}

#[rstest]
fn test_run_project_writes_results_json(project_json: &str) {
    let output = StringOutput::new();

    run_project(project_json.as_bytes(), &output, &ProjectFlags::empty()).unwrap();

    let json: Value = serde_json::from_str(&output.contents("results", "json").unwrap()).unwrap();
    assert_eq!(json["waste"]["severity"], "high");
    assert_eq!(json["wasteValidation"]["valid"], true);
    assert_eq!(json["appliances"]["breakdown"]["fridge"], 9.6);
    assert_eq!(json["schedule"][0]["hour"], 0);
    assert!(json["schedule"][0]["heatingKWh"].is_f64());
}

#[rstest]
fn test_run_project_writes_schedule_csv_with_units_row(project_json: &str) {
    let output = StringOutput::new();

    run_project(project_json.as_bytes(), &output, &ProjectFlags::empty()).unwrap();

    let csv = output.contents("schedule", "csv").unwrap();
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 26);
    assert_eq!(
        lines[0],
        "Hour,Outdoor temperature,Heating energy,Cost,Heating on"
    );
    assert_eq!(lines[1], "[hour],[deg C],[kWh],[GBP],[bool]");
    assert!(lines[2].starts_with("0,4,"));
    assert!(lines[2].ends_with(",true"));
}

#[rstest]
fn test_run_project_writes_heat_loss_for_detailed_output(project_json: &str) {
    let output = StringOutput::new();

    let results =
        run_project(project_json.as_bytes(), &output, &ProjectFlags::DETAILED_OUTPUT).unwrap();

    let csv = output.contents("heat_loss", "csv").unwrap();
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "Element,Heat loss");
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[7],
        format!("total,{}", results.heat_loss.unwrap().total)
    );
}

#[rstest]
fn test_validate_only_skips_calculation_and_output() {
    let json = r#"{
        "home": {"postcode": "nowhere", "homeType": "castle", "heatingType": "gas"},
        "environment": {"temperature": 4.0},
        "bill": {"monthlyBill": 0, "unitRate": 30.0}
    }"#;
    let output = StringOutput::new();

    let results = run_project(json.as_bytes(), &output, &ProjectFlags::VALIDATE_ONLY).unwrap();

    assert_eq!(
        results.home_validation.unwrap().errors,
        vec![
            "Invalid UK postcode",
            "Invalid home type. Must be: flat, terraced, semi-detached, or detached"
        ]
    );
    assert_eq!(
        results.waste_validation.unwrap().errors,
        vec![
            "Monthly bill must be greater than £0",
            "Standing charge is required"
        ]
    );
    assert_eq!(results.heating_load_kwh, None);
    assert_eq!(results.waste, None);
    assert!(output.file_names().is_empty());
}

#[rstest]
fn test_invalid_bill_is_reported_not_calculated() {
    let json = r#"{"bill": {"monthlyBill": 135.0, "unitRate": 150.0, "standingCharge": 60.1}}"#;

    let results = run_project(json.as_bytes(), SinkOutput, &ProjectFlags::empty()).unwrap();

    assert!(!results.waste_validation.as_ref().unwrap().valid);
    assert_eq!(results.waste, None);
}

#[rstest]
fn test_malformed_json_is_invalid_request() {
    let result = run_project("{\"home\": ".as_bytes(), SinkOutput, &ProjectFlags::empty());

    assert!(matches!(result, Err(CostSaverError::InvalidRequest(_))));
}

#[rstest]
fn test_out_of_range_month_fails_calculation() {
    let json = r#"{
        "home": {"homeType": "flat", "heatingType": "electricity"},
        "environment": {"temperature": 4.0, "month": 12}
    }"#;

    let result = run_project(json.as_bytes(), SinkOutput, &ProjectFlags::empty());

    assert!(matches!(
        result,
        Err(CostSaverError::FailureInCalculation(
            CalculationError::InvalidMonth(12)
        ))
    ));
}

#[rstest]
fn test_empty_temperature_profile_fails_calculation() {
    let json = r#"{
        "home": {"homeType": "flat", "heatingType": "electricity"},
        "hourlyTemperatures": []
    }"#;

    let result = run_project(json.as_bytes(), SinkOutput, &ProjectFlags::empty());

    assert!(matches!(
        result,
        Err(CostSaverError::FailureInCalculation(
            CalculationError::EmptyTemperatureProfile
        ))
    ));
}
