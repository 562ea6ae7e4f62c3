use tsp_aco::AcoConfig;
use tsp_validation::{brute_force, compare, random_instance, ComparisonRecord};

#[test]
fn comparison_record_reports_both_solvers() {
    let instance = random_instance(8, 31);
    let config = AcoConfig::default().with_ants(30).with_iterations(200).with_seed(5);
    let record = compare(&instance, config).unwrap();

    let (_, optimum) = brute_force(&instance.distance_matrix()).unwrap();
    assert_eq!(record.n, 8);
    assert!((record.exact_cost - optimum).abs() < 1e-9);
    assert!(record.aco_cost + 1e-9 >= record.exact_cost);
    assert!(record.gap >= -1e-12);
    assert!(record.exact_nodes > 0);

    let json = serde_json::to_string(&record).unwrap();
    let back: ComparisonRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn comparison_rejects_bad_configuration() {
    let instance = random_instance(6, 1);
    let config = AcoConfig { evaporation: 0.0, ..AcoConfig::default() };
    assert!(compare(&instance, config).is_err());
}
