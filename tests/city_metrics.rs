use civic_metrics::{
    formulas, CapacityService, City, Describable, MetricError, Reportable, ResortCity, Service,
};

fn sochi() -> City {
    City::new("Sochi", 350.0, 300_000, 10, 150.0).with_green_threshold(0.5)
}

#[test]
fn density_is_exact_division() {
    for (population, area) in [(1_i64, 3.0), (300_000, 350.0), (7, 0.1), (0, 42.0)] {
        assert_eq!(
            formulas::density(population, area).unwrap(),
            population as f64 / area
        );
    }
}

#[test]
fn provision_uses_default_indices() {
    for (schools, population) in [(1, 10_i64), (10, 300_000), (55, 1_234_567)] {
        let city = City::new("Any", 1.0, population, schools, 0.0);
        assert_eq!(
            city.provision().unwrap(),
            (1000.0 * schools as f64) / (0.3 * population as f64)
        );
    }
}

#[test]
fn boundary_ratio_is_not_green() {
    let city = City::new("Boundary", 200.0, 10, 1, 100.0).with_green_threshold(0.5);
    assert!(!city.is_green().unwrap());
    let greener = City::new("Greener", 200.0, 10, 1, 100.5).with_green_threshold(0.5);
    assert!(greener.is_green().unwrap());
}

#[test]
fn sochi_scenario_figures() {
    let city = sochi();
    assert!((city.density().unwrap() - 857.142_857_142_857).abs() < 1e-9);
    assert!(!city.is_green().unwrap());

    let resort = ResortCity::new(sochi(), 10_000_000);
    assert!((resort.annual_density().unwrap() - 29_428.571_428_571).abs() < 1e-6);
    assert!((resort.tourist_ratio().unwrap() - 33.333_333_333).abs() < 1e-6);
}

#[test]
fn resort_report_has_no_tourism_keys() {
    let resort = ResortCity::new(sochi(), 10_000_000);
    let report = resort.report().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 7);
    assert!(!keys.iter().any(|k| *k == "annual_tourists" || *k == "tourist_ratio"));
}

#[test]
fn report_serializes_fields_in_order() {
    let json = serde_json::to_string(&sochi().report().unwrap()).unwrap();
    let positions: Vec<usize> = [
        "\"name\"",
        "\"area\"",
        "\"population\"",
        "\"density\"",
        "\"schools\"",
        "\"provision\"",
        "\"is_green\"",
    ]
    .iter()
    .map(|key| json.find(key).expect("key present"))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn zero_divisors_surface_to_caller() {
    let flat = City::new("Nowhere", 0.0, 10, 1, 0.0);
    assert_eq!(
        flat.density(),
        Err(MetricError::DivisionByZero { divisor: "area" })
    );
    assert!(flat.is_green().is_err());

    let empty = ResortCity::new(City::new("Empty", 5.0, 0, 0, 1.0), 100);
    assert_eq!(
        empty.tourist_ratio(),
        Err(MetricError::DivisionByZero {
            divisor: "population"
        })
    );
    assert_eq!(empty.annual_density().unwrap(), 20.0);
}

#[test]
fn services_describe_themselves() {
    let hospital =
        Service::new("138 больница", "ул 10й капельницы, дом 13", 1905).with_reference_year(2026);
    assert_eq!(hospital.age(), 121);

    let school = CapacityService::new(
        Service::new("Школа 7", "улица Колотушкина дом Пушкина", 1980),
        1000,
    );
    let services: Vec<&dyn Describable> = vec![&hospital, &school];
    let names: Vec<&str> = services.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["138 больница", "Школа 7"]);
    assert_eq!(school.describe_capacity(), "Школа 7 holds 1000 people");
}
