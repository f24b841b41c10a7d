use std::io::Write;

use jiff::SignedDuration;
use shuttle_matrix_providers::{
    error::MatrixError, travel_matrix_client::TravelMatrixClient,
    travel_matrix_provider::TravelMatrixProvider,
};
use shuttle_optimizer::{
    clustering::cluster_passengers,
    config::ShuttleConfig,
    error::{OptimizeError, ValidationError},
    json::types::JsonSolution,
    optimizer::{Solution, optimize},
    parsers::pickups_csv::read_pickups_file,
    problem::location::Location,
};

use crate::test_utils::{
    DESTINATION, GroupedProvider, IsolatedPointProvider, create_grouped_pickups, create_pickups,
    minivan_and_sedan_params,
};

mod test_utils;

fn sorted_passenger_stops(solution: &Solution) -> Vec<(u64, u64)> {
    let mut stops: Vec<(u64, u64)> = solution
        .passenger_stops()
        .map(|location| (location.lat().to_bits(), location.lng().to_bits()))
        .collect();
    stops.sort_unstable();
    stops
}

fn sorted_locations(locations: &[Location]) -> Vec<(u64, u64)> {
    let mut locations: Vec<(u64, u64)> = locations
        .iter()
        .map(|location| (location.lat().to_bits(), location.lng().to_bits()))
        .collect();
    locations.sort_unstable();
    locations
}

#[tokio::test]
async fn test_small_group_fits_one_vehicle() {
    let provider = GroupedProvider::new(300, 300);
    let pickups = create_pickups(32.11, 34.80, 6);

    let solution = optimize(&pickups, &minivan_and_sedan_params(), &provider)
        .await
        .unwrap();

    assert_eq!(solution.routes().len(), 1);
    let route = solution.routes()[0].route();
    assert_eq!(route.stops().len(), 7);
    assert_eq!(route.destination(), Some(&DESTINATION));
    assert!(route.total_travel_time() < 3600);
    assert!(route.max_leg_time() < 900);
    assert!(route.warnings().is_empty());
}

#[tokio::test]
async fn test_distant_groups_are_not_clustered_together() {
    let provider = GroupedProvider::new(300, 600);
    let pickups = create_grouped_pickups(&[10, 6, 4]);

    let clusters = cluster_passengers(&provider, &pickups, SignedDuration::from_secs(900))
        .await
        .unwrap();

    assert_eq!(clusters.len(), 3);
    assert_eq!(clusters[0].locations(), &pickups[0..10]);
    assert_eq!(clusters[1].locations(), &pickups[10..16]);
    assert_eq!(clusters[2].locations(), &pickups[16..20]);

    let solution = optimize(&pickups, &minivan_and_sedan_params(), &provider)
        .await
        .unwrap();

    assert_eq!(solution.passenger_stops().count(), 20);
    assert_eq!(sorted_passenger_stops(&solution), sorted_locations(&pickups));
}

#[tokio::test]
async fn test_large_cluster_needs_several_vehicles() {
    let provider = GroupedProvider::new(300, 300);
    let pickups = create_pickups(32.11, 34.80, 20);
    let params = minivan_and_sedan_params();

    let solution = optimize(&pickups, &params, &provider).await.unwrap();

    assert!(solution.routes().len() >= 2);
    for vehicle_route in solution.routes() {
        let vehicle_type = params
            .vehicle_types
            .iter()
            .find(|vehicle_type| vehicle_type.label() == vehicle_route.vehicle_type())
            .unwrap();
        assert!(vehicle_route.route().passenger_stops().len() <= vehicle_type.capacity());
    }
    assert_eq!(sorted_passenger_stops(&solution), sorted_locations(&pickups));
}

#[tokio::test]
async fn test_every_route_ends_at_destination() {
    let provider = GroupedProvider::new(300, 100);
    let pickups = create_grouped_pickups(&[9, 9, 9]);

    let solution = optimize(&pickups, &minivan_and_sedan_params(), &provider)
        .await
        .unwrap();

    assert!(!solution.is_empty());
    for vehicle_route in solution.routes() {
        assert_eq!(vehicle_route.route().stops().last(), Some(&DESTINATION));
        assert!(
            !vehicle_route
                .route()
                .passenger_stops()
                .contains(&DESTINATION)
        );
    }
    assert_eq!(sorted_passenger_stops(&solution), sorted_locations(&pickups));
}

#[tokio::test]
async fn test_empty_input_yields_no_routes() {
    let provider = GroupedProvider::new(300, 300);

    let solution = optimize(&[], &minivan_and_sedan_params(), &provider)
        .await
        .unwrap();

    assert!(solution.is_empty());
    assert_eq!(provider.requests(), 0);
    assert_eq!(
        serde_json::to_value(JsonSolution::from(&solution)).unwrap(),
        serde_json::json!({ "routes": [] })
    );
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let provider = GroupedProvider::new(300, 450);
    let pickups = create_grouped_pickups(&[7, 11, 5]);
    let params = minivan_and_sedan_params();

    let first = optimize(&pickups, &params, &provider).await.unwrap();
    let second = optimize(&pickups, &params, &provider).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(JsonSolution::from(&first), JsonSolution::from(&second));
}

#[tokio::test]
async fn test_unreachable_pickup_is_still_routed() {
    let pickups = create_pickups(32.11, 34.80, 4);
    let provider = IsolatedPointProvider {
        seconds: 300,
        isolated: (&pickups[2]).into(),
    };

    let clusters = cluster_passengers(&provider, &pickups, SignedDuration::from_secs(900))
        .await
        .unwrap();
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[1].locations(), &[pickups[2]]);

    let solution = optimize(&pickups, &minivan_and_sedan_params(), &provider)
        .await
        .unwrap();

    // Clusters are flattened before packing so the isolated pickup shares the minivan
    assert_eq!(solution.routes().len(), 1);
    let route = solution.routes()[0].route();
    assert_eq!(route.stops().len(), 5);
    assert_eq!(route.stops().last(), Some(&DESTINATION));
    assert!(route.max_leg_time() >= 999_999);
    let warnings: Vec<String> = route.warnings().iter().map(|w| w.to_string()).collect();
    assert_eq!(
        warnings,
        vec![
            String::from("Total route time exceeds max allowed time"),
            String::from("A leg exceeds max time between stops"),
        ]
    );
}

#[test]
fn test_missing_api_key_fails_before_any_request() {
    let config = ShuttleConfig::from_yaml_str(
        r#"
destination_location: [32.0853, 34.7818]
constraints:
  max_time_between_stops_many2one: 900
  max_total_route_time: 3600
car_types:
  - type: Sedan
    seats: 4
"#,
    )
    .unwrap();

    let result = config.matrix_client_params(None, None);
    assert!(matches!(
        result,
        Err(ValidationError::MissingApiKey { .. })
    ));

    let client = TravelMatrixClient::new(config.matrix_provider.clone(), None);
    assert!(matches!(client, Err(MatrixError::MissingApiKey(_))));
}

#[tokio::test]
async fn test_from_files_with_crow_flies_provider() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "id,pickup_lat,pickup_lng").unwrap();
    for (i, location) in create_pickups(32.0664, 34.7777, 5).iter().enumerate() {
        writeln!(input, "{},{},{}", i, location.lat(), location.lng()).unwrap();
    }

    let config = ShuttleConfig::from_yaml_str(
        r#"
destination_location: [32.0853, 34.7818]
constraints:
  max_time_between_stops_many2one: 900
  max_total_route_time: 3600
car_types:
  - type: Minivan
    seats: 14
  - type: Sedan
    seats: 4
matrix_provider:
  kind: as_the_crow_flies
  speed_kmh: 30.0
"#,
    )
    .unwrap();

    let pickups = read_pickups_file(input.path()).unwrap();
    let client = TravelMatrixClient::new(
        config.matrix_provider.clone(),
        config.matrix_client_params(None, None).unwrap(),
    )
    .unwrap();

    let solution = optimize(&pickups, &config.optimize_params(), &client)
        .await
        .unwrap();

    assert_eq!(solution.routes().len(), 1);
    assert_eq!(solution.routes()[0].vehicle_type(), "Minivan");
    assert_eq!(solution.routes()[0].route().stops().len(), 6);
    assert!(solution.routes()[0].route().warnings().is_empty());
}

#[test]
fn test_invalid_crow_flies_speed_is_a_service_error() {
    let client = TravelMatrixClient::new(
        TravelMatrixProvider::AsTheCrowFlies { speed_kmh: -1.0 },
        None,
    );

    let error: OptimizeError = client.err().unwrap().into();
    assert!(matches!(
        error,
        OptimizeError::Service(MatrixError::InvalidProvider(_))
    ));
}
