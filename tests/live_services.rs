//! Talks to the public Nominatim and OSRM servers.
//!
//! Run with `cargo test -- --ignored` when network access is available.

use osm_route::sdk::config::AppConfig;
use osm_route::sdk::navigation::NavigationController;
use osm_route::{Geocoder, NominatimGeocoder, OsrmRouter, Profile, Router};

#[test]
#[ignore = "needs network access to public OSM services"]
fn seoul_station_to_gwanghwamun_by_car() {
    let config = AppConfig::from_env().unwrap();
    let geocoder = NominatimGeocoder::new(&config.geocoder).unwrap();
    let router = OsrmRouter::new(&config.router).unwrap();

    let start = geocoder.geocode("서울역").unwrap().expect("서울역 should geocode");
    assert!(start.label.contains("서울역"), "label was {}", start.label);
    let end = geocoder.geocode("광화문").unwrap().expect("광화문 should geocode");

    let route = router.route(&start, &end, Profile::Driving).unwrap();
    assert!(route.distance_m > 0.0);
    assert!(route.duration_s > 0.0);
    assert!(!route.steps.is_empty());
    assert!(route.geometry.len() >= 2);
}

#[test]
#[ignore = "needs network access to public OSM services"]
fn controller_round_trip_against_live_services() {
    let config = AppConfig::from_env().unwrap();
    let mut controller = NavigationController::new(
        NominatimGeocoder::new(&config.geocoder).unwrap(),
        OsrmRouter::new(&config.router).unwrap(),
    );

    controller.submit().unwrap();
    controller.next();

    let session = controller.session().expect("route should be ready");
    assert!(session.step_count() > 0);
    assert!(session.current_step_index() < session.step_count());
}
