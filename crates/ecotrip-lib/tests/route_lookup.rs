use ecotrip_lib::{Error, RouteCatalog};

#[test]
fn builtin_catalog_resolves_reference_route() {
    let catalog = RouteCatalog::builtin();
    assert_eq!(
        catalog.find_distance("São Paulo, SP", "Rio de Janeiro, RJ"),
        Some(430.0)
    );
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    let catalog = RouteCatalog::builtin();
    assert_eq!(
        catalog.find_distance(" São Paulo, SP ", "rio de janeiro, rj"),
        Some(430.0)
    );
}

#[test]
fn lookup_matches_both_directions_for_every_entry() {
    let catalog = RouteCatalog::builtin();
    for entry in catalog.entries() {
        let forward = catalog.find_distance(&entry.location_a, &entry.location_b);
        let reverse = catalog.find_distance(&entry.location_b, &entry.location_a);
        assert_eq!(forward, reverse);
        assert!(forward.is_some());
    }
}

#[test]
fn empty_input_is_not_found() {
    let catalog = RouteCatalog::builtin();
    assert_eq!(catalog.find_distance("", "São Paulo, SP"), None);
    assert_eq!(catalog.find_distance("São Paulo, SP", "   "), None);
}

#[test]
fn no_partial_matching() {
    let catalog = RouteCatalog::builtin();
    assert_eq!(catalog.find_distance("São Paulo", "Rio de Janeiro, RJ"), None);
}

#[test]
fn unconnected_known_locations_are_not_found() {
    let catalog = RouteCatalog::builtin();
    // Both endpoints exist in the catalog, but no entry connects them.
    assert_eq!(catalog.find_distance("Recife, PE", "Manaus, AM"), None);
}

#[test]
fn all_locations_is_deduplicated_and_collated() {
    let catalog = RouteCatalog::builtin();
    let locations = catalog.all_locations();

    // São Paulo appears in several entries but must be listed once.
    let sao_paulo = locations.iter().filter(|name| *name == "São Paulo, SP").count();
    assert_eq!(sao_paulo, 1);

    // Collated order: diacritics fold to their base letters, so "São Luís"
    // sorts between "Santos" and "Sobral" rather than after "Z".
    let santos = locations.iter().position(|n| n == "Santos, SP").unwrap();
    let sao_luis = locations.iter().position(|n| n == "São Luís, MA").unwrap();
    let sobral = locations.iter().position(|n| n == "Sobral, CE").unwrap();
    assert!(santos < sao_luis);
    assert!(sao_luis < sobral);
}

#[test]
fn resolve_distance_suggests_similar_locations() {
    let catalog = RouteCatalog::builtin();
    let err = catalog
        .resolve_distance("Sao Paolo, SP", "Rio de Janeiro, RJ")
        .expect_err("misspelled location");
    match err {
        Error::UnknownLocation { name, suggestions } => {
            assert_eq!(name, "Sao Paolo, SP");
            assert!(suggestions.contains(&"São Paulo, SP".to_string()));
        }
        other => panic!("expected UnknownLocation, got {other}"),
    }
}

#[test]
fn resolve_distance_reports_missing_route() {
    let catalog = RouteCatalog::builtin();
    let err = catalog
        .resolve_distance("Recife, PE", "Manaus, AM")
        .expect_err("no such route");
    assert!(matches!(err, Error::RouteNotFound { .. }));
}
