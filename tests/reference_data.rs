//! Reference data request mapping tests
//!
//! Countries are created through a single category selector; the backend
//! wants two boolean flags. The seed list used by bulk import must stay
//! consistent so the import creates one national country per entry.

use mcm_console::app::api::CountryCreateRequest;
use mcm_console::app::seed::SEED_LOCATIONS;

#[test]
fn destination_category_sets_only_the_destination_flag() {
    let req = CountryCreateRequest::from_category("Qatar", "destination");
    assert!(req.is_destination);
    assert!(!req.is_affiliated);
}

#[test]
fn affiliated_category_sets_only_the_affiliated_flag() {
    let req = CountryCreateRequest::from_category("Jordan", "affiliated");
    assert!(!req.is_destination);
    assert!(req.is_affiliated);
}

/// Anything else, including the bulk-import default, is national.
#[test]
fn unknown_category_is_national() {
    for category in ["national", "", "DESTINATION"] {
        let req = CountryCreateRequest::from_category("Ghana", category);
        assert!(!req.is_destination, "category {category:?}");
        assert!(!req.is_affiliated, "category {category:?}");
    }
}

/// The bulk-import seed has no duplicate countries and no blank capitals.
#[test]
fn seed_locations_are_well_formed() {
    let mut seen = std::collections::HashSet::new();
    for (country, capital) in SEED_LOCATIONS {
        assert!(!country.trim().is_empty());
        assert!(!capital.trim().is_empty());
        assert!(seen.insert(*country), "duplicate seed country {country}");
    }
    assert!(SEED_LOCATIONS.len() >= 20);
}
