//! Advanced filtering example for scrutin-rs
//!
//! Combines typed records, several criteria and recent-search history.

use scrutin_core::prelude::*;

fn organizations() -> Vec<Organization> {
    let org = |id: &str, name: &str, country: &str, region: &str, kind: &str, expertise: &[&str], founded| {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            region: Some(region.to_string()),
            org_type: Some(kind.to_string()),
            expertise: expertise.iter().map(|e| e.to_string()).collect(),
            founded,
        }
    };
    vec![
        org("1", "Observatoire Électoral Citoyen", "Sénégal", "Afrique de l'Ouest", "ONG", &["Observation", "Éducation civique"], Some(2011)),
        org("2", "Réseau des Jeunes pour la Démocratie", "Bénin", "Afrique de l'Ouest", "Réseau", &["Jeunesse", "Observation"], Some(2016)),
        org("3", "Kenya Election Watch", "Kenya", "Afrique de l'Est", "ONG", &["Observation", "Technologie"], Some(2007)),
        org("4", "Collectif Femmes et Élections", "Cameroun", "Afrique Centrale", "Collectif", &["Genre", "Plaidoyer"], None),
        org("5", "Plateforme Électorale du Maghreb", "Maroc", "Afrique du Nord", "Réseau", &["Plaidoyer", "Technologie"], Some(2019)),
    ]
}

fn print_all(title: &str, items: &[&Organization]) {
    println!("--- {title} ---");
    if items.is_empty() {
        println!("(none)");
    }
    for o in items {
        let founded = o.founded.map_or("?".to_string(), |y| y.to_string());
        println!("- {} ({}, {founded})", o.name, o.country);
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== Scrutin-RS Advanced Filtering Example ===\n");

    let engine = SearchEngine::with_keys(organizations(), ["name", "country", "expertise"]);

    // Example 1: Membership on a list-valued field
    let spec = FilterSpec::new().expertise(["Technologie"]);
    print_all("Example 1: Expertise in technology", &engine.run(&SearchRequest::default().filters(spec)));

    // Example 2: Several criteria at once, all must hold
    let spec = FilterSpec::new()
        .regions(["Afrique de l'Ouest", "Afrique de l'Est"])
        .types(["ONG"])
        .year_range(YearRange::between(2005, 2012));
    println!("Active criteria: {}", spec.active_count());
    print_all("Example 2: West/East African NGOs founded 2005-2012", &engine.run(&SearchRequest::default().filters(spec)));

    // Example 3: An open-ended range drops records without a year
    let spec = FilterSpec::new().year_range(YearRange::new(None, Some(2020)));
    print_all("Example 3: Founded up to 2020", &engine.run(&SearchRequest::default().filters(spec)));

    // Example 4: Text, criteria and ordering together
    let request = SearchRequest::new("observation")
        .filters(FilterSpec::new().regions(["Afrique de l'Ouest", "Afrique de l'Est"]))
        .sort(SortMode::Date);
    print_all("Example 4: \"observation\" by founding year", &engine.run(&request));

    // Example 5: Recent searches
    println!("--- Example 5: Recent searches ---");
    let recent = RecentSearches::new(MemoryStore::new());
    for q in ["kenya", "genre", "plaidoyer", "kenya"] {
        recent.save("recentCSOSearches", q);
    }
    println!("{:?}", recent.load("recentCSOSearches"));

    println!("\n=== Example completed successfully ===");
    Ok(())
}
