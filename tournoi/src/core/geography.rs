//! Static region → city table.

/// A region and its host cities, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub cities: Vec<String>,
}

impl Region {
    pub fn new(name: &str, cities: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            cities: cities.iter().map(|city| city.to_string()).collect(),
        }
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }
}

/// Ordered region table.
///
/// Order is significant: it drives the 1-based region menu and the order in
/// which candidate pools are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geography {
    regions: Vec<Region>,
}

impl Geography {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// The five administrative regions of Togo.
    pub fn togo() -> Self {
        Self::new(vec![
            Region::new(
                "Maritime",
                &["Lomé", "Aného", "Tabligbo", "Vogan", "Tsévié"],
            ),
            Region::new("Plateaux", &["Atakpamé", "Kpalimé", "Badou", "Notsé"]),
            Region::new("Centrale", &["Sokodé", "Tchamba", "Sotouboua"]),
            Region::new("Kara", &["Kara", "Lama-Kara", "Kandé"]),
            Region::new("Savanes", &["Dapaong", "Mango", "Tandjoaré"]),
        ])
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// Case-insensitive lookup, used for operator-typed region names.
    pub fn find_region(&self, name: &str) -> Option<&Region> {
        let wanted = name.trim().to_lowercase();
        self.regions
            .iter()
            .find(|region| region.name.to_lowercase() == wanted)
    }

    /// Region owning `city`, if the table knows it.
    pub fn region_of(&self, city: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.contains(city))
    }

    pub fn is_known_city(&self, city: &str) -> bool {
        self.region_of(city).is_some()
    }

    /// All `(city, region)` pairs in table order.
    pub fn cities(&self) -> impl Iterator<Item = (&str, &str)> {
        self.regions.iter().flat_map(|region| {
            region
                .cities
                .iter()
                .map(move |city| (city.as_str(), region.name.as_str()))
        })
    }

    pub fn city_count(&self) -> usize {
        self.regions.iter().map(|region| region.cities.len()).sum()
    }
}
