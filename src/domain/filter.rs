use crate::domain::listing::Listing;

/// Default price range shown by the filter bar.
pub const DEFAULT_PRICE_RANGE: (i64, i64) = (500, 3000);

/// Region codes with their display district names. The listing's
/// `location` field must equal the display name exactly for a match.
pub const DISTRICTS: &[(&str, &str)] = &[
    ("center", "Центр города"),
    ("north", "Северный район"),
    ("south", "Южный район"),
    ("west", "Западный район"),
    ("east", "Восточный район"),
];

pub fn district_name(code: &str) -> Option<&'static str> {
    DISTRICTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BedroomFilter {
    Any,
    Exactly(u32),
    /// "4+" in the UI: four bedrooms or more.
    FourPlus,
}

impl BedroomFilter {
    /// Parse the select-box value. Unrecognized input falls back to `Any`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "any" => BedroomFilter::Any,
            "4+" => BedroomFilter::FourPlus,
            other => other
                .parse::<u32>()
                .map(BedroomFilter::Exactly)
                .unwrap_or(BedroomFilter::Any),
        }
    }

    pub fn matches(&self, bedrooms: u32) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Exactly(n) => bedrooms == *n,
            BedroomFilter::FourPlus => bedrooms >= 4,
        }
    }

    /// Value round-tripped through the filter form.
    pub fn query_value(&self) -> String {
        match self {
            BedroomFilter::Any => "any".to_string(),
            BedroomFilter::Exactly(n) => n.to_string(),
            BedroomFilter::FourPlus => "4+".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFilter {
    Any,
    /// A region code. Codes outside `DISTRICTS` match nothing,
    /// which is stricter than falling back to `Any`.
    Code(String),
}

impl LocationFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "any" => LocationFilter::Any,
            code => LocationFilter::Code(code.to_string()),
        }
    }

    pub fn matches(&self, location: &str) -> bool {
        match self {
            LocationFilter::Any => true,
            LocationFilter::Code(code) => match district_name(code) {
                Some(name) => location == name,
                None => false,
            },
        }
    }

    pub fn query_value(&self) -> String {
        match self {
            LocationFilter::Any => "any".to_string(),
            LocationFilter::Code(code) => code.clone(),
        }
    }
}

/// Structured constraints applied to a listing collection. Built from
/// UI defaults, adjusted per request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive on both ends; min <= max.
    pub price_range: (i64, i64),
    pub bedrooms: BedroomFilter,
    pub location: LocationFilter,
    /// Case-insensitive substring over title and location.
    pub search_query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: DEFAULT_PRICE_RANGE,
            bedrooms: BedroomFilter::Any,
            location: LocationFilter::Any,
            search_query: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Structured predicate: price AND bedrooms AND location.
    /// The free-text query is applied separately by `apply_filters`.
    pub fn matches(&self, listing: &Listing) -> bool {
        let (min, max) = self.price_range;
        listing.price >= min
            && listing.price <= max
            && self.bedrooms.matches(listing.bedrooms)
            && self.location.matches(&listing.location)
    }
}

/// Apply structured filters plus the free-text query to a collection.
/// Surviving listings keep their original relative order; the input is
/// never mutated.
pub fn apply_filters<'a>(all: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let query = criteria.search_query.trim().to_lowercase();

    all.iter()
        .filter(|listing| criteria.matches(listing))
        .filter(|listing| {
            query.is_empty()
                || listing.title.to_lowercase().contains(&query)
                || listing.location.to_lowercase().contains(&query)
        })
        .collect()
}
