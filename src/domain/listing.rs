use serde::Serialize;

/// A rentable apartment record. Sourced from the static catalog;
/// `id` is unique within a collection and all numeric fields are
/// non-negative.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,

    /// Monthly rent.
    pub price: i64,
    pub bedrooms: u32,
    /// May be fractional, e.g. 2.5.
    pub bathrooms: f64,
    /// Square meters.
    pub area: u32,

    pub image_url: String,
    pub images: Vec<String>,
    /// Ordered amenity strings.
    pub features: Vec<String>,
}
