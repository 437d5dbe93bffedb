use crate::domain::filter::BedroomFilter;

/// Map a navigation category code to a bedroom filter. Only the
/// bedrooms field of the criteria is affected; price range and
/// location stay as they were.
///
/// "studio" and "one-bedroom" both map to 1, mirroring the existing
/// category links. Unknown codes mean no bedroom constraint.
pub fn category_to_bedrooms(code: &str) -> BedroomFilter {
    match code {
        "studio" => BedroomFilter::Exactly(1),
        "one-bedroom" => BedroomFilter::Exactly(1),
        "two-bedroom" => BedroomFilter::Exactly(2),
        "three-bedroom" => BedroomFilter::Exactly(3),
        _ => BedroomFilter::Any,
    }
}
