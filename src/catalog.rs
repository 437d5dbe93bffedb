//! Static listing catalog. Stands in for a real listing data source;
//! the filter engine treats it as an opaque collection.

use crate::domain::listing::Listing;
use std::sync::OnceLock;

static CATALOG: OnceLock<Vec<Listing>> = OnceLock::new();

pub fn all() -> &'static [Listing] {
    CATALOG.get_or_init(sample_listings)
}

pub fn find(id: &str) -> Option<&'static Listing> {
    all().iter().find(|listing| listing.id == id)
}

fn listing(
    id: &str,
    title: &str,
    location: &str,
    description: &str,
    price: i64,
    bedrooms: u32,
    bathrooms: f64,
    area: u32,
    images: &[&str],
    features: &[&str],
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        price,
        bedrooms,
        bathrooms,
        area,
        image_url: images.first().unwrap_or(&"").to_string(),
        images: images.iter().map(|url| url.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Студия",
            "Центр города",
            "Уютная студия в самом центре с современным ремонтом. \
             В шаговой доступности магазины, рестораны и общественный транспорт.",
            850,
            1,
            1.0,
            45,
            &[
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&q=80",
                "https://images.unsplash.com/photo-1560448204-603b3fc33ddc?w=800&q=80",
            ],
            &["Кондиционер", "Встроенная кухня", "Интернет"],
        ),
        listing(
            "2",
            "Однокомнатная",
            "Северный район",
            "Светлая однокомнатная квартира рядом с парком. \
             Полностью меблирована и готова к заселению.",
            1000,
            1,
            1.0,
            60,
            &[
                "https://images.unsplash.com/photo-1560448204-603b3fc33ddc?w=800&q=80",
                "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?w=800&q=80",
            ],
            &["Балкон", "Стиральная машина", "Интернет"],
        ),
        listing(
            "3",
            "Двухкомнатная",
            "Западный район",
            "Просторная двухкомнатная квартира с большими окнами и \
             отличным естественным освещением.",
            1200,
            2,
            1.0,
            75,
            &[
                "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?w=800&q=80",
                "https://images.unsplash.com/photo-1560185008-b033106af5c3?w=800&q=80",
            ],
            &[
                "Кондиционер",
                "Балкон",
                "Встроенная кухня",
                "Стиральная машина",
                "Холодильник",
                "Интернет",
                "Парковка",
            ],
        ),
        listing(
            "4",
            "Трехкомнатная",
            "Северный район",
            "Трехкомнатная квартира для семьи: раздельные комнаты, \
             два санузла, закрытый двор.",
            1500,
            3,
            2.0,
            95,
            &[
                "https://images.unsplash.com/photo-1560185008-b033106af5c3?w=800&q=80",
                "https://images.unsplash.com/photo-1560184990-4a5229fef9c7?w=800&q=80",
            ],
            &["Балкон", "Парковка", "Лифт", "Холодильник"],
        ),
        listing(
            "5",
            "Четырехкомнатная",
            "Южный район",
            "Большая четырехкомнатная квартира в тихом районе, \
             подходит для большой семьи.",
            1800,
            4,
            2.0,
            120,
            &[
                "https://images.unsplash.com/photo-1560184990-4a5229fef9c7?w=800&q=80",
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&q=80",
            ],
            &["Парковка", "Лифт", "Спортзал", "Охрана"],
        ),
        listing(
            "6",
            "Пентхаус",
            "Центр города",
            "Пентхаус с панорамным видом на город, терраса и \
             дизайнерская отделка.",
            2500,
            3,
            2.0,
            150,
            &[
                "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=800&q=80",
                "https://images.unsplash.com/photo-1560448204-603b3fc33ddc?w=800&q=80",
            ],
            &["Кондиционер", "Терраса", "Парковка", "Охрана", "Бассейн"],
        ),
    ]
}
