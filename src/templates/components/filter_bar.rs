use crate::domain::filter::{FilterCriteria, DISTRICTS};
use maud::{html, Markup};

const BEDROOM_OPTIONS: &[(&str, &str)] = &[
    ("any", "Любое"),
    ("1", "1 спальня"),
    ("2", "2 спальни"),
    ("3", "3 спальни"),
    ("4+", "4+ спален"),
];

// Amenity boxes are rendered and submitted but not applied to
// filtering; the filter engine ignores them.
const AMENITIES: &[(&str, &str)] = &[
    ("balcony", "Балкон"),
    ("parking", "Парковка"),
    ("elevator", "Лифт"),
    ("ac", "Кондиционер"),
    ("gym", "Спортзал"),
    ("pool", "Бассейн"),
    ("security", "Охрана"),
    ("furnished", "Мебель"),
];

/// Filter form; submits as GET to /floor-plans so results are linkable.
pub fn filter_bar(criteria: &FilterCriteria) -> Markup {
    let bedrooms = criteria.bedrooms.query_value();
    let location = criteria.location.query_value();

    html! {
        section class="filter-bar" {
            form action="/floor-plans" method="get" {
                div class="filter-grid" {
                    div class="field" {
                        label for="q" { "Поиск" }
                        input type="search" id="q" name="q"
                            placeholder="Название или район"
                            value=(criteria.search_query);
                    }

                    div class="field" {
                        label { "Диапазон цен" }
                        div class="range" {
                            input type="number" name="min_price" min="0" step="100"
                                value=(criteria.price_range.0);
                            span { "—" }
                            input type="number" name="max_price" min="0" step="100"
                                value=(criteria.price_range.1);
                        }
                    }

                    div class="field" {
                        label for="bedrooms" { "Спальни" }
                        select id="bedrooms" name="bedrooms" {
                            @for (value, label) in BEDROOM_OPTIONS {
                                option value=(value) selected[*value == bedrooms] { (label) }
                            }
                        }
                    }

                    div class="field" {
                        label for="location" { "Район" }
                        select id="location" name="location" {
                            option value="any" selected[location == "any"] { "Любой" }
                            @for (code, name) in DISTRICTS {
                                option value=(code) selected[*code == location] { (name) }
                            }
                        }
                    }
                }

                details class="amenities" {
                    summary { "Дополнительные удобства" }
                    div class="amenity-grid" {
                        @for (id, label) in AMENITIES {
                            label class="checkbox" {
                                input type="checkbox" name="amenity" value=(id);
                                (label)
                            }
                        }
                    }
                }

                div class="filter-actions" {
                    a href="/floor-plans" class="reset" { "Сбросить" }
                    button type="submit" { "Применить фильтры" }
                }
            }
        }
    }
}
