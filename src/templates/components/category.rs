use maud::{html, Markup};

/// Featured category tiles. Ids feed the category mapper via the
/// /floor-plans?category= query parameter.
const CATEGORIES: &[(&str, &str, u32)] = &[
    ("studio", "Студии", 12),
    ("one-bedroom", "Однокомнатные", 24),
    ("two-bedroom", "Двухкомнатные", 18),
    ("three-bedroom", "Трехкомнатные", 9),
];

pub fn category_grid() -> Markup {
    html! {
        section class="categories" {
            div class="section-head" {
                h2 { "Популярные категории" }
                a href="/floor-plans" { "Смотреть все" }
            }
            div class="category-grid" {
                @for (id, title, count) in CATEGORIES {
                    a class="category-card" href=(format!("/floor-plans?category={id}")) {
                        h3 { (title) }
                        p { (count) " объектов" }
                    }
                }
            }
        }
    }
}
