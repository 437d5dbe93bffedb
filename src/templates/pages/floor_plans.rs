use crate::domain::filter::FilterCriteria;
use crate::domain::listing::Listing;
use crate::templates::{
    components::{filter_bar, listing_card, listing_row, view_toggle},
    desktop_layout, object_count,
};
use maud::{html, Markup};

/// Listing browser: filter bar plus grid or list of survivors.
/// `base_query` round-trips the current criteria for the view toggle.
pub fn floor_plans_page(
    user: Option<&str>,
    criteria: &FilterCriteria,
    listings: &[&Listing],
    fav_ids: &[String],
    view: &str,
    base_query: &str,
) -> Markup {
    let next = format!("/floor-plans?{base_query}&view={view}");

    desktop_layout(
        "Планировки",
        user,
        html! {
            (filter_bar(criteria))

            main class="container" {
                div class="page-head" {
                    h1 { "Доступные планировки" }
                    div class="page-head-side" {
                        p class="count" { (object_count(listings.len())) }
                        (view_toggle(view, base_query))
                    }
                }

                @if listings.is_empty() {
                    div class="empty-state" {
                        h2 { "Ничего не найдено" }
                        p { "Попробуйте изменить параметры фильтра или поисковый запрос." }
                        a href="/floor-plans" class="button" { "Сбросить фильтры" }
                    }
                } @else if view == "list" {
                    div class="listing-list" {
                        @for listing in listings {
                            (listing_row(listing, fav_ids.iter().any(|f| f == &listing.id), &next))
                        }
                    }
                } @else {
                    div class="listing-grid" {
                        @for listing in listings {
                            (listing_card(listing, fav_ids.iter().any(|f| f == &listing.id), &next))
                        }
                    }
                }
            }
        },
    )
}
