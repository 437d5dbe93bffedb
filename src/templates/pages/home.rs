use crate::domain::listing::Listing;
use crate::templates::{
    components::{category_grid, listing_card},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(user: Option<&str>, listings: &[Listing], fav_ids: &[String]) -> Markup {
    desktop_layout(
        "Главная",
        user,
        html! {
            main class="container" {
                div class="page-head" {
                    h1 { "Доступные квартиры" }
                }

                (category_grid())

                div class="listing-grid" {
                    @for listing in listings {
                        (listing_card(listing, fav_ids.iter().any(|f| f == &listing.id), "/"))
                    }
                }

                section class="cta" {
                    h2 { "Не нашли подходящий вариант?" }
                    p {
                        "Оставьте заявку, и наши специалисты подберут для вас идеальную "
                        "квартиру по вашим критериям"
                    }
                    a href="/contact" class="button" { "Оставить заявку" }
                }
            }
        },
    )
}
