use crate::domain::listing::Listing;
use crate::templates::{components::listing_card, desktop_layout, object_count};
use maud::{html, Markup};

pub fn profile_page(name: &str, favorites: &[&Listing]) -> Markup {
    desktop_layout(
        "Профиль",
        Some(name),
        html! {
            main class="container" {
                h1 { "Профиль" }

                section class="card" {
                    h2 { (name) }
                    p class="hint" { "Ваши данные хранятся только на этом устройстве." }
                }

                section {
                    div class="section-head" {
                        h2 { "Избранное" }
                        p class="count" { (object_count(favorites.len())) }
                    }
                    @if favorites.is_empty() {
                        p { "Вы еще ничего не добавили в избранное." }
                    } @else {
                        div class="listing-grid" {
                            @for listing in favorites {
                                (listing_card(listing, true, "/profile"))
                            }
                        }
                    }
                }
            }
        },
    )
}
