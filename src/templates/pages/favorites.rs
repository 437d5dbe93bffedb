use crate::domain::listing::Listing;
use crate::templates::{components::listing_card, desktop_layout, object_count};
use maud::{html, Markup};

pub fn favorites_page(user: Option<&str>, favorites: &[&Listing]) -> Markup {
    desktop_layout(
        "Избранное",
        user,
        html! {
            main class="container" {
                div class="page-head" {
                    div {
                        h1 { "Избранное" }
                        p class="count" { (object_count(favorites.len())) }
                    }
                    @if !favorites.is_empty() {
                        form action="/favorites/clear" method="post" {
                            button type="submit" class="danger" { "Очистить все" }
                        }
                    }
                }

                @if favorites.is_empty() {
                    div class="empty-state" {
                        h2 { "У вас пока нет избранных объектов" }
                        p {
                            "Добавляйте понравившиеся квартиры в избранное, "
                            "чтобы вернуться к ним позже"
                        }
                        a href="/floor-plans" class="button" { "Просмотреть все квартиры" }
                    }
                } @else {
                    div class="listing-grid" {
                        @for listing in favorites {
                            // The toggle on an already-favorited card acts
                            // as its remove button.
                            (listing_card(listing, true, "/favorites"))
                        }
                    }
                }
            }
        },
    )
}
