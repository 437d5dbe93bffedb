use crate::domain::listing::Listing;
use maud::{html, Markup};

/// Grid card for a single listing. `next` is where the favorite
/// toggle redirects back to.
pub fn listing_card(listing: &Listing, is_favorite: bool, next: &str) -> Markup {
    html! {
        article class="card listing-card" {
            a href=(format!("/apartments/{}", listing.id)) class="card-link" {
                img src=(listing.image_url) alt=(listing.title) loading="lazy";
                h3 { (listing.title) }
            }
            p class="location" { (listing.location) }
            p class="price" { "$" (listing.price) " / мес" }
            p class="meta" {
                (listing.bedrooms) " спал. · " (listing.bathrooms) " ванн. · " (listing.area) " м²"
            }
            (favorite_toggle(&listing.id, is_favorite, next))
        }
    }
}

/// Compact row for the list view.
pub fn listing_row(listing: &Listing, is_favorite: bool, next: &str) -> Markup {
    html! {
        article class="listing-row" {
            img src=(listing.image_url) alt=(listing.title) loading="lazy";
            div class="row-body" {
                a href=(format!("/apartments/{}", listing.id)) {
                    h3 { (listing.title) }
                }
                p class="location" { (listing.location) }
                p class="meta" {
                    (listing.bedrooms) " спал. · " (listing.bathrooms) " ванн. · " (listing.area) " м²"
                }
            }
            div class="row-side" {
                p class="price" { "$" (listing.price) " / мес" }
                (favorite_toggle(&listing.id, is_favorite, next))
            }
        }
    }
}

pub fn favorite_toggle(id: &str, is_favorite: bool, next: &str) -> Markup {
    html! {
        form action="/favorites/toggle" method="post" class="inline" {
            input type="hidden" name="id" value=(id);
            input type="hidden" name="next" value=(next);
            @if is_favorite {
                button type="submit" class="fav active" title="Убрать из избранного" { "♥" }
            } @else {
                button type="submit" class="fav" title="В избранное" { "♡" }
            }
        }
    }
}
