use crate::domain::listing::Listing;
use crate::templates::{components::favorite_toggle, desktop_layout};
use maud::{html, Markup};

pub fn apartment_detail_page(
    user: Option<&str>,
    listing: &Listing,
    is_favorite: bool,
) -> Markup {
    let next = format!("/apartments/{}", listing.id);

    desktop_layout(
        &listing.title,
        user,
        html! {
            main class="container" {
                a href="/floor-plans" class="back" { "← Назад к списку" }

                div class="page-head" {
                    h1 { (listing.title) }
                    // Matches the old detail page: favoriting from here
                    // requires being signed in.
                    @if user.is_some() {
                        (favorite_toggle(&listing.id, is_favorite, &next))
                    } @else {
                        a href="/login" class="login-prompt" {
                            "Войдите, чтобы добавить в избранное"
                        }
                    }
                }

                div class="gallery" {
                    @for image in &listing.images {
                        img src=(image) alt=(listing.title) loading="lazy";
                    }
                }

                section class="detail-info" {
                    p class="location" { (listing.location) }
                    p class="price" { "$" (listing.price) " / мес" }
                    p class="meta" {
                        (listing.bedrooms) " спал. · "
                        (listing.bathrooms) " ванн. · "
                        (listing.area) " м²"
                    }
                    p class="description" { (listing.description) }
                }

                section class="features" {
                    h2 { "Удобства" }
                    ul {
                        @for feature in &listing.features {
                            li { (feature) }
                        }
                    }
                }

                section class="card contact-card" {
                    h2 { "Связаться с нами" }
                    form action="/contact" method="post" {
                        input type="hidden" name="listing_id" value=(listing.id);
                        div class="field" {
                            label for="name" { "Имя" }
                            input type="text" id="name" name="name" required;
                        }
                        div class="field" {
                            label for="email" { "Email" }
                            input type="email" id="email" name="email" required;
                        }
                        div class="field" {
                            label for="message" { "Сообщение" }
                            textarea id="message" name="message" rows="4" required {
                                "Здравствуйте! Меня интересует «" (listing.title) "»."
                            }
                        }
                        button type="submit" { "Отправить" }
                    }
                }
            }
        },
    )
}
