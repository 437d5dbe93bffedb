use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Rendered with a 404 status when a listing id does not exist.
pub fn apartment_not_found_page(user: Option<&str>) -> Markup {
    desktop_layout(
        "Квартира не найдена",
        user,
        html! {
            main class="container narrow" {
                div class="empty-state" {
                    h1 { "Квартира не найдена" }
                    p { "Запрашиваемая квартира не существует или была удалена." }
                    a href="/floor-plans" class="button" { "Вернуться к списку квартир" }
                }
            }
        },
    )
}
