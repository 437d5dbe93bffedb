use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn about_page(user: Option<&str>) -> Markup {
    desktop_layout(
        "О нас",
        user,
        html! {
            main class="container narrow" {
                h1 { "О нас" }
                p class="lead" {
                    "«Квартира» помогает быстро найти подходящее жилье: "
                    "планировки, районы, цены — всё в одном месте."
                }
                section class="card" {
                    h2 { "Что мы делаем" }
                    p {
                        "Мы собираем актуальные предложения аренды и даем удобные "
                        "инструменты поиска: фильтры по цене, количеству спален и "
                        "району, а также избранное, чтобы ничего не потерять."
                    }
                }
                section class="card" {
                    h2 { "Как с нами связаться" }
                    p {
                        "Напишите нам через " a href="/contact" { "форму обратной связи" }
                        " — отвечаем в течение рабочего дня."
                    }
                }
            }
        },
    )
}
