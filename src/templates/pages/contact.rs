use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page(user: Option<&str>, error: Option<&str>) -> Markup {
    desktop_layout(
        "Контакты",
        user,
        html! {
            main class="container narrow" {
                h1 { "Контакты" }
                p class="lead" { "Оставьте сообщение, и мы свяжемся с вами." }

                @if let Some(msg) = error {
                    div class="form-error" { (msg) }
                }

                form action="/contact" method="post" class="card" {
                    div class="field" {
                        label for="name" { "Имя" }
                        input type="text" id="name" name="name" required;
                    }
                    div class="field" {
                        label for="email" { "Email" }
                        input type="email" id="email" name="email"
                            placeholder="your@email.com" required;
                    }
                    div class="field" {
                        label for="message" { "Сообщение" }
                        textarea id="message" name="message" rows="6" required {}
                    }
                    button type="submit" { "Отправить" }
                }
            }
        },
    )
}

pub fn contact_sent_page(user: Option<&str>) -> Markup {
    desktop_layout(
        "Сообщение отправлено",
        user,
        html! {
            main class="container narrow" {
                div class="empty-state" {
                    h1 { "Спасибо!" }
                    p { "Ваше сообщение отправлено. Мы ответим в ближайшее время." }
                    a href="/" class="button" { "На главную" }
                }
            }
        },
    )
}
