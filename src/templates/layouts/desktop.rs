use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

/// Shared page chrome: navbar, content slot, footer.
/// `user` is the signed-in display name, if any.
pub fn desktop_layout(title: &str, user: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " — Квартира" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="navbar" {
                    a href="/" class="logo" { "Квартира" }
                    nav {
                        ul {
                            li { a href="/" { "Главная" } }
                            li { a href="/floor-plans" { "Планировки" } }
                            li { a href="/favorites" { "Избранное" } }
                            li { a href="/about" { "О нас" } }
                            li { a href="/contact" { "Контакты" } }
                        }
                    }
                    div class="session" {
                        @match user {
                            Some(name) => {
                                a href="/profile" { "Профиль (" (name) ")" }
                                form action="/logout" method="post" class="inline" {
                                    button type="submit" class="link-button" { "Выйти" }
                                }
                            }
                            None => {
                                a href="/login" class="login-link" { "Войти" }
                            }
                        }
                    }
                }

                (content)

                footer {
                    div class="footer-brand" {
                        h2 { "Квартира" }
                        p { "Найдите идеальную квартиру" }
                    }
                    div class="footer-links" {
                        a href="/about" { "О нас" }
                        a href="/contact" { "Контакты" }
                        a href="#" { "Условия" }
                        a href="#" { "Конфиденциальность" }
                    }
                    div class="footer-copy" {
                        "© " (Utc::now().year()) " Квартира. Все права защищены."
                    }
                }
            }
        }
    }
}
