use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Вход",
        None,
        html! {
            main class="container narrow" {
                div class="auth-head" {
                    h1 { "Квартира" }
                    p { "Найдите идеальное жилье" }
                }

                @if let Some(msg) = error {
                    div class="form-error" { (msg) }
                }

                form action="/login" method="post" class="card" {
                    h2 { "Вход в аккаунт" }
                    p class="hint" { "Введите свои данные для входа в систему" }

                    div class="field" {
                        label for="name" { "Имя" }
                        input type="text" id="name" name="name" placeholder="Иван Иванов";
                    }
                    div class="field" {
                        label for="email" { "Email" }
                        input type="email" id="email" name="email"
                            placeholder="your@email.com" required;
                    }
                    div class="field" {
                        label for="password" { "Пароль" }
                        input type="password" id="password" name="password"
                            placeholder="••••••••" required;
                    }

                    button type="submit" { "Войти" }
                }
            }
        },
    )
}
