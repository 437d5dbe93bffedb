use maud::{html, Markup};

/// Grid/list switcher. `base_query` is the current filter query
/// string without the `view` parameter.
pub fn view_toggle(current: &str, base_query: &str) -> Markup {
    let grid_href = format!("/floor-plans?{base_query}&view=grid");
    let list_href = format!("/floor-plans?{base_query}&view=list");

    html! {
        div class="view-toggle" {
            @if current == "list" {
                a href=(grid_href) { "Сетка" }
                span class="active" { "Список" }
            } @else {
                span class="active" { "Сетка" }
                a href=(list_href) { "Список" }
            }
        }
    }
}
