pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::desktop::desktop_layout;

/// "1 объект", "6 объектов".
pub fn object_count(n: usize) -> String {
    let noun = if n == 1 { "объект" } else { "объектов" };
    format!("{n} {noun}")
}
