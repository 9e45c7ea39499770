pub mod highlight;
pub mod rendering;

// Re-export the public entry points for easier usage
pub use highlight::highlight_matches;
pub use rendering::render_markdown;
