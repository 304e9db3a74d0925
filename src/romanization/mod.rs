mod paiboon;
mod variants;

pub use paiboon::to_paiboon;
pub use variants::{spelling_variants, VariantSet};

/// Normalize a source romanization into lookup-key form.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize(roman: &str) -> Option<String> {
    let key = roman.trim().to_lowercase();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}
