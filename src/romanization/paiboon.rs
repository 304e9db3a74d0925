/// Aspirated digraphs collapsed to their plain letter, applied in order.
const DIGRAPHS: &[(&str, &str)] = &[("ph", "p"), ("kh", "k"), ("th", "t")];

/// Convert an RTGS romanization to Paiboon-style spelling (no tone marks).
///
/// - `ph`, `kh`, `th` lose their `h` everywhere.
/// - A word-initial `ch` (จ) becomes `j`.
/// - A word-initial `k` (ก) becomes `g`, unless the original began with
///   `kh`: that `k` stands for the aspirated ข/ค and stays as is.
///
/// Total over any input. Calling it again on its own output does not fail,
/// but is not guaranteed to be a no-op (`kai` from `khai` would become `gai`).
pub fn to_paiboon(rtgs: &str) -> String {
    let initial_kh = rtgs.starts_with("kh");
    let initial_ch = rtgs.starts_with("ch");

    let mut result = rtgs.to_string();
    for (from, to) in DIGRAPHS {
        if result.contains(from) {
            result = result.replace(from, to);
        }
    }

    if initial_ch && result.starts_with("ch") {
        result.replace_range(..2, "j");
    }

    if !initial_kh && result.starts_with('k') {
        result.replace_range(..1, "g");
    }

    result
}
