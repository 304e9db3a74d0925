use std::collections::BTreeSet;

/// Distinct spellings considered equivalent to one romanization.
pub type VariantSet = BTreeSet<String>;

/// Whole-string letter swaps for consonants non-native typists confuse.
const LETTER_SWAPS: &[(&str, &str)] = &[("t", "s"), ("s", "t"), ("t", "d"), ("d", "t")];

/// Vowels that get a long (doubled) spelling on their first occurrence.
const VOWEL_DOUBLINGS: &[(&str, &str)] = &[("a", "aa"), ("o", "oo")];

/// `(pattern, min_len, replacement, replacement)`: drop a `t` before the
/// final vowel cluster. `pattern` only applies when the input is strictly
/// longer than `min_len`.
const T_DROPS: &[(&str, usize, &str, &str)] = &[
    ("tdi", 0, "di", "dee"),
    ("tdee", 0, "dee", "di"),
    ("ti", 3, "i", "ee"),
    ("tee", 4, "ee", "i"),
];

/// Final `i` ↔ `ee`.
fn alternate_final_vowel(roman: &str) -> Option<String> {
    if let Some(stem) = roman.strip_suffix('i') {
        Some(format!("{stem}ee"))
    } else {
        roman.strip_suffix("ee").map(|stem| format!("{stem}i"))
    }
}

/// Generate alternate spellings of `roman`.
///
/// e.g. `sawatdi` → `sawatdee`, `sawasdi`, `sawasdee`, `sawadi`, `sawadee`, ...
///
/// The rules run on the input; then the final `i`/`ee` alternation runs once
/// more over everything generated so far. That second pass is the only
/// composition: no other rule sees another rule's output. Members shorter
/// than `min_len` chars are dropped, including the input itself.
pub fn spelling_variants(roman: &str, min_len: usize) -> VariantSet {
    let mut variants = VariantSet::new();
    variants.insert(roman.to_string());
    let len = roman.chars().count();

    if let Some(alt) = alternate_final_vowel(roman) {
        variants.insert(alt);
    }

    // aroy / aroi / aroee
    if let Some(stem) = roman.strip_suffix('y') {
        variants.insert(format!("{stem}i"));
        variants.insert(format!("{stem}ee"));
    }
    if len > 2 {
        if let Some(stem) = roman.strip_suffix('i') {
            variants.insert(format!("{stem}y"));
        }
    }
    if len > 3 {
        if let Some(stem) = roman.strip_suffix("ee") {
            variants.insert(format!("{stem}y"));
        }
    }

    for (from, to) in LETTER_SWAPS {
        if roman.contains(from) {
            variants.insert(roman.replace(from, to));
        }
    }

    for (single, double) in VOWEL_DOUBLINGS {
        if roman.contains(single) && !roman.contains(double) {
            variants.insert(roman.replacen(single, double, 1));
        }
    }

    let second_pass: Vec<String> = variants
        .iter()
        .filter_map(|v| alternate_final_vowel(v))
        .collect();
    variants.extend(second_pass);

    for &(pattern, min, a, b) in T_DROPS {
        if roman.contains(pattern) && len > min {
            variants.insert(roman.replace(pattern, a));
            variants.insert(roman.replace(pattern, b));
        }
    }

    variants.retain(|v| v.chars().count() >= min_len);
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(roman: &str) -> VariantSet {
        spelling_variants(roman, 2)
    }

    #[test]
    fn test_sawatdi() {
        let v = variants("sawatdi");
        for expected in [
            "sawatdi", "sawatdee", "sawatdy", "sawasdi", "sawasdee", "sawaddi", "sawaddee",
            "saawatdi", "saawatdee", "sawadi", "sawadee",
        ] {
            assert!(v.contains(expected), "missing {expected}: {v:?}");
        }
    }

    #[test]
    fn test_final_y() {
        let v = variants("aroy");
        assert!(v.contains("aroi"));
        assert!(v.contains("aroee"));
        assert!(v.contains("aaroy"));
        assert!(v.contains("arooy"));
    }

    #[test]
    fn test_final_i_to_y_needs_length() {
        assert!(variants("aroi").contains("aroy"));
        assert!(!variants("ti").contains("ty"));
        assert!(variants("sabai").contains("sabay"));
    }

    #[test]
    fn test_final_ee_to_y_needs_length() {
        assert!(variants("dee").contains("di"));
        assert!(!variants("dee").contains("dy"));
        assert!(variants("mdee").contains("mdy"));
    }

    #[test]
    fn test_swaps_are_replace_all() {
        let v = variants("tot");
        assert!(v.contains("sos"));
        assert!(v.contains("dod"));
        assert!(!v.contains("sot"));
    }

    #[test]
    fn test_reverse_swaps() {
        let v = variants("sadu");
        assert!(v.contains("tadu"));
        assert!(v.contains("satu"));
    }

    #[test]
    fn test_vowel_doubling_first_occurrence_only() {
        let v = variants("sabai");
        assert!(v.contains("saabai"));
        assert!(!v.contains("sabaai"));

        // Already long: no further doubling.
        let v = variants("yaak");
        assert!(!v.contains("yaaak"));
        let v = variants("phoom");
        assert!(!v.contains("phooom"));
    }

    #[test]
    fn test_second_pass_is_one_level() {
        let v = variants("sawatdi");
        // doubling, then i/ee
        assert!(v.contains("saawatdee"));
        // doubling + t/s would need two first-level rules
        assert!(!v.contains("saawasdi"));
        // the y rule is not reapplied to first-level variants
        assert!(!v.contains("sawasdy"));
    }

    #[test]
    fn test_t_drop_short_patterns() {
        let v = variants("khati");
        assert!(v.contains("khai"));
        assert!(v.contains("khaee"));

        // "ti" needs more than 3 chars
        let v = variants("ati");
        assert!(!v.contains("ai"));

        let v = variants("satee");
        assert!(v.contains("saee"));
        assert!(v.contains("sai"));
        let v = variants("atee");
        assert!(!v.contains("aee"));
    }

    #[test]
    fn test_t_drop_before_di_dee() {
        let v = variants("sawatdee");
        assert!(v.contains("sawadee"));
        assert!(v.contains("sawadi"));
    }

    #[test]
    fn test_min_length() {
        let v = variants("a");
        assert!(!v.contains("a"));
        assert!(v.contains("aa"));

        let v = variants("ee");
        assert!(v.contains("ee"));
        assert!(!v.contains("i"));

        assert!(spelling_variants("", 2).is_empty());
        assert!(spelling_variants("gin", 4).iter().all(|v| v.len() >= 4));
    }

    #[test]
    fn test_always_contains_input() {
        for roman in ["gin", "kin", "sawatdi", "pom", "susu"] {
            assert!(variants(roman).contains(roman));
        }
    }
}
