//! Plain-text rendering of calculation results.

use std::fmt::Write;

use gematria_core::{GematriaResult, Letter, Method, NamesResult};

/// Warning shown for input without Hebrew characters.
pub const NON_HEBREW_WARNING: &str =
    "⚠️ The entered text contains non-Hebrew characters. Only Hebrew letters will be calculated.";

pub const fn method_label(method: Method, hebrew: bool) -> &'static str {
    if hebrew {
        method.hebrew_label()
    } else {
        method.label()
    }
}

fn letter_name(c: char) -> &'static str {
    Letter::try_from(c).map_or("?", Letter::name)
}

/// Letter/value table followed by the sum line.
pub fn letter_table(result: &GematriaResult) -> String {
    let mut out = String::new();
    if result.letters.is_empty() {
        return out;
    }

    for item in &result.letters {
        let _ = writeln!(
            out,
            "  {}  {:<12} {:>4}",
            item.letter,
            letter_name(item.letter),
            item.value
        );
    }
    let _ = writeln!(out, "  {}", "-".repeat(21));
    let _ = writeln!(out, "  {:<15} {:>4}", "Total", result.total);
    out
}

pub fn names_report(result: &NamesResult, hebrew_labels: bool, show_letters: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Result - {}",
        method_label(result.method, hebrew_labels)
    );

    for name in &result.names {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", name.text, name.result.total);
        if !name.hebrew {
            let _ = writeln!(out, "{NON_HEBREW_WARNING}");
        }
        if show_letters {
            out.push_str(&letter_table(&name.result));
        }
    }

    if result.names.len() > 1 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Combined total: {}", result.total);
    }
    out
}

/// Value table of all 27 letters under `method`.
pub fn alphabet_table(method: Method, hebrew_labels: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Letter values - {}", method_label(method, hebrew_labels));
    for letter in Letter::ALL {
        let _ = writeln!(
            out,
            "  {}  {:<12} {:>4}",
            letter,
            letter.name(),
            method.value_of(letter)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gematria_core::{calculate, calculate_names};

    #[test]
    fn test_letter_table_lists_in_order() {
        let table = letter_table(&calculate("דוד", Method::Standard));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains('ד') && lines[0].contains("Dalet"));
        assert!(lines[1].contains("Vav"));
        assert!(lines[4].ends_with("14"));
    }

    #[test]
    fn test_letter_name_for_unknown_char() {
        assert_eq!(letter_name('ץ'), "Final Tzadi");
        assert_eq!(letter_name('x'), "?");
    }

    #[test]
    fn test_empty_result_has_no_table() {
        assert!(letter_table(&calculate("abc", Method::Standard)).is_empty());
    }

    #[test]
    fn test_report_warns_and_combines() {
        let result = calculate_names(&["דוד", "abc"], Method::Standard).unwrap();
        let report = names_report(&result, false, false);
        assert!(report.starts_with("Result - Standard (Rishon)"));
        assert!(report.contains("דוד: 14"));
        assert!(report.contains(NON_HEBREW_WARNING));
        assert!(report.contains("Combined total: 14"));
    }

    #[test]
    fn test_hebrew_label() {
        let result = calculate_names(&["א"], Method::Ordinal).unwrap();
        let report = names_report(&result, true, true);
        assert!(report.starts_with("Result - סדרית (סדר)"));
        assert!(!report.contains("Combined total"));
    }

    #[test]
    fn test_alphabet_table_has_all_letters() {
        let table = alphabet_table(Method::Integral, false);
        assert_eq!(table.lines().count(), 28);
        assert!(table.contains("Final Tzadi"));
    }
}
