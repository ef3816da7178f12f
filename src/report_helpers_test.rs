use super::*;

#[test]
fn max_name_width_with_names() {
    let names = ["src/foo.rs", "src/very_long_name.rs"];
    let w = max_name_width(names.iter().copied(), 4);
    assert_eq!(w, "src/very_long_name.rs".len());
}

#[test]
fn max_name_width_empty() {
    let w = max_name_width(std::iter::empty(), 4);
    assert_eq!(w, 4);
}

#[test]
fn max_name_width_min_enforced() {
    let w = max_name_width(["a"].iter().copied(), 10);
    assert_eq!(w, 10);
}

#[test]
fn wide_chars_count_double() {
    assert_eq!(display_width("日本.rs"), 7);
    assert_eq!(pad("日本", 6), "日本  ");
}

#[test]
fn pad_never_truncates() {
    assert_eq!(pad("abcdef", 3), "abcdef");
    assert_eq!(pad("ab", 4), "ab  ");
}

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn bar_fills_proportionally() {
    assert_eq!(bar(0.5, 10).chars().filter(|&c| c == '\u{2588}').count(), 5);
    assert_eq!(bar(2.0, 4).chars().count(), 4);
    assert_eq!(bar(-1.0, 4), "\u{2591}".repeat(4));
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}
