//! Template mode behavior, checked through the string-building entry points.

use tagprint::{args, formatf, formatf_with_options, Arg, FormatOptions, SliceBuf};

fn render(args: &[Arg<'_>]) -> SliceBuf {
    formatf(args).unwrap()
}

// Placeholders

#[test]
fn test_single_placeholder() {
    assert_eq!(render(&args!["value = %", 42]), "value = 42");
}

#[test]
fn test_placeholder_at_start_and_end() {
    assert_eq!(render(&args!["%!", "hi"]), "hi!");
    assert_eq!(render(&args!["count: %", 0u8]), "count: 0");
}

#[test]
fn test_adjacent_placeholders() {
    assert_eq!(render(&args!["%%%", 1]), "%1");
    assert_eq!(render(&args!["%%", 1]), "%1 ");
    assert_eq!(render(&args!["%,%", 'a', 'b']), "a,b");
}

#[test]
fn test_every_tag_substitutes_without_separator() {
    let value = 1u8;
    let ptr: *const u8 = &value;
    let out = render(&args![
        "[%][%][%][%][%][%][%][%]",
        -5i8,
        6usize,
        true,
        0.5f32,
        0.25,
        Arg::extended(1.0),
        'x',
        "s"
    ]);
    assert_eq!(out, "[-5][6][true][0.5][0.25][1][x][s]");

    let out = render(&args!["at %", ptr]);
    assert!(out.as_slice().starts_with("at 0x"));
    assert!(!out.as_slice().ends_with(" "));
}

// Escapes

#[test]
fn test_double_percent_is_literal() {
    assert_eq!(render(&args!["100%% done"]), "100% done");
    assert_eq!(render(&args!["%%%%"]), "%%");
}

#[test]
fn test_lone_percent_without_arguments() {
    assert_eq!(render(&args!["%"]), "%");
    assert_eq!(render(&args!["50% off"]), "50% off");
    assert_eq!(render(&args!["% and %", 1]), "1 and %");
}

#[test]
fn test_flags_are_not_interpreted() {
    assert_eq!(render(&args!["%5", 1]), "15");
    assert_eq!(render(&args!["%-8s|", "x"]), "x-8s|");
}

// Argument flow

#[test]
fn test_non_string_first_argument() {
    assert_eq!(render(&args![1, 2, "=%", 3]), "1 2 =3");
}

#[test]
fn test_leftover_values_render_plain() {
    assert_eq!(render(&args!["x=%", 1, 2, true]), "x=12 true ");
}

#[test]
fn test_leftover_strings_are_templates() {
    assert_eq!(render(&args!["a ", "b%%"]), "a b%");
    assert_eq!(render(&args!["%", "%", 9]), "%9 ");
}

#[test]
fn test_null_template_renders_placeholder() {
    assert_eq!(render(&args![None::<&str>, " %", 1]), "(null) 1");
    let options = FormatOptions::new().with_null_placeholder("nil");
    let out = formatf_with_options(&args!["<%>", None::<&str>], &options).unwrap();
    assert_eq!(out, "<nil>");
}

#[test]
fn test_empty_template() {
    assert_eq!(render(&args!["", 5]), "5 ");
    assert_eq!(render(&args![""]), "");
}

#[test]
fn test_long_substitution_crosses_growth() {
    let long = "0123456789".repeat(100);
    let out = render(&args!["<%>", long.as_str()]);
    assert_eq!(out.len(), 1002);
    assert!(out.as_slice().starts_with("<0123"));
    assert!(out.as_slice().ends_with("789>"));
}
