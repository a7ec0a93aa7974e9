//! End-to-end behavior of the format engine through its public API.

use tinyfmt_core::config::{MAX_PRECISION, MAX_WIDTH};
use tinyfmt_core::{
    FormatArg, FormatError, FormatSink, NumericBase, RenderConfig, StringSink, format, format_to,
    sprintf,
};

fn fmt(f: &str, args: &[&dyn FormatArg]) -> String {
    format(f, args).unwrap()
}

#[test]
fn literal_text_round_trips_with_escapes_collapsed() {
    for input in ["", "plain", "100%% done", "%%%%", "tab\there", "ünïcödé %%"] {
        assert_eq!(fmt(input, &[]), input.replace("%%", "%"), "{input:?}");
    }
}

#[test]
fn escaped_percent_consumes_no_argument() {
    assert_eq!(fmt("%%d", &[]), "%d");
    assert_eq!(fmt("%d%%", &[&5]), "5%");
}

#[test]
fn width_and_alignment() {
    assert_eq!(fmt("%5d", &[&42]), "   42");
    assert_eq!(fmt("%-5d|", &[&42]), "42   |");
    assert_eq!(fmt("%05d", &[&-3]), "-0003");
    assert_eq!(fmt("%-05d|", &[&-3]), "-3   |");
    assert_eq!(fmt("%8s|", &[&"abc"]), "     abc|");
    assert_eq!(fmt("%-8s|", &[&"abc"]), "abc     |");
}

#[test]
fn sign_flags() {
    assert_eq!(fmt("% d", &[&7]), " 7");
    assert_eq!(fmt("%+d", &[&7]), "+7");
    assert_eq!(fmt("%+ d", &[&7]), "+7");
    assert_eq!(fmt("% +d", &[&7]), "+7");
    assert_eq!(fmt("%+d", &[&-7]), "-7");
    assert_eq!(fmt("%+05d", &[&7]), "+0007");
}

#[test]
fn integer_precision_is_minimum_digits() {
    assert_eq!(fmt("%.3d", &[&5]), "005");
    assert_eq!(fmt("%.3d", &[&-5]), "-05");
    assert_eq!(fmt("%+.3d", &[&5]), "+005");
    assert_eq!(fmt("%.3x", &[&10]), "00a");
    assert_eq!(fmt("%.2d", &[&12345]), "12345");
}

#[test]
fn bases_and_case() {
    assert_eq!(fmt("%x", &[&255]), "ff");
    assert_eq!(fmt("%X", &[&255]), "FF");
    assert_eq!(fmt("%#x", &[&255]), "0xff");
    assert_eq!(fmt("%#X", &[&255]), "0XFF");
    assert_eq!(fmt("%o", &[&8]), "10");
    assert_eq!(fmt("%#o", &[&8]), "010");
    assert_eq!(fmt("%#010x", &[&255]), "0x000000ff");
    assert_eq!(fmt("%u", &[&3_000_000_000u32]), "3000000000");
    assert_eq!(fmt("%lld", &[&i64::MIN]), "-9223372036854775808");
}

#[test]
fn string_precision_truncates() {
    assert_eq!(fmt("%.2s", &[&"hello"]), "he");
    assert_eq!(fmt("%5.2s|", &[&"hello"]), "   he|");
    assert_eq!(fmt("%.10s", &[&"hi"]), "hi");
    assert_eq!(fmt("%.0s|", &[&"hidden"]), "|");
}

#[test]
fn variable_width_and_precision() {
    assert_eq!(fmt("%*d", &[&3, &9]), "  9");
    assert_eq!(fmt("%-*d|", &[&3, &9]), "9  |");
    assert_eq!(fmt("%*d|", &[&-3, &9]), "9  |");
    assert_eq!(fmt("%.*f", &[&2, &3.14159]), "3.14");
    assert_eq!(fmt("%*.*f|", &[&7, &1, &2.26]), "    2.3|");
    assert_eq!(fmt("%*d %d", &[&4, &1, &2]), "   1 2");
}

#[test]
fn floats() {
    assert_eq!(fmt("%f", &[&1.5]), "1.500000");
    assert_eq!(fmt("%.2f", &[&-0.127]), "-0.13");
    assert_eq!(fmt("%8.3f|", &[&3.14159]), "   3.142|");
    assert_eq!(fmt("%08.3f", &[&-3.14159]), "-003.142");
    assert_eq!(fmt("%e", &[&1234.5]), "1.234500e+03");
    assert_eq!(fmt("%.1E", &[&0.000123]), "1.2E-04");
    assert_eq!(fmt("%g", &[&0.0001]), "0.0001");
    assert_eq!(fmt("%g", &[&123456789.0]), "1.23457e+08");
    assert_eq!(fmt("%G", &[&1e-10]), "1E-10");
    assert_eq!(fmt("%#.3g", &[&1.0]), "1.00");
    assert_eq!(fmt("%F", &[&f64::INFINITY]), "INF");
    assert_eq!(fmt("%f", &[&f64::NAN]), "nan");
}

#[test]
fn chars_bools_and_pointers() {
    assert_eq!(fmt("%c", &[&'x']), "x");
    assert_eq!(fmt("%c", &[&65u8]), "A");
    assert_eq!(fmt("%3c|", &[&'x']), "  x|");
    assert_eq!(fmt("%s %s", &[&true, &false]), "true false");
    assert_eq!(fmt("%d", &[&true]), "1");
    let p = 0xbeefusize as *const u8;
    assert_eq!(fmt("%p", &[&p]), "0xbeef");
}

#[test]
fn length_modifiers_have_no_effect() {
    assert_eq!(
        fmt("%ld %hd %zu %jd %td %Lf", &[&1, &2, &3, &4, &5, &0.5]),
        "1 2 3 4 5 0.500000"
    );
}

#[test]
fn two_directives_one_argument_fails() {
    let err = format("%d %d", &[&1]).unwrap_err();
    assert!(matches!(err, FormatError::TooManyConversionSpecifiers), "{err:?}");
}

#[test]
fn star_claiming_missing_slot_fails() {
    let err = format("%*d", &[&3]).unwrap_err();
    assert!(matches!(err, FormatError::NotEnoughFormatArguments), "{err:?}");
    let err = format("%*d", &[]).unwrap_err();
    assert!(matches!(err, FormatError::TooManyConversionSpecifiers), "{err:?}");
}

#[test]
fn extra_trailing_arguments_are_accepted() {
    assert_eq!(fmt("%d", &[&1, &2, &3]), "1");
}

#[test]
fn too_few_directives_for_arguments_fails() {
    let err = format("no directive", &[&1]).unwrap_err();
    assert!(matches!(err, FormatError::NotEnoughConversionSpecifiers), "{err:?}");
}

#[test]
fn unsupported_and_malformed_directives() {
    for (f, kind) in [
        ("%a", "unsupported_conversion"),
        ("%A", "unsupported_conversion"),
        ("%n", "unsupported_conversion"),
        ("%5", "unterminated_directive"),
        ("%q", "unknown_conversion"),
    ] {
        let err = format(f, &[&1.0]).unwrap_err();
        assert_eq!(err.kind(), kind, "{f}");
    }
}

#[test]
fn ambient_configuration_survives_every_call() {
    let ambient = RenderConfig {
        width: 11,
        precision: 2,
        fill: '_',
        base: NumericBase::Hexadecimal,
        show_sign: true,
        ..RenderConfig::default()
    };
    let cases: [(&str, &[&dyn FormatArg]); 5] = [
        ("%5d", &[&1]),
        ("%-+#08.3x", &[&1]),
        ("%d %d", &[&1]),
        ("%*d", &[&1]),
        ("%a", &[&1.0]),
    ];
    for (f, args) in cases {
        let mut sink = StringSink::with_config(ambient);
        let _ = format_to(&mut sink, f, args);
        assert_eq!(*sink.config(), ambient, "{f}");
    }
}

#[test]
fn ambient_configuration_does_not_leak_into_output() {
    let ambient = RenderConfig {
        width: 10,
        fill: '*',
        ..RenderConfig::default()
    };
    let mut sink = StringSink::with_config(ambient);
    format_to(&mut sink, "[%d]", &[&5]).unwrap();
    assert_eq!(sink.as_str(), "[5]");
}

#[test]
fn repeated_calls_are_identical() {
    let mut sink = StringSink::new();
    format_to(&mut sink, "%-6s|%+.2e|% 04d", &[&"ab", &1234.5, &7]).unwrap();
    let first = sink.as_str().to_string();
    sink.clear();
    format_to(&mut sink, "%-6s|%+.2e|% 04d", &[&"ab", &1234.5, &7]).unwrap();
    assert_eq!(sink.as_str(), first);
    assert_eq!(first, "ab    |+1.23e+03| 007");
}

#[test]
fn macro_entry_point() {
    let user = "ada";
    let count = 3usize;
    assert_eq!(
        sprintf!("%s has %03d items", user, count).unwrap(),
        "ada has 003 items"
    );
}

#[test]
fn large_widths_are_honored_and_excessive_ones_rejected() {
    assert_eq!(fmt("%5000d", &[&1]).len(), 5000);
    assert_eq!(fmt("%-*s|", &[&3000, &"x"]).len(), 3001);
    assert_eq!(fmt("%.4500f", &[&0.5]).len(), 4502);

    let err = format("%*d", &[&(MAX_WIDTH as i64 + 1), &1]).unwrap_err();
    assert_eq!(err.kind(), "width_too_large");
    let err = format(&format!("%.{}f", MAX_PRECISION + 1), &[&1.0]).unwrap_err();
    assert_eq!(err.kind(), "precision_too_large");
}
