#![no_main]
use libfuzzer_sys::fuzz_target;
use tinyfmt_core::{FormatArg, FormatSink, NumericBase, RenderConfig, StringSink, format_to};

// Arbitrary format strings against a fixed mixed argument list: the engine
// must return Ok or Err, never panic, and always restore the sink config.
fuzz_target!(|data: &[u8]| {
    let Ok(fmt) = std::str::from_utf8(data) else {
        return;
    };

    let ambient = RenderConfig {
        width: 3,
        fill: '.',
        base: NumericBase::Octal,
        ..RenderConfig::default()
    };
    let args: [&dyn FormatArg; 6] = [&-7i32, &3u64, &2.5f64, &"str", &'c', &true];

    let mut sink = StringSink::with_config(ambient);
    let first = format_to(&mut sink, fmt, &args).map_err(|e| e.kind());
    assert_eq!(*sink.config(), ambient);

    let out = sink.into_string();
    let mut again = StringSink::with_config(ambient);
    let second = format_to(&mut again, fmt, &args).map_err(|e| e.kind());
    assert_eq!(first, second);
    assert_eq!(out, again.as_str());
});
