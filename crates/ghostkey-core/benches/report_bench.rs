//! Criterion benchmarks for boot keyboard report encoding.
//!
//! Every press and every release produces one report, so a shifted character
//! costs three encodings (Shift, Shift+key, empty).
//!
//! Run with:
//! ```bash
//! cargo bench --package ghostkey-core --bench report_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ghostkey_core::{lookup, HidKeyCode, KeyboardReport};

fn bench_shifted_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_keystroke");

    group.bench_function("shifted_char_three_reports", |b| {
        b.iter(|| {
            let spec = lookup(black_box('!')).expect("'!' is in the table");
            let mut report = KeyboardReport::new();
            report.press(HidKeyCode::ShiftLeft);
            let shift = report.to_bytes();
            report.press(spec.keycode);
            let both = report.to_bytes();
            report.clear();
            (shift, both, report.to_bytes())
        })
    });

    group.bench_function("full_rollover", |b| {
        let keys = [
            HidKeyCode::KeyA,
            HidKeyCode::KeyS,
            HidKeyCode::KeyD,
            HidKeyCode::KeyF,
            HidKeyCode::KeyJ,
            HidKeyCode::KeyK,
            HidKeyCode::KeyL,
        ];
        b.iter(|| {
            let mut report = KeyboardReport::new();
            for &key in black_box(&keys) {
                report.press(key);
            }
            report.to_bytes()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_shifted_keystroke);
criterion_main!(benches);
