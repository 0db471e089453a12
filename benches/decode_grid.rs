use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fastschem::Schematic;

/// A 64x64x64 grid cycling through every id and data value, so most
/// categories and plenty of faulty blocks are hit.
fn grid() -> Schematic {
    let n = 64 * 64 * 64;
    let ids: Vec<u16> = (0..n).map(|i| (i % 256) as u16).collect();
    let data: Vec<u8> = (0..n).map(|i| ((i / 256) % 16) as u8).collect();
    Schematic::new(64, 64, 64, &ids, &data).unwrap()
}

pub fn decode_benchmark(c: &mut Criterion) {
    let schematic = grid();
    c.bench_function("decode grid", |b| {
        b.iter(|| {
            let decoded = schematic.decode().unwrap();
            black_box(decoded);
        });
    });

    let bytes = fastnbt::to_bytes(&schematic).unwrap();
    c.bench_function("parse schematic", |b| {
        b.iter(|| {
            let parsed = Schematic::from_bytes(&bytes).unwrap();
            black_box(parsed);
        });
    });
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
