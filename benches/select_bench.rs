use byteclass::{ByteSet, build, testutil::SetGen};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_build(c: &mut Criterion) {
    let mut setgen = SetGen::new(0xDEAD_BEEF);
    let mut group = c.benchmark_group("build");

    let sets = [
        ("one", ByteSet::from_iter([0x42])),
        ("case", ByteSet::from_iter(*b"Qq")),
        ("bitmask", ByteSet::from(0x80..=0xff)),
        ("range", ByteSet::from(b'0'..=b'9')),
        ("small", setgen.random(8)),
        ("table", setgen.random(128)),
        ("sparse_inverse", setgen.random(250)),
    ];

    for (name, set) in sets {
        for match_inverse in [false, true] {
            group.bench_function(BenchmarkId::new(name, match_inverse), |b| {
                b.iter(|| black_box(build(black_box(&set), match_inverse)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_build);
criterion_main!(benches);
