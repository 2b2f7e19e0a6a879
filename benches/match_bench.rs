use byteclass::{ByteMatch, ByteSet, build, testutil::SetGen};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const HAYSTACK_LEN: usize = 64 * 1024;

fn benchmark_matches(c: &mut Criterion) {
    let mut setgen = SetGen::new(0xDEAD_BEEF);
    let mut group = c.benchmark_group("matches");

    // every byte value repeated, so each matcher sees the whole domain
    let haystack: Vec<u8> = (0..HAYSTACK_LEN).map(|i| i as u8).collect();
    group.throughput(Throughput::Bytes(HAYSTACK_LEN as u64));

    let sets = [
        ("one", ByteSet::from_iter([0x42])),
        ("bitmask", ByteSet::from(0x80..=0xff)),
        ("range", ByteSet::from(b'0'..=b'9')),
        ("set", setgen.random(12)),
        ("table", setgen.random(128)),
    ];

    for (name, set) in sets {
        let matcher = build(&set, false).unwrap();
        group.bench_function(BenchmarkId::new(name, matcher.to_string()), |b| {
            b.iter(|| {
                black_box(&haystack)
                    .iter()
                    .filter(|&&byte| matcher.matches(byte))
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_matches);
criterion_main!(benches);
