use circular_array::CircularArray;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

fn bench_circular_array(c: &mut Criterion) {
    let n = 256;
    {
        let mut group = c.benchmark_group("VecDeque vs CircularArray (PushBack 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("CircularArray<i32>", |b| {
            b.iter(|| {
                let mut ca = CircularArray::new();
                for i in 0..n {
                    ca.push_back(black_box(i as i32));
                }
                ca
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs CircularArray (Get 256)");
        let mut d_std = VecDeque::new();
        let mut ca: CircularArray<i32> = CircularArray::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            ca.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("CircularArray<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(ca.get(black_box(i as isize)).ok());
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs CircularArray (MixedEnds 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        d.push_back(black_box(i as i32));
                    } else {
                        d.push_front(black_box(i as i32));
                    }
                }
                while let Some(v) = d.pop_front() {
                    black_box(v);
                }
            })
        });

        group.bench_function("CircularArray<i32>", |b| {
            b.iter(|| {
                let mut ca = CircularArray::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        ca.push_back(black_box(i as i32));
                    } else {
                        ca.push_front(black_box(i as i32));
                    }
                }
                while let Ok(v) = ca.pop_front() {
                    black_box(v);
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_circular_array);
criterion_main!(benches);
