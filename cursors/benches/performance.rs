use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cursors::{Container, Cursor, Decorator, FixedArray, ForeignCursor, GrowableSeq, Passthrough};
use std::collections::LinkedList;

fn bench_sequential_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_insert");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("fixed_array", size), size, |b, &size| {
            b.iter(|| {
                let mut array = FixedArray::with_capacity(size).unwrap();
                for i in 0..size {
                    black_box(array.insert(i).unwrap());
                }
                black_box(array.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("growable_seq", size), size, |b, &size| {
            b.iter(|| {
                let mut seq = GrowableSeq::new();
                for i in 0..size {
                    seq.push(i);
                }
                black_box(seq.len())
            });
        });
    }
    group.finish();
}

fn bench_cursor_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [100, 1000].iter() {
        let seq: GrowableSeq<usize> = (0..*size).collect();
        let list: LinkedList<usize> = (0..*size).collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("slice_iter", size), size, |b, _| {
            b.iter(|| {
                for item in black_box(&seq) {
                    black_box(item);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("slice_cursor", size), size, |b, _| {
            b.iter(|| {
                let mut cursor = black_box(&seq).cursor();
                while !cursor.is_done() {
                    black_box(cursor.current().unwrap());
                    cursor.advance().unwrap();
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("decorated_x3", size), size, |b, _| {
            b.iter(|| {
                let mut cursor = Decorator::new(
                    Decorator::new(
                        Decorator::new(black_box(&seq).cursor(), Passthrough),
                        Passthrough,
                    ),
                    Passthrough,
                );
                while !cursor.is_done() {
                    black_box(cursor.current().unwrap());
                    cursor.advance().unwrap();
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("foreign_list", size), size, |b, _| {
            b.iter(|| {
                let mut cursor = ForeignCursor::new(black_box(&list));
                while !cursor.is_done() {
                    black_box(cursor.current().unwrap());
                    cursor.advance().unwrap();
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequential_insert, bench_cursor_traversal);
criterion_main!(benches);
