use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use waitq_lib::BlockingQueue;

fn ship_through_blocking_queue(n: u64) {
    let queue = Arc::new(BlockingQueue::new());
    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for i in 0..n {
                queue.push(i);
            }
        })
    };
    for _ in 0..n {
        black_box(queue.pop());
    }
    producer.join().unwrap();
}

fn ship_through_std_channel(n: u64) {
    let (tx, rx) = mpsc::channel();
    let producer = thread::spawn(move || {
        for i in 0..n {
            tx.send(i).unwrap();
        }
    });
    for _ in 0..n {
        black_box(rx.recv().unwrap());
    }
    producer.join().unwrap();
}

fn bench_producer_consumer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ProducerConsumer");
    let range = [1000, 2000, 4000, 8000];
    for n in range.iter() {
        group.bench_with_input(BenchmarkId::new("BlockingQueue", n), n, |b, n| {
            b.iter(|| ship_through_blocking_queue(black_box(*n)))
        });
    }
    for n in range.iter() {
        group.bench_with_input(BenchmarkId::new("StdChannel", n), n, |b, n| {
            b.iter(|| ship_through_std_channel(black_box(*n)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_producer_consumer);
criterion_main!(benches);
