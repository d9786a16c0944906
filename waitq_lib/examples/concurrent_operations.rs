/// Producer and consumer threads racing on a shared queue, pausing a random
/// 100-200ms between operations to simulate work.
extern crate waitq_lib;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::Rng;

use waitq_lib::BlockingQueue;

#[derive(Parser)]
struct Args {
    /// Number of items to move through the queue
    #[arg(long, default_value_t = 10)]
    items: u64,
}

fn main() {
    let args = Args::parse();
    let queue = Arc::new(BlockingQueue::new());

    let producer = {
        let queue = queue.clone();
        let items = args.items;
        thread::spawn(move || {
            for i in 0..items {
                let pause = rand::thread_rng().gen_range(100..200);
                thread::sleep(Duration::from_millis(pause));
                queue.push(i);
                println!("Enqueued {}", i);
            }
        })
    };
    let consumer = {
        let queue = queue.clone();
        let items = args.items;
        thread::spawn(move || {
            for _ in 0..items {
                let pause = rand::thread_rng().gen_range(100..200);
                thread::sleep(Duration::from_millis(pause));
                let item = queue.pop();
                println!("Dequeued {}", item);
            }
        })
    };

    producer.join().unwrap();
    consumer.join().unwrap();
}
