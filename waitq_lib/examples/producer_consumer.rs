extern crate waitq_lib;

use std::sync::Arc;
use std::thread;

use waitq_lib::BlockingQueue;

fn main() {
    let queue = Arc::new(BlockingQueue::new());

    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for i in 0..10 {
                queue.push(i);
            }
        })
    };
    let consumer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for _ in 0..10 {
                println!("Consumed: {}", queue.pop());
            }
        })
    };

    producer.join().unwrap();
    consumer.join().unwrap();
}
