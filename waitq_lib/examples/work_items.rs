/// Typed jobs encoded as JSON strings and shipped through a single queue.
extern crate waitq_lib;

use std::sync::Arc;
use std::thread;

use serde::{Deserialize, Serialize};

use waitq_lib::BlockingQueue;

#[derive(Serialize, Deserialize)]
struct WorkItem {
    id: u32,
    payload: String,
}

fn main() {
    let queue = Arc::new(BlockingQueue::<String>::new());

    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for id in 0..5 {
                let item = WorkItem {
                    id,
                    payload: format!("job #{}", id),
                };
                queue.push(serde_json::to_string(&item).unwrap());
            }
        })
    };

    for _ in 0..5 {
        let item: WorkItem = serde_json::from_str(&queue.pop()).unwrap();
        println!("Processing {}: {}", item.id, item.payload);
    }
    producer.join().unwrap();
}
