use std::io;
use fifo_queue::Queue;
use fifo_queue::core::log::{append_logs, Logger, Op};

fn main() -> io::Result<()> {
    let mut queue: Queue<u32> = Queue::new();
    let mut logger = Logger::new();

    // Push 3 items
    for i in 1..=3 {
        queue.push(i);
        logger.log(Op::Push, Some(i), queue.len());
    }

    match queue.front() {
        Ok(item) => logger.log(Op::Front, Some(*item), queue.len()),
        Err(err) => logger.log_failure(Op::Front, &err, queue.len()),
    }
    match queue.back() {
        Ok(item) => logger.log(Op::Back, Some(*item), queue.len()),
        Err(err) => logger.log_failure(Op::Back, &err, queue.len()),
    }

    // Drain, then pop once more than there are items
    for _ in 0..4 {
        match queue.pop() {
            Ok(item) => logger.log(Op::Pop, Some(item), queue.len()),
            Err(err) => logger.log_failure(Op::Pop, &err, queue.len()),
        }
    }

    let stdout = io::stdout();
    append_logs(logger.entries(), &mut stdout.lock())
}
