pub mod event;
pub mod publish;

pub use event::CustomerEvent;
pub use publish::{
    EventPublisher, EventReceiver, NullPublisher, QueuePublisher, queue, spawn_subscriber,
};
