// Adapters layer: concrete senders. None of these talk to the network.

pub mod console;
pub mod outbox;

pub use console::ConsoleSender;
pub use outbox::OutboxSender;
