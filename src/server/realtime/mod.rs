//! Publish-only real-time notifications.
//!
//! Services publish through the `EventPublisher` trait; `RealtimeHub` fans events out to
//! every connected WebSocket over a `tokio::sync::broadcast` channel. Delivery is
//! at-most-once with no replay for late subscribers.

pub mod socket;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast;

/// Events buffered per subscriber before the slowest one starts losing them.
const CHANNEL_CAPACITY: usize = 256;

pub type ConnectionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Accepted bid, delivered to every client
    BidUpdate,
    /// Auction room relay, delivered to every client except the sender
    AuctionRoom,
    /// Message room relay, delivered to every client except the sender
    MessageRoom,
}

impl Topic {
    /// Event name used when delivering to clients.
    pub fn outgoing_name(&self) -> &'static str {
        match self {
            Topic::BidUpdate => "bidUpdate",
            Topic::AuctionRoom => "receive_message",
            Topic::MessageRoom => "receive_message2",
        }
    }

    /// Maps an event name sent by a client to the room it relays into.
    pub fn from_incoming(name: &str) -> Option<Self> {
        match name {
            "auctionRoom" => Some(Topic::AuctionRoom),
            "messageRoom" => Some(Topic::MessageRoom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RealtimeEvent {
    pub topic: Topic,
    pub payload: serde_json::Value,
    /// Connection that triggered the event, which must not receive it back
    pub origin: Option<ConnectionId>,
}

/// `{"event": <name>, "data": <json>}` frame exchanged over the socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub event: String,
    pub data: serde_json::Value,
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("No realtime subscribers connected")]
    NoSubscribers,
    #[error("Failed to serialize realtime payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait EventPublisher: Send + Sync {
    /// Publishes an event, returning how many subscribers will receive it.
    fn publish(&self, event: RealtimeEvent) -> Result<usize, PublishError>;
}

/// Serializes `payload` and publishes it under `topic` with no origin.
pub fn publish_json<T: Serialize>(
    publisher: &dyn EventPublisher,
    topic: Topic,
    payload: &T,
) -> Result<usize, PublishError> {
    publisher.publish(RealtimeEvent {
        topic,
        payload: serde_json::to_value(payload)?,
        origin: None,
    })
}

/// Broadcast hub shared by the HTTP services and every socket connection.
#[derive(Clone)]
pub struct RealtimeHub {
    sender: broadcast::Sender<RealtimeEvent>,
    next_connection: Arc<AtomicU64>,
}

impl RealtimeHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            next_connection: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.sender.subscribe()
    }

    pub fn next_connection_id(&self) -> ConnectionId {
        self.next_connection.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for RealtimeHub {
    fn publish(&self, event: RealtimeEvent) -> Result<usize, PublishError> {
        self.sender
            .send(event)
            .map_err(|_| PublishError::NoSubscribers)
    }
}
