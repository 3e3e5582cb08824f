use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use crate::server::{
    realtime::{ConnectionId, EventPublisher, RealtimeEvent, RealtimeHub, Topic, WireMessage},
    state::AppState,
};

/// Upgrades `GET /socket` to a WebSocket subscribed to the realtime hub.
pub async fn socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let hub = state.events.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

async fn handle_socket(socket: WebSocket, hub: RealtimeHub) {
    let connection = hub.next_connection_id();
    let (mut sink, mut stream) = socket.split();
    let mut events = hub.subscribe();

    tracing::debug!(connection, "Socket connected");

    let mut forward = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let Some(frame) = outgoing_frame(&event, connection) else {
                        continue;
                    };
                    if sink.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(connection, skipped, "Socket lagged behind realtime events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let relay_hub = hub.clone();
    let mut relay = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Text(text) => relay_client_frame(&relay_hub, connection, text.as_str()),
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut forward => relay.abort(),
        _ = &mut relay => forward.abort(),
    }

    tracing::debug!(connection, "Socket disconnected");
}

/// Serializes `event` for `connection`, or `None` when the connection sent it.
fn outgoing_frame(event: &RealtimeEvent, connection: ConnectionId) -> Option<String> {
    if event.origin == Some(connection) {
        return None;
    }

    let message = WireMessage {
        event: event.topic.outgoing_name().to_string(),
        data: event.payload.clone(),
    };

    match serde_json::to_string(&message) {
        Ok(frame) => Some(frame),
        Err(e) => {
            tracing::error!("Failed to serialize realtime event: {}", e);
            None
        }
    }
}

/// Rebroadcasts a room frame from a client. Malformed or unknown frames are dropped.
fn relay_client_frame(hub: &RealtimeHub, connection: ConnectionId, raw: &str) {
    let message = match serde_json::from_str::<WireMessage>(raw) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(connection, "Ignoring malformed socket frame: {}", e);
            return;
        }
    };

    let Some(topic) = Topic::from_incoming(&message.event) else {
        tracing::debug!(connection, event = %message.event, "Ignoring unknown socket event");
        return;
    };

    if let Err(e) = hub.publish(RealtimeEvent {
        topic,
        payload: message.data,
        origin: Some(connection),
    }) {
        tracing::debug!(connection, "Room relay not delivered: {}", e);
    }
}
