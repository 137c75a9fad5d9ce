//! WebSocket upgrade + message loop. One connection is one view session.
//!
//! Client messages are parsed as JSON and applied to the session; the
//! immediate updates are sent back in order. Timer completions arrive on the
//! session's event channel and are pushed as they fire. When the socket
//! closes the session is dropped, which cancels its pending timers.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, error, info, instrument};

use crate::logic::problem_detail;
use crate::protocol::{output_msg, ClientWsMessage, ServerWsMessage};
use crate::session::{SessionEvent, ViewSession};
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "codearena", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip_all)]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "codearena", "WebSocket connected");
  let (mut session, mut events) = ViewSession::new(
    state.featured_problem().clone(),
    state.timings.clone(),
    Box::new(StdRng::from_entropy()),
  );

  loop {
    let replies = tokio::select! {
      incoming = socket.recv() => match incoming {
        Some(Ok(Message::Text(txt))) => handle_text(&txt, &mut session, &state),
        Some(Ok(Message::Ping(payload))) => {
          let _ = socket.send(Message::Pong(payload)).await;
          continue;
        }
        Some(Ok(Message::Close(_))) | None => break,
        Some(Err(e)) => {
          error!(target: "codearena", error = %e, "WS receive error");
          break;
        }
        Some(Ok(_)) => continue,
      },
      Some(event) = events.recv() => handle_session_event(event, &mut session),
    };

    if let Err(e) = send_all(&mut socket, replies).await {
      error!(target: "codearena", error = %e, "WS send error");
      break;
    }
  }
  info!(target: "codearena", "WebSocket disconnected");
}

async fn send_all(socket: &mut WebSocket, msgs: Vec<ServerWsMessage>) -> Result<(), axum::Error> {
  for msg in msgs {
    socket.send(Message::Text(encode(&msg))).await?;
  }
  Ok(())
}

fn encode(msg: &ServerWsMessage) -> String {
  serde_json::to_string(msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

/// One text frame. Malformed JSON gets an `error` reply; the session is untouched.
pub fn handle_text(txt: &str, session: &mut ViewSession, state: &AppState) -> Vec<ServerWsMessage> {
  match serde_json::from_str::<ClientWsMessage>(txt) {
    Ok(msg) => {
      debug!(target: "codearena", "WS received: {:?}", &msg);
      handle_client_ws(msg, session, state)
    }
    Err(e) => vec![ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) }],
  }
}

/// A timer completion, turned into the messages pushed to the client.
pub fn handle_session_event(event: SessionEvent, session: &mut ViewSession) -> Vec<ServerWsMessage> {
  session.handle_event(event).into_iter().map(ServerWsMessage::from).collect()
}

/// Apply one client message to the session. Ignored requests produce no reply.
pub fn handle_client_ws(msg: ClientWsMessage, session: &mut ViewSession, state: &AppState) -> Vec<ServerWsMessage> {
  match msg {
    ClientWsMessage::Ping => vec![ServerWsMessage::Pong],

    ClientWsMessage::OpenProblem { problem_id } => {
      let problem = problem_detail(state, &problem_id).clone();
      session.open_problem(problem);
      let editor = session.editor();
      vec![
        ServerWsMessage::Problem { problem: session.problem().clone() },
        ServerWsMessage::Editor { code: editor.source.clone(), language: editor.language },
        output_msg(session.evaluation()),
      ]
    }

    ClientWsMessage::SetCode { code } => {
      session.set_code(code);
      Vec::new()
    }

    ClientWsMessage::SetLanguage { language } => {
      session.set_language(language);
      let editor = session.editor();
      vec![ServerWsMessage::Editor { code: editor.source.clone(), language: editor.language }]
    }

    ClientWsMessage::Run => session.run().into_iter().map(ServerWsMessage::from).collect(),

    ClientWsMessage::Submit => session.submit().into_iter().map(ServerWsMessage::from).collect(),

    ClientWsMessage::Hint => vec![session.hint().into()],

    ClientWsMessage::ChatSend { text } => session.send_chat(&text).into_iter().map(ServerWsMessage::from).collect(),

    ClientWsMessage::QuickAction { index } => session.quick_action(index).into_iter().map(ServerWsMessage::from).collect(),

    ClientWsMessage::Transcript => vec![ServerWsMessage::Transcript { messages: session.transcript().to_vec() }],
  }
}
