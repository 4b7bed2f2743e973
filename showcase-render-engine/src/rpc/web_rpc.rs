use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::interaction::events::{CloseRequested, OpenRequested, RequestSource};
use crate::engine::interaction::sequencer::{HingePhase, HingeSequencer};
use crate::page::navigation::SectionNavigationRequested;
use crate::page::scroll_effects::{ScrollState, SectionVisibilityReported};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page
/// and the engine. Handles both request-response patterns and notification
/// broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage RPC layer for iframe deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Validate RPC format before queuing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Side-effect channels an RPC method may reach into.
#[derive(bevy::ecs::system::SystemParam)]
pub struct RpcDispatch<'w> {
    sequencer: Res<'w, HingeSequencer>,
    scroll_state: ResMut<'w, ScrollState>,
    open_events: EventWriter<'w, OpenRequested>,
    close_events: EventWriter<'w, CloseRequested>,
    nav_events: EventWriter<'w, SectionNavigationRequested>,
    section_events: EventWriter<'w, SectionVisibilityReported>,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut dispatch: RpcDispatch,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let result = dispatch_rpc_method(&request, &diagnostics, &mut dispatch);

                // Only requests carrying an id receive a response;
                // notifications are fire-and-forget.
                let Some(id) = request.id.clone() else {
                    if let Err(error) = result {
                        warn!("RPC notification '{}' failed: {}", request.method, error.message);
                    }
                    continue;
                };

                let response = match result {
                    Ok(result_value) => RpcResponse {
                        jsonrpc: "2.0".to_string(),
                        result: Some(result_value),
                        error: None,
                        id: Some(id),
                    },
                    Err(error) => RpcResponse {
                        jsonrpc: "2.0".to_string(),
                        result: None,
                        error: Some(error),
                        id: Some(id),
                    },
                };
                rpc_interface.queue_response(response);
            }
            Err(parse_error) => {
                warn!("Failed to parse RPC message: {}", parse_error);
            }
        }
    }
}

/// Route a request or notification to its handler.
fn dispatch_rpc_method(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    dispatch: &mut RpcDispatch,
) -> Result<serde_json::Value, RpcError> {
    match request.method.as_str() {
        "open_device" => {
            dispatch.open_events.write(OpenRequested {
                source: RequestSource::Rpc,
            });
            Ok(serde_json::json!({ "queued": true }))
        }
        "close_device" => {
            dispatch.close_events.write(CloseRequested {
                source: RequestSource::Rpc,
            });
            Ok(serde_json::json!({ "queued": true }))
        }
        "navigate_to_section" => handle_navigate_to_section(&request.params, dispatch),
        "scroll_update" => handle_scroll_update(&request.params, dispatch),
        "section_visible" => handle_section_visible(&request.params, dispatch),
        "get_device_state" => handle_get_device_state(dispatch),
        "get_fps" => handle_get_fps(diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError {
                code: -32601,
                message: "Method not found".to_string(),
                data: Some(serde_json::json!({ "method": request.method })),
            })
        }
    }
}

fn handle_navigate_to_section(
    params: &serde_json::Value,
    dispatch: &mut RpcDispatch,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct NavigateParams {
        section: String,
    }

    let nav_params = serde_json::from_value::<NavigateParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'section' parameter"))?;

    info!("Section navigation requested: {}", nav_params.section);
    dispatch.nav_events.write(SectionNavigationRequested {
        section: nav_params.section.clone(),
    });

    Ok(serde_json::json!({ "queued": true, "section": nav_params.section }))
}

fn handle_scroll_update(
    params: &serde_json::Value,
    dispatch: &mut RpcDispatch,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct ScrollParams {
        offset: f32,
        viewport_height: f32,
    }

    let scroll = serde_json::from_value::<ScrollParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'offset' and 'viewport_height'"))?;

    dispatch.scroll_state.offset = scroll.offset.max(0.0);
    dispatch.scroll_state.viewport_height = scroll.viewport_height;

    Ok(serde_json::json!({ "applied": true }))
}

fn handle_section_visible(
    params: &serde_json::Value,
    dispatch: &mut RpcDispatch,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct SectionParams {
        section: String,
    }

    let section_params = serde_json::from_value::<SectionParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'section' parameter"))?;

    dispatch.section_events.write(SectionVisibilityReported {
        section: section_params.section,
    });

    Ok(serde_json::json!({ "applied": true }))
}

fn handle_get_device_state(dispatch: &RpcDispatch) -> Result<serde_json::Value, RpcError> {
    let phase = match dispatch.sequencer.phase() {
        HingePhase::Idle => "idle",
        HingePhase::Opening => "opening",
        HingePhase::Closing => "closing",
    };

    Ok(serde_json::json!({
        "open": dispatch.sequencer.is_open(),
        "phase": phase,
        "model_ready": dispatch.sequencer.model_ready(),
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({ "fps": fps }))
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_roundtrip() {
        let raw = r#"{"jsonrpc":"2.0","method":"navigate_to_section","params":{"section":"about"},"id":7}"#;
        let request: RpcRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.method, "navigate_to_section");
        assert_eq!(request.id, Some(serde_json::json!(7)));
        assert_eq!(request.params["section"], "about");
    }

    #[test]
    fn test_notification_has_no_id() {
        let raw = r#"{"jsonrpc":"2.0","method":"scroll_update","params":{"offset":120.0,"viewport_height":800.0}}"#;
        let request: RpcRequest = serde_json::from_str(raw).unwrap();
        assert!(request.id.is_none());
    }

    #[test]
    fn test_error_constructors() {
        assert_eq!(RpcError::invalid_params("x").code, -32602);
        assert_eq!(RpcError::internal_error("x").code, -32603);
    }
}
