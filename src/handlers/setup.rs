use axum::extract::State;
use axum::response::Html;

use crate::types::AppState;

/// Static setup page. Informational only; the gateway port is the sole
/// dynamic value interpolated into the text.
pub async fn setup_page(State(state): State<AppState>) -> Html<String> {
    let port = state.config.gateway_port;
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>OpenClaw Setup</title>
  <style>
    body {{ font-family: system-ui; max-width: 600px; margin: 50px auto; padding: 20px; }}
    .card {{ background: #f5f5f5; padding: 20px; border-radius: 8px; }}
    a {{ color: #0066cc; text-decoration: none; }}
    a:hover {{ text-decoration: underline; }}
  </style>
</head>
<body>
  <h1>🦞 OpenClaw Setup</h1>
  <div class="card">
    <h2>Gateway is Running!</h2>
    <p>Your OpenClaw gateway is running on port {port}.</p>
    <p><strong>Next steps:</strong></p>
    <ol>
      <li>Configure your AI provider (Anthropic, OpenAI, etc.)</li>
      <li>Set up messaging channels (Telegram, Discord, WhatsApp)</li>
      <li>Start chatting with your AI assistant!</li>
    </ol>
    <p><a href="/openclaw">→ Open Control UI</a></p>
  </div>
  <div class="card" style="margin-top: 20px;">
    <h3>Environment Variables</h3>
    <p>Make sure these are set in your deployment:</p>
    <ul>
      <li><code>OPENCLAW_STATE_DIR=/data/.openclaw</code></li>
      <li><code>OPENCLAW_WORKSPACE_DIR=/data/workspace</code></li>
      <li><code>PORT=8080</code></li>
    </ul>
  </div>
</body>
</html>
"#
    ))
}
