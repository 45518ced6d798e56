//! HTML status page rendering.
//!
//! The page reloads itself every [`REFRESH_SECONDS`] via a `meta refresh`
//! tag; there is no server push.

use relay_types::Identifier;

/// Client-side reload interval for the status page.
pub const REFRESH_SECONDS: u32 = 2;

/// Text shown in place of the identifier while the relay is empty.
pub const WAITING_PLACEHOLDER: &str = "Waiting for game instance...";

/// Render the status page for the given identifier, if any.
///
/// Identifiers consist only of hex digits and hyphens, so they are
/// written into the markup as-is.
pub fn render_status_page(current: Option<&Identifier>) -> String {
    let (display, label) = current.map_or_else(
        || (WAITING_PLACEHOLDER.to_owned(), String::new()),
        |id| (id.to_string(), id.label()),
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="{REFRESH_SECONDS}">
    <title>Game Instance Relay</title>
    <style>
        body {{
            background: #0d1117;
            color: #58a6ff;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 40px;
            text-align: center;
        }}
        h1 {{ color: #58a6ff; }}
        #id {{
            font-size: 18px;
            padding: 20px;
            background: #161b22;
            border-radius: 8px;
            margin: 20px auto;
            max-width: 800px;
            word-break: break-all;
        }}
        .info {{ color: #8b949e; font-size: 14px; margin-top: 10px; }}
        .footer {{ color: #8b949e; font-size: 14px; }}
    </style>
</head>
<body>
    <h1>Game Instance Relay</h1>
    <div id="id">{display}</div>
    <div class="info">{label}</div>
    <p class="footer">Auto-refreshes every {REFRESH_SECONDS} seconds</p>
</body>
</html>"#
    )
}
