//! HTML host page for the viewer bundle.

use super::MOUNT_POINT;

/// Path the initializer script is served under.
pub const INITIALIZER_PATH: &str = "/static/swagger-initializer.js";

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the page that loads the bundle assets from `bundle_base_url`
/// and then runs the initializer.
pub fn index_page(title: &str, bundle_base_url: &str) -> String {
    let title = escape_html(title);
    let base = escape_html(bundle_base_url.trim_end_matches('/'));
    let mount_id = MOUNT_POINT.trim_start_matches('#');

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" type="text/css" href="{base}/swagger-ui.css" />
    <link rel="stylesheet" type="text/css" href="{base}/index.css" />
</head>
<body>
    <div id="{mount_id}"></div>
    <script src="{base}/swagger-ui-bundle.js" charset="UTF-8"></script>
    <script src="{base}/swagger-ui-standalone-preset.js" charset="UTF-8"></script>
    <script src="{initializer}" charset="UTF-8"></script>
</body>
</html>
"#,
        initializer = INITIALIZER_PATH,
    )
}
