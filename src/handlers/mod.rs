mod locate;

use axum::response::Html;

pub use locate::locate;

pub const INDEX_HTML: &str = "<html>Example: <a href=/locate?ip=5.135.186.41>/locate?ip=5.135.186.41</a> to show country for IP</html>";

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
