use axum::extract::Path;

pub async fn hello() -> &'static str {
    "Hello, world"
}

pub async fn personal(Path(name): Path<String>) -> String {
    format!("Hello, {name}")
}
