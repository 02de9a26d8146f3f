/// `/` and every path outside `/categories`, any method.
pub async fn hello() -> &'static str {
    "Hello, World!"
}
