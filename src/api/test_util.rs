use axum::body::{self, Body, Bytes};
use serde::de::DeserializeOwned;

/// Reads the whole response body, failing the test if that isn't possible
pub async fn body_bytes(response_body: Body) -> Bytes {
    body::to_bytes(response_body, usize::MAX)
        .await
        .expect("Could not read data from response body!")
}

/// Reads the response body and parses it as JSON into the requested type. Panics with the raw
/// body in the message if parsing fails.
pub async fn deserialize_body<T: DeserializeOwned>(response_body: Body) -> T {
    let bytes = body_bytes(response_body).await;

    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "Could not parse body content into data structure! Error: {}, Received body: {:?}",
            err, bytes
        )
    })
}
