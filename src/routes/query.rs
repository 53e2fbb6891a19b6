use axum::{body::Bytes, extract::State};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    message::{Envelope, QueryRequest},
    services::classifier::classify,
    state::SharedState,
};

// Takes raw bytes so that a missing or malformed JSON body is read as `{}`
// instead of being rejected by the extractor.
pub async fn query_handler(State(state): State<SharedState>, body: Bytes) -> Envelope {
    let request = QueryRequest::from_body(&body);
    let classification = classify(request.raw_input());

    let span = tracing::info_span!(
        "query",
        request_id = %Uuid::new_v4(),
        kind = classification.kind(),
    );

    async move {
        let envelope = state.dispatcher.dispatch(classification).await;
        tracing::info!(status = envelope.status.as_u16(), "query handled");
        envelope
    }
    .instrument(span)
    .await
}
