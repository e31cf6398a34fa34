use std::sync::Arc;

use axum::{debug_handler, extract::State};
use uuid::Uuid;

use crate::{
    db::{Message, MessageUpdate},
    envelope::Data,
    extract::{AppJson, AppPath},
    store::MessageRepository,
    AppError, AppResult,
};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn get_message(
    State(messages): State<Arc<dyn MessageRepository>>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Data<Message>> {
    let Some(msg) = messages.find_by_id(id).await? else {
        return Err(AppError::not_found("message"));
    };

    Ok(Data::new(msg))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn update_message(
    State(messages): State<Arc<dyn MessageRepository>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(update): AppJson<MessageUpdate>,
) -> AppResult<Data<Message>> {
    let msg = messages
        .update(id, update)
        .await?
        .ok_or(AppError::not_found("message"))?;
    tracing::debug!(%id, "updated message");

    Ok(Data::new(msg))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn delete_message(
    State(messages): State<Arc<dyn MessageRepository>>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Data<Message>> {
    let msg = messages
        .delete(id)
        .await?
        .ok_or(AppError::not_found("message"))?;
    tracing::info!(%id, "deleted message");

    Ok(Data::new(msg))
}
