//! Seam between the widget and whatever answers its requests

use crate::error::RespondResult;
use crate::exchange::{RespondRequest, RespondResponse};
use async_trait::async_trait;

/// Something that can answer a respond request
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the single UI thread.
#[async_trait(?Send)]
pub trait RespondTransport {
    async fn respond(&self, request: &RespondRequest) -> RespondResult<RespondResponse>;
}
