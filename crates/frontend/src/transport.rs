use async_trait::async_trait;
use fairchat_core::{RespondError, RespondRequest, RespondResponse, RespondResult, RespondTransport};

/// Used when the respond client could not be built
///
/// Every request settles as a transport failure, so the widget stays usable
/// and shows the network error text instead of breaking the page.
pub struct UnavailableTransport {
    reason: String,
}

impl UnavailableTransport {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait(?Send)]
impl RespondTransport for UnavailableTransport {
    async fn respond(&self, _request: &RespondRequest) -> RespondResult<RespondResponse> {
        Err(RespondError::transport(self.reason.clone()))
    }
}
