//! Remote todo service API abstractions.

mod api_client;
mod codec;
mod error;
mod http_sender;
mod task;
mod todo_api;

#[cfg(test)]
mod mock_sender;
#[cfg(test)]
mod test_utils;

pub use api_client::ApiClient;
pub use error::Error;
pub use http_sender::{DefaultSender, HttpSender};
pub use task::Task;
pub use todo_api::TodoApi;
