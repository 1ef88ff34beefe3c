//! JSON codec between [`Task`] and its wire form.
//!
//! The wire object carries exactly the four contract fields `id`, `userId`,
//! `title` and `finished`. Decoding fails when the body is not valid JSON or
//! when any required field is missing or mistyped.

use crate::api::error::Error;
use crate::api::task::Task;

pub(super) fn encode_task(task: &Task) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(task).map_err(Error::Encode)
}

pub(super) fn decode_task(bytes: &[u8]) -> Result<Task, Error> {
    serde_json::from_slice(bytes).map_err(Error::Decode)
}

/// Decodes a JSON array of task objects, preserving array order.
pub(super) fn decode_tasks(bytes: &[u8]) -> Result<Vec<Task>, Error> {
    serde_json::from_slice(bytes).map_err(Error::Decode)
}
