use reqwest::StatusCode;

use crate::api::api_client::{ApiClient, unexpected_status};
use crate::api::codec;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::api::task::Task;

/// CRUD operations over the remote `/todos` collection.
#[async_trait::async_trait]
pub trait TodoApi {
    async fn get_all_tasks(&self) -> Result<Vec<Task>, Error>;
    async fn get_task_by_id(&self, id: &str) -> Result<Task, Error>;
    async fn add_task(&self, task: &Task) -> Result<Task, Error>;
    async fn update_task_by_id(&self, task: &Task) -> Result<Task, Error>;
    async fn delete_task_by_id(&self, id: &str) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender> TodoApi for ApiClient<S> {
    async fn get_all_tasks(&self) -> Result<Vec<Task>, Error> {
        let url = self.todos_url();
        let response = self.send_get(&url).await?;

        // The list endpoint defines no 404 mapping; anything but 200 is unknown.
        if response.status() != StatusCode::OK {
            return Err(unexpected_status(response).await);
        }
        let body = response.bytes().await?;
        codec::decode_tasks(&body)
    }

    async fn get_task_by_id(&self, id: &str) -> Result<Task, Error> {
        let url = self.todo_url(id);
        let response = self.send_get(&url).await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await?;
                codec::decode_task(&body)
            }
            StatusCode::NOT_FOUND => Err(Error::ItemNotFound),
            _ => Err(unexpected_status(response).await),
        }
    }

    async fn add_task(&self, task: &Task) -> Result<Task, Error> {
        let url = self.todos_url();
        let payload = codec::encode_task(task)?;
        let response = self.send_post_json(&url, payload).await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let body = response.bytes().await?;
                codec::decode_task(&body)
            }
            _ => Err(unexpected_status(response).await),
        }
    }

    async fn update_task_by_id(&self, task: &Task) -> Result<Task, Error> {
        let url = self.todo_url(&task.id);
        let payload = codec::encode_task(task)?;
        let response = self.send_put_json(&url, payload).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::ItemNotFound),
            status if status.is_success() => {
                let body = response.bytes().await?;
                codec::decode_task(&body)
            }
            _ => Err(unexpected_status(response).await),
        }
    }

    async fn delete_task_by_id(&self, id: &str) -> Result<(), Error> {
        let url = self.todo_url(id);
        let response = self.send_delete(&url).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::ItemNotFound),
            status if status.is_success() => Ok(()),
            _ => Err(unexpected_status(response).await),
        }
    }
}
