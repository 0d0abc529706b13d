//! HTTP access to the employee collection.
//!
//! Every operation is a single attempt against the configured base URL; the
//! caller surfaces failures to the user, who may retry manually. Timeouts
//! are whatever the transport defaults provide.

use crate::{Error, Result};
use crewdir_types::{Employee, EmployeeId};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Client for the employee directory REST resource.
///
/// The collection lives at `<base_url>/api/employees`, with per-id
/// sub-resources for update and delete.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    http: reqwest::Client,
    collection_url: String,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            http: reqwest::Client::new(),
            collection_url: format!("{}/api/employees", base.trim_end_matches('/')),
        }
    }

    /// The full collection URL this store talks to.
    pub fn endpoint(&self) -> &str {
        &self.collection_url
    }

    fn resource_url(&self, id: &EmployeeId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    /// Fetch the entire collection.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        debug!(url = %self.collection_url, "fetching employee list");
        let response = self.http.get(&self.collection_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "employee list rejected");
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Create a new employee. A 409 response maps to [`Error::DuplicateId`].
    pub async fn create(&self, employee: &Employee) -> Result<()> {
        debug!(id = %employee.id, "creating employee");
        let response = self
            .http
            .post(&self.collection_url)
            .json(employee)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            warn!(id = %employee.id, "create rejected: id already exists");
            return Err(Error::DuplicateId {
                id: employee.id.to_string(),
            });
        }
        if !status.is_success() {
            warn!(%status, "create rejected");
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Replace the employee stored under `id`.
    pub async fn update(&self, id: &EmployeeId, employee: &Employee) -> Result<()> {
        debug!(%id, "updating employee");
        let response = self
            .http
            .put(self.resource_url(id))
            .json(employee)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "update rejected");
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Delete the employee stored under `id`.
    pub async fn remove(&self, id: &EmployeeId) -> Result<()> {
        debug!(%id, "deleting employee");
        let response = self.http.delete(self.resource_url(id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "delete rejected");
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
