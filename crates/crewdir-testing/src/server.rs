//! In-process mock of the employee directory API.
//!
//! Implements the same contract the real backend exposes: GET/POST on the
//! collection, PUT/DELETE on per-id sub-resources, 409 on duplicate create.
//! The server runs on its own thread with its own runtime so it works both
//! under `#[tokio::test]` and behind `assert_cmd` process tests.

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use crewdir_types::Employee;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

#[derive(Clone)]
struct ServerState {
    employees: Arc<Mutex<Vec<Employee>>>,
    fail_all: Arc<AtomicBool>,
    list_calls: Arc<AtomicUsize>,
    delete_calls: Arc<AtomicUsize>,
}

/// Handle to a running mock server. Shuts down when dropped.
pub struct MockDirectoryServer {
    addr: SocketAddr,
    state: ServerState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockDirectoryServer {
    /// Start with an empty directory.
    pub fn start() -> Result<Self> {
        Self::start_with(Vec::new())
    }

    /// Start with a seeded directory.
    pub fn start_with(seed: Vec<Employee>) -> Result<Self> {
        let state = ServerState {
            employees: Arc::new(Mutex::new(seed)),
            fail_all: Arc::new(AtomicBool::new(false)),
            list_calls: Arc::new(AtomicUsize::new(0)),
            delete_calls: Arc::new(AtomicUsize::new(0)),
        };

        // Bind synchronously so the address is known before the server
        // thread starts accepting.
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app_state = state.clone();

        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(_) => return,
            };

            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(listener) {
                    Ok(listener) => listener,
                    Err(_) => return,
                };

                let app = router(app_state);
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
        })
    }

    /// Base URL to hand to a `RemoteStore` or the CLI.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Snapshot of the server-side directory.
    pub fn employees(&self) -> Vec<Employee> {
        self.state.employees.lock().unwrap().clone()
    }

    /// When set, every request answers 500 (simulates a broken backend).
    pub fn set_fail_all(&self, fail: bool) {
        self.state.fail_all.store(fail, Ordering::SeqCst);
    }

    /// How many GETs the collection endpoint has served.
    pub fn list_calls(&self) -> usize {
        self.state.list_calls.load(Ordering::SeqCst)
    }

    /// How many DELETEs have been received, confirmed or not.
    pub fn delete_calls(&self) -> usize {
        self.state.delete_calls.load(Ordering::SeqCst)
    }
}

impl Drop for MockDirectoryServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            put(update_employee).delete(delete_employee),
        )
        .with_state(state)
}

async fn list_employees(State(state): State<ServerState>) -> Response {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let employees = state.employees.lock().unwrap().clone();
    Json(employees).into_response()
}

async fn create_employee(
    State(state): State<ServerState>,
    Json(employee): Json<Employee>,
) -> StatusCode {
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let mut employees = state.employees.lock().unwrap();
    if employees.iter().any(|e| e.id == employee.id) {
        return StatusCode::CONFLICT;
    }
    employees.push(employee);
    StatusCode::CREATED
}

async fn update_employee(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(employee): Json<Employee>,
) -> StatusCode {
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let mut employees = state.employees.lock().unwrap();
    match employees.iter_mut().find(|e| e.id.as_str() == id) {
        Some(slot) => {
            *slot = employee;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_employee(State(state): State<ServerState>, Path(id): Path<String>) -> StatusCode {
    state.delete_calls.fetch_add(1, Ordering::SeqCst);
    if state.fail_all.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let mut employees = state.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e.id.as_str() != id);
    if employees.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
