//! # Mock Framework & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of scripted expectations instead of an actor's store. Code that takes a
//! `ResourceClient` (a resource-specific client, an HTTP router) can be exercised with
//! deterministic answers and injected failures without spawning a `ResourceActor`.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (scripted replies) | Real store |
//! | **Use Case** | Logic *around* the client | The actor itself, full system |
//! | **Error Injection** | Easy (`return_err`) | Needs a specific store state |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Item { id: u64, label: String }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u64; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Context = (); type Error = ItemError;
//!     fn id(&self) -> &u64 { &self.id }
//!     fn from_create_params(id: u64, _: ItemCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, label: String::new() })
//!     }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Some(Item { id: 1, label: "one".into() }));
//!     mock.expect_delete(2).return_err(FrameworkError::NotFound("2".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().label, "one");
//!     assert!(client.delete(2).await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw channel inspection
//!
//! [`create_mock_client`] returns the client together with the request receiver, for tests
//! that need to look at the payload a client sent (see [`expect_create`], [`expect_update`]).

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted reply, matched in FIFO order against incoming requests.
enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Replace(T::Id, Result<T, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn check_id<T: ActorEntity>(expected: &T::Id, actual: &T::Id) {
    assert_eq!(expected, actual, "request addressed an unexpected id");
}

/// A mock client with expectation tracking for fluent testing.
///
/// A request that does not match the next queued expectation panics inside the mock task;
/// the caller then sees [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().expect("expectation queue poisoned").pop_front();

                match (request, next) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(want, r))) => {
                        check_id::<T>(&want, &id);
                        answer(respond_to, r)
                    }
                    (
                        ResourceRequest::Replace { id, respond_to, .. },
                        Some(Expectation::Replace(want, r)),
                    ) => {
                        check_id::<T>(&want, &id);
                        answer(respond_to, r)
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(want, r)),
                    ) => {
                        check_id::<T>(&want, &id);
                        answer(respond_to, r)
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete(want, r)),
                    ) => {
                        check_id::<T>(&want, &id);
                        answer(respond_to, r)
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn expect<R>(
        &mut self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap: Box::new(wrap),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.expect(Expectation::Create)
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.expect(Expectation::List)
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.expect(move |r| Expectation::Get(id, r))
    }

    /// Expects a `replace` operation for `id`.
    pub fn expect_replace(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.expect(move |r| Expectation::Replace(id, r))
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.expect(move |r| Expectation::Update(id, r))
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.expect(move |r| Expectation::Delete(id, r))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Queues the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(expectation);
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// Lets a test assert on the exact payload a client sent before answering it by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next message and returns it if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next message and returns it if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}
