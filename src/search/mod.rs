pub mod query_id;
pub mod observer;
pub mod mapper;
pub mod coordinator;

pub use coordinator::QueryCoordinator;
pub use mapper::ResultMapper;
pub use observer::{ObserverHub, ObserverId, SearchObserver};
