//! # leadflow-runtime
//!
//! Async shell around `leadflow-core`: snapshot stores (memory, file),
//! submission payload assembly, the webhook sink, and the
//! [`session::FlowSession`] that wires them to the navigation state
//! machine.

pub mod payload;
pub mod session;
pub mod sink;
pub mod store;

pub use session::FlowSession;
pub use sink::{NullSink, SinkError, SubmissionSink, WebhookSink};
pub use store::{FileStore, MemoryStore, SNAPSHOT_NAMESPACE, SnapshotStore, StoreError};

pub mod prelude {
    pub use crate::payload;
    pub use crate::session::FlowSession;
    pub use crate::sink::{NullSink, SubmissionSink, WebhookSink};
    pub use crate::store::{FileStore, MemoryStore, SnapshotStore};
}
