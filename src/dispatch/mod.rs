pub mod dispatcher;
pub mod operation;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use dispatcher::RequestDispatcher;
pub use operation::Operation;
pub use request::{Request, TransportError};
pub use response::{Response, codes};
