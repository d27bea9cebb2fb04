// Public modules
pub mod chat_request;
pub mod chat_response;
pub mod health_status;
pub mod message;
pub mod message_id;
pub mod search_request;
pub mod search_result;
pub mod sender;

// Re-exports
pub use chat_request::ChatRequest;
pub use chat_response::ChatResponse;
pub use health_status::HealthStatus;
pub use message::Message;
pub use message_id::{MessageId, MessageIdGenerator};
pub use search_request::SearchRequest;
pub use search_result::SearchResult;
pub use sender::Sender;
