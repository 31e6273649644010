pub mod client;
pub mod gateway;

pub use client::HttpGatewayClient;
pub use gateway::{compat_base_url, ChatCompletionRequest, ChatGateway, UpstreamError};
