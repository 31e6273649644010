use std::sync::LazyLock;

pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://gateway.ai.cloudflare.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "workers-ai/@cf/meta/llama-3.1-8b-instruct";

// Path segment appended to the resolved gateway URL for the OpenAI-compatible API.
pub const COMPAT_PATH: &str = "compat";
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

pub const GATEWAY_AUTH_HEADER: &str = "cf-aig-authorization";
// Auth flows through the gateway header; the provider key slot only needs a value.
pub const PLACEHOLDER_API_KEY: &str = "unused";

pub const NO_PROMPT_MESSAGE: &str = "No prompt provided";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Upstream error";

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "chat-relay/{} {}/{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
});
