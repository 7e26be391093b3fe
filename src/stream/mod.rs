//! 助手回复的流式读取：增量 UTF-8 解码与状态机。
//!
//! Streaming consumer for the assistant endpoint.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`decode`] | Chunk-boundary-safe UTF-8 decoding |
//! | [`assistant`] | The [`AssistantStream`] state machine |

pub mod assistant;
pub mod decode;

pub use assistant::{AssistantStream, StreamPhase};
pub use decode::Utf8ChunkDecoder;
