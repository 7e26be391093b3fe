//! Integration tests with mock HTTP server

mod batch;
mod errors;
mod mock_server;
