use super::decode::Utf8ChunkDecoder;
use crate::transport::ensure_success;
use crate::{BoxStream, Error, Result};
use bytes::Bytes;
use futures::future::BoxFuture;
use futures::stream::{FusedStream, Stream, StreamExt};
use futures::FutureExt;
use reqwest::{RequestBuilder, Response, StatusCode};
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, warn};

/// Observable lifecycle of an [`AssistantStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    /// Created, not yet polled. No connection is open.
    Idle,
    /// Request sent, waiting for the response head.
    Requesting,
    /// Reading body chunks.
    Streaming,
    /// Source exhausted or closed by the caller.
    Closed,
    /// An error was yielded.
    Errored,
}

impl StreamPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, StreamPhase::Closed | StreamPhase::Errored)
    }
}

enum State {
    Idle(RequestBuilder),
    Requesting(BoxFuture<'static, Result<Response>>),
    Streaming {
        source: BoxStream<'static, Bytes>,
        decoder: Utf8ChunkDecoder,
    },
    Closed,
    Errored,
}

/// Lazily opened stream of assistant reply fragments.
///
/// Each body chunk yields exactly one decoded fragment (possibly empty when
/// the chunk ends inside a multi-byte character), in arrival order. A read
/// error is yielded once and ends the stream. Dropping the stream or calling
/// [`close`](Self::close) releases the connection.
pub struct AssistantStream {
    state: State,
    fragments: usize,
}

impl AssistantStream {
    /// Wrap a prepared request. Nothing is sent until the first poll.
    pub fn new(request: RequestBuilder) -> Self {
        Self {
            state: State::Idle(request),
            fragments: 0,
        }
    }

    /// Decode an already-open byte source.
    pub fn from_byte_stream<S>(source: S) -> Self
    where
        S: Stream<Item = Result<Bytes>> + Send + 'static,
    {
        Self {
            state: State::Streaming {
                source: source.boxed(),
                decoder: Utf8ChunkDecoder::new(),
            },
            fragments: 0,
        }
    }

    pub fn phase(&self) -> StreamPhase {
        match self.state {
            State::Idle(_) => StreamPhase::Idle,
            State::Requesting(_) => StreamPhase::Requesting,
            State::Streaming { .. } => StreamPhase::Streaming,
            State::Closed => StreamPhase::Closed,
            State::Errored => StreamPhase::Errored,
        }
    }

    /// Number of fragments yielded so far.
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Stop reading and release the byte source. Idempotent.
    pub fn close(&mut self) {
        if !self.phase().is_terminal() {
            debug!(fragments = self.fragments, "closing assistant stream");
            self.state = State::Closed;
        }
    }

    fn fail(&mut self, error: Error) -> Poll<Option<Result<String>>> {
        warn!(error = %error, fragments = self.fragments, "assistant stream failed");
        self.state = State::Errored;
        Poll::Ready(Some(Err(error)))
    }
}

async fn open(request: RequestBuilder) -> Result<Response> {
    let response = ensure_success(request.send().await?).await?;
    let status = response.status();
    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
        return Err(Error::NoResponseBody {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

impl Stream for AssistantStream {
    type Item = Result<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match std::mem::replace(&mut this.state, State::Closed) {
                State::Idle(request) => {
                    debug!("opening assistant stream");
                    this.state = State::Requesting(open(request).boxed());
                }
                State::Requesting(mut pending) => match pending.poll_unpin(cx) {
                    Poll::Pending => {
                        this.state = State::Requesting(pending);
                        return Poll::Pending;
                    }
                    Poll::Ready(Ok(response)) => {
                        debug!(status = response.status().as_u16(), "assistant stream open");
                        this.state = State::Streaming {
                            source: response.bytes_stream().map(|chunk| chunk.map_err(Error::from)).boxed(),
                            decoder: Utf8ChunkDecoder::new(),
                        };
                    }
                    Poll::Ready(Err(e)) => return this.fail(e),
                },
                State::Streaming { mut source, mut decoder } => match source.poll_next_unpin(cx) {
                    Poll::Pending => {
                        this.state = State::Streaming { source, decoder };
                        return Poll::Pending;
                    }
                    Poll::Ready(Some(Ok(chunk))) => {
                        let fragment = decoder.decode(&chunk);
                        this.fragments += 1;
                        this.state = State::Streaming { source, decoder };
                        return Poll::Ready(Some(Ok(fragment)));
                    }
                    Poll::Ready(Some(Err(e))) => return this.fail(e),
                    Poll::Ready(None) => {
                        drop(source);
                        debug!(fragments = this.fragments, "assistant stream finished");
                        if decoder.has_pending() {
                            this.fragments += 1;
                            return Poll::Ready(Some(Ok(decoder.finish())));
                        }
                        return Poll::Ready(None);
                    }
                },
                terminal @ (State::Closed | State::Errored) => {
                    this.state = terminal;
                    return Poll::Ready(None);
                }
            }
        }
    }
}

impl FusedStream for AssistantStream {
    fn is_terminated(&self) -> bool {
        self.phase().is_terminal()
    }
}

impl Drop for AssistantStream {
    fn drop(&mut self) {
        if !self.phase().is_terminal() {
            debug!(phase = ?self.phase(), fragments = self.fragments, "assistant stream dropped early");
        }
    }
}

impl fmt::Debug for AssistantStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantStream")
            .field("phase", &self.phase())
            .field("fragments", &self.fragments)
            .finish()
    }
}
