use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("codec error: {source}")]
    CodecError {
        #[from]
        source: ParseError,
    },

    #[error("response error: {source}")]
    ResponseError {
        #[from]
        source: SendError,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid json: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    #[error("expected a json object at the top level, got {kind}")]
    UnexpectedRoot { kind: &'static str },
}

impl ParseError {
    pub fn unexpected_root(kind: &'static str) -> Self {
        Self::UnexpectedRoot { kind }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("unencodable body: {reason}")]
    UnencodableBody { reason: String },

    #[error("json serialization error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn unencodable_body<S: ToString>(str: S) -> Self {
        Self::UnencodableBody { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
