use std::thread;

use crate::error::PullError;

/// Environment variable read by [`PullOptions::from_env`].
pub const STACK_SIZE_ENV: &str = "LOCKSTEP_STACK_SIZE";

const DEFAULT_THREAD_NAME: &str = "lockstep-pull";

/// How producer threads are spawned.
///
/// Deeply recursive producers (tree walks, nested zips) may need a larger
/// stack than the platform default.
///
/// ```rust
/// use lockstep::prelude::*;
///
/// let options = PullOptions::new().name("tree-walk").stack_size(4 << 20);
/// let first = pull_with(&options, vec![1, 2, 3], |items| items.fetch());
/// assert_eq!(first, Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullOptions {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl PullOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the stack size taken from `LOCKSTEP_STACK_SIZE` when set.
    pub fn from_env() -> Result<Self, PullError> {
        match std::env::var(STACK_SIZE_ENV) {
            Ok(raw) => Self::new().parse_stack_size(&raw),
            Err(_) => Ok(Self::new()),
        }
    }

    fn parse_stack_size(self, raw: &str) -> Result<Self, PullError> {
        raw.trim()
            .parse::<usize>()
            .map(|bytes| self.stack_size(bytes))
            .map_err(|_| PullError::InvalidStackSize {
                var: STACK_SIZE_ENV,
                value: raw.to_string(),
            })
    }

    /// Name given to producer threads.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Stack size of producer threads, in bytes.
    pub fn stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub(crate) fn thread_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_THREAD_NAME)
    }

    pub(crate) fn builder(&self) -> thread::Builder {
        let builder = thread::Builder::new().name(self.thread_name().to_string());
        match self.stack_size {
            Some(bytes) => builder.stack_size(bytes),
            None => builder,
        }
    }
}
