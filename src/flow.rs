/// Signal returned by a sink to the producer driving it: keep going or stop.
///
/// `Flow` is the return type of every sink handed to [`Seq::drive`](crate::Seq::drive),
/// and also what `drive` itself returns: `Break` if the sink stopped the
/// producer, `Continue` if the producer ran out of elements.
///
/// # Examples
///
/// ```rust
/// use lockstep::Flow;
///
/// let keep_going = Flow::from(true);
/// assert_eq!(keep_going, Flow::Continue);
/// assert!(Flow::Break.is_break());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Flow {
    /// Deliver the next element
    #[default]
    Continue,
    /// Stop now; the producer must not call the sink again
    Break,
}

impl Flow {
    /// Returns `true` if the flow is `Continue`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lockstep::Flow;
    ///
    /// assert!(Flow::Continue.is_continue());
    /// assert!(!Flow::Break.is_continue());
    /// ```
    #[inline]
    pub const fn is_continue(self) -> bool {
        matches!(self, Flow::Continue)
    }

    /// Returns `true` if the flow is `Break`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lockstep::Flow;
    ///
    /// assert!(Flow::Break.is_break());
    /// assert!(!Flow::Continue.is_break());
    /// ```
    #[inline]
    pub const fn is_break(self) -> bool {
        matches!(self, Flow::Break)
    }

    /// Returns `Break` if either side is `Break`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lockstep::Flow;
    ///
    /// assert_eq!(Flow::Continue.or_break(Flow::Break), Flow::Break);
    /// assert_eq!(Flow::Continue.or_break(Flow::Continue), Flow::Continue);
    /// ```
    #[inline]
    pub const fn or_break(self, other: Flow) -> Flow {
        match (self, other) {
            (Flow::Continue, Flow::Continue) => Flow::Continue,
            _ => Flow::Break,
        }
    }

    /// Converts to the standard library's [`ControlFlow`](std::ops::ControlFlow).
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use lockstep::Flow;
    ///
    /// assert_eq!(Flow::Break.into_control_flow(), ControlFlow::Break(()));
    /// ```
    #[inline]
    pub fn into_control_flow(self) -> std::ops::ControlFlow<()> {
        match self {
            Flow::Continue => std::ops::ControlFlow::Continue(()),
            Flow::Break => std::ops::ControlFlow::Break(()),
        }
    }
}

impl From<bool> for Flow {
    /// `true` keeps the producer going, `false` stops it.
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Flow::Continue
        } else {
            Flow::Break
        }
    }
}

impl From<std::ops::ControlFlow<()>> for Flow {
    fn from(flow: std::ops::ControlFlow<()>) -> Self {
        match flow {
            std::ops::ControlFlow::Continue(()) => Flow::Continue,
            std::ops::ControlFlow::Break(()) => Flow::Break,
        }
    }
}
