//! Console mode state machine.
//!
//! The console is always in exactly one of three modes. The mode controls the
//! footer hints and whether navigation keys have anything to act on.
//!
//! ```text
//!            edit (non-empty)               query accepted
//!   Idle ──────────────────────▶ Searching ───────────────▶ ResultsShown
//!    ▲                              │  ▲                          │
//!    │        text emptied          │  └──────── edit ────────────┘
//!    ├──────────────────────────────┘                             │
//!    └────────────── text emptied / submission succeeded ─────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use huelio_console::app::ConsoleMode;
//!
//! let mode = ConsoleMode::default();
//! assert_eq!(mode, ConsoleMode::Idle);
//! ```

/// Current phase of the search interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleMode {
    /// Search text is empty and no results are displayed.
    #[default]
    Idle,

    /// A debounce timer or a query request is outstanding.
    ///
    /// Results from the previous query may still be on screen and remain
    /// navigable and submittable.
    Searching,

    /// The latest issued query has completed.
    ///
    /// On a failed query the previous results stay displayed.
    ResultsShown,
}

impl ConsoleMode {
    /// Short label for the header status indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Searching => "searching",
            Self::ResultsShown => "results",
        }
    }
}
