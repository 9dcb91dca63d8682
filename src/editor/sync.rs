//! Suppression of the echo edits.
//!
//! Writing both values programmatically re-renders both fields.
//! The re-rendered texts come back as field changes, and in the UTM notation
//! a field change runs the inverse projection and writes both values again.
//! To break the loop, the writer arms a one-shot [`SuppressionToken`] right
//! before the write and hands it to the render pass, which releases it when done.
//! While the token is outstanding, field changes are not treated as user edits.

use log::{debug, warn};

/// Permit to render without reacting to the rendered texts.
///
/// Can only be obtained from [`SyncCoordinator::arm`]
/// and is consumed by [`SyncCoordinator::release`].
#[derive(Debug)]
#[must_use = "the token has to be released by the render pass"]
#[allow(missing_copy_implementations)]
pub struct SuppressionToken {
    _private: (),
}

/// Tracks the (single) outstanding suppression token
#[derive(Debug, Default)]
#[allow(missing_copy_implementations)]
pub struct SyncCoordinator {
    outstanding: bool,
}

impl SyncCoordinator {
    /// New coordinator without an outstanding token
    pub const fn new() -> Self {
        Self { outstanding: false }
    }

    /// Arm the suppression before a programmatic write.
    ///
    /// At most one token is outstanding:
    /// arming again does not stack, the first release clears the suppression.
    pub fn arm(&mut self) -> SuppressionToken {
        if self.outstanding {
            warn!("Suppression token armed while another one is outstanding");
        } else {
            debug!("Suppression token armed");
        }
        self.outstanding = true;
        SuppressionToken { _private: () }
    }

    /// Consume the token at the end of the render pass
    pub fn release(&mut self, token: SuppressionToken) {
        let SuppressionToken { _private: () } = token;
        debug!("Suppression token released");
        self.outstanding = false;
    }

    /// Should the field changes be ignored now?
    pub const fn is_suppressing(&self) -> bool {
        self.outstanding
    }
}
