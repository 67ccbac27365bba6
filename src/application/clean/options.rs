//! Delete options

/// Options for a deletion run
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOptions {
    /// Report what would be deleted without asking or deleting
    pub dry_run: bool,
}

impl DeleteOptions {
    /// Create new delete options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
