//! Wire identifiers for parameters and their values.
//!
//! The generator only understands plain strings, so every parameter gets an
//! index identifier (`"0"`, `"1"`, …) and every leaf value a
//! `<parameter>.<value>` identifier (`"0.0"`, `"0.1"`, …). Indices are
//! monotonic within one build pass and the value counter restarts with each
//! parameter, so an identifier can never be issued twice.

/// Allocates parameter and value identifiers for one model-build pass.
#[derive(Debug, Default)]
pub struct IdAllocator {
    parameter: Option<u32>,
    value: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next parameter identifier and restarts the value counter.
    pub fn next_parameter(&mut self) -> String {
        let next = match self.parameter {
            None => 0,
            Some(current) => current + 1,
        };
        self.parameter = Some(next);
        self.value = 0;
        next.to_string()
    }

    /// Returns the next value identifier under the current parameter.
    ///
    /// Must be preceded by at least one `next_parameter` call; the pipeline
    /// guarantees this ordering.
    pub fn next_value(&mut self) -> String {
        debug_assert!(
            self.parameter.is_some(),
            "next_value called before next_parameter"
        );
        let parameter = self.parameter.unwrap_or(0);
        let id = format!("{parameter}.{}", self.value);
        self.value += 1;
        id
    }
}
