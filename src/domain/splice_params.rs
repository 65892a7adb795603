/// Scalar parameters forwarded to the splice service alongside the audio file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpliceParams {
    pub duration: f64,
    pub count: i32,
    pub reverse: bool,
}

impl SpliceParams {
    /// Wire encoding of `duration`: six fractional digits.
    pub fn duration_field(&self) -> String {
        format!("{:.6}", self.duration)
    }

    pub fn count_field(&self) -> String {
        self.count.to_string()
    }

    pub fn reverse_field(&self) -> &'static str {
        if self.reverse { "true" } else { "false" }
    }
}
