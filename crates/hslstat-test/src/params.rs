//! Regression test parameters and operations

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check values, report only failures (default)
    #[default]
    Compare,
    /// Check values and print every comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current check, the mode, and every recorded failure. Checks never panic;
/// the test asserts on [`RegParams::cleanup`] at the end so one run reports
/// every mismatch at once.
pub struct RegParams {
    /// Name of the test (e.g., "histogram")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`. NaN never matches.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if self.display() {
            eprintln!(
                "{}_reg[{}]: expected {}, actual {}",
                self.test_name, self.index, expected, actual
            );
        }

        if diff <= delta {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        }
    }

    /// Compare two exact counts
    pub fn compare_counts(&mut self, expected: u64, actual: impl Into<u128>) -> bool {
        self.index += 1;
        let actual: u128 = actual.into();

        if self.display() {
            eprintln!(
                "{}_reg[{}]: expected {}, actual {}",
                self.test_name, self.index, expected, actual
            );
        }

        if u128::from(expected) == actual {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: count comparison for index {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, expected, actual
            );
            self.record_failure(msg);
            false
        }
    }

    /// Compare two binary data arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 == data2 {
            true
        } else {
            let first_diff = data1
                .iter()
                .zip(data2)
                .position(|(a, b)| a != b)
                .unwrap_or(data1.len().min(data2.len()));
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}, first difference at byte {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                first_diff
            );
            self.record_failure(msg);
            false
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
