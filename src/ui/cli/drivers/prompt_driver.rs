use anyhow::Result;

/// Abstraction over interactive prompting, so the wizard flow can be
/// exercised with a scripted driver in tests.
pub trait PromptDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_u64(&self, title: &str, help: &str, default: u64, min: Option<u64>) -> Result<u64>;
    fn ask_f64(&self, title: &str, help: &str, default: f64, min: Option<f64>) -> Result<f64>;
}
