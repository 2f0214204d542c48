/// Configuration settings for expression pipeline analysis.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use ribosim_core::config::RibosimConfig;
///
/// let config = RibosimConfig::default();
/// ```
///
/// ## Quiet batch run on a fixed thread count
///
/// ```rust
/// use ribosim_core::config::RibosimConfig;
///
/// let config = RibosimConfig {
///     quiet: true,
///     num_threads: Some(4),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RibosimConfig {
    /// Suppress informational output during processing.
    ///
    /// When `true`, prevents progress messages and statistics from
    /// being printed to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Number of threads to use when analyzing multiple inputs.
    ///
    /// When set, configures the Rayon thread pool used by
    /// [`crate::engine::ExpressionAnalyzer::analyze_files`]. The
    /// pipeline stages themselves are strictly sequential; only whole
    /// invocations run in parallel.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,
}

impl Default for RibosimConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            num_threads: None,
        }
    }
}
