//! Configuration for the annotation model.

/// Configuration for the annotation model.
///
/// Controls import registration and mutation logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    /// Register qualified names with the owning unit's imports.
    ///
    /// When false, qualified names are still stored in simple form.
    pub register_imports: bool,

    /// Emit `debug` log events for adds, removes, and edits.
    pub log_mutations: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            register_imports: true,
            log_mutations: true,
        }
    }
}

impl ModelConfig {
    /// Creates a configuration without mutation logging.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            log_mutations: false,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable import registration.
    #[must_use]
    pub fn with_register_imports(mut self, register: bool) -> Self {
        self.register_imports = register;
        self
    }

    /// Builder method to enable/disable mutation logging.
    #[must_use]
    pub fn with_log_mutations(mut self, log: bool) -> Self {
        self.log_mutations = log;
        self
    }
}
