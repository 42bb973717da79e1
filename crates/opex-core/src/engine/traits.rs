//! Engine launcher trait definition.

use super::errors::EngineError;
use crate::options::OptionDescriptor;
use crate::settings::EngineSettings;

/// Starts configured engines and reports the options they support.
///
/// Implemented by [`super::uci::UciLauncher`] for real engine binaries; tests
/// substitute in-memory catalogs.
pub trait EngineLauncher {
    /// Start the engine, read its option descriptors in report order, and stop it.
    fn list_options(&self, engine: &EngineSettings) -> Result<Vec<OptionDescriptor>, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockLauncher;

    impl EngineLauncher for MockLauncher {
        fn list_options(
            &self,
            engine: &EngineSettings,
        ) -> Result<Vec<OptionDescriptor>, EngineError> {
            Ok(vec![OptionDescriptor::string("Engine Path", Some(&engine.path))])
        }
    }

    #[test]
    fn test_mock_launcher() {
        let engine = EngineSettings {
            nickname: "mock".to_string(),
            path: "/bin/mock".to_string(),
        };
        let options = MockLauncher.list_options(&engine).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].default.to_string(), "/bin/mock");
    }
}
