//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use certboard::config::{Config, Validate};
    use certboard::{DashboardError, RbacSystem, Role};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_file_config_drives_default_role() {
        let file = write_config("rbac:\n  default_role: team\n");
        let config = Config::from_file(file.path()).await.unwrap();

        let rbac = RbacSystem::new(config.rbac());
        assert_eq!(rbac.current_role(), Role::Team);
        assert_eq!(rbac.navigation()[0].destination, "/team/dashboard");
    }

    #[tokio::test]
    async fn test_file_config_role_ignores_case() {
        let file = write_config("rbac:\n  default_role: Admin\n");
        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.rbac().default_role, Role::Admin);

        let file = write_config("rbac:\n  default_role: Owner\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRole(ref r) if r == "Owner"));
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_config_error() {
        let file = write_config("rbac: [unterminated\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_validate_section_wraps_message() {
        let mut config = Config::default();
        config.logging.level = "chatty".to_string();

        let err = config.logging.validate_section("Logging").unwrap_err();
        assert!(err.to_string().contains("Logging config error"));
        assert!(config.validate().is_err());
    }
}
