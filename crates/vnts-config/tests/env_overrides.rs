use figment::{
    Figment, Jail,
    providers::{Env, Serialized},
};
use vnts_config::VntsConfig;

#[test]
fn env_vars_map_through_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("VNTS_API__BASE_URL", "https://jail.vnts.example/api");
        jail.set_env("VNTS_API__TIMEOUT_SECS", "45");
        jail.set_env("VNTS_GENERAL__DEFAULT_ORG", "jail-org");
        jail.set_env("VNTS_GENERAL__DEFAULT_LIMIT", "42");

        let config: VntsConfig = Figment::from(Serialized::defaults(VntsConfig::default()))
            .merge(Env::prefixed("VNTS_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://jail.vnts.example/api");
        assert_eq!(config.api.timeout_secs, 45);
        assert_eq!(config.general.default_org, "jail-org");
        assert_eq!(config.general.default_limit, 42);
        Ok(())
    });
}

#[test]
fn partial_env_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("VNTS_GENERAL__DEFAULT_ORG", "acme");

        let config: VntsConfig = Figment::from(Serialized::defaults(VntsConfig::default()))
            .merge(Env::prefixed("VNTS_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_org, "acme");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        Ok(())
    });
}
