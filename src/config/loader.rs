use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::env::{Env, parse_bool};
use super::schema::{ConfigFile, LabelSettings, OutputFormat, OutputSettings, PagingSettings, Settings};
use crate::paging::{DEFAULT_PAGE_PARAM, DEFAULT_PER_PAGE, PresentationConfig};

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub profile: Option<String>,
    pub per_page: Option<i64>,
    pub window_size: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub cli: CliOverrides,
    pub cwd: PathBuf,
    pub home_dir: Option<PathBuf>,
    pub xdg_config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config_path: Option<PathBuf>,
    pub profile_name: String,
    pub paging: PagingResolved,
    pub presentation: PresentationConfig,
    pub settings: SettingsResolved,
}

/// Values feeding the calculator; validation happens when they are used.
#[derive(Debug, Clone)]
pub struct PagingResolved {
    pub per_page: i64,
    pub page_param: String,
}

impl Default for PagingResolved {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsResolved {
    pub output: OutputSettingsResolved,
}

#[derive(Debug, Clone)]
pub struct OutputSettingsResolved {
    pub default_format: OutputFormat,
    pub json: JsonSettingsResolved,
}

#[derive(Debug, Clone)]
pub struct JsonSettingsResolved {
    pub pretty: bool,
}

impl Default for SettingsResolved {
    fn default() -> Self {
        Self {
            output: OutputSettingsResolved {
                default_format: OutputFormat::Pretty,
                json: JsonSettingsResolved { pretty: true },
            },
        }
    }
}

pub fn load_config(options: &LoadOptions, env: &Env) -> Result<ResolvedConfig> {
    let config_path = resolve_config_path(options, env)?;
    let config_file = match &config_path {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };

    let profile_name = resolve_profile_name(options, env, config_file.default_profile.as_deref());

    let mut paging = PagingResolved::default();
    let mut presentation = PresentationConfig::default();
    let mut settings = SettingsResolved::default();

    if let Some(settings_cfg) = &config_file.settings {
        apply_settings(&mut paging, &mut presentation, &mut settings, settings_cfg);
    }

    match config_file.profiles.get(&profile_name) {
        Some(profile) => apply_settings(&mut paging, &mut presentation, &mut settings, profile),
        None if options.cli.profile.is_some() => {
            return Err(anyhow!("Profile not found: {}", profile_name));
        }
        None => {}
    }

    apply_env_overrides(&mut paging, &mut presentation, &mut settings, env);
    apply_cli_overrides(&mut paging, &mut presentation, &options.cli);

    tracing::debug!(
        profile = %profile_name,
        per_page = paging.per_page,
        window_size = presentation.window_size,
        "resolved paging config"
    );

    Ok(ResolvedConfig {
        config_path,
        profile_name,
        paging,
        presentation,
        settings,
    })
}

fn resolve_profile_name(options: &LoadOptions, env: &Env, default_profile: Option<&str>) -> String {
    if let Some(profile) = options.cli.profile.as_deref() {
        return profile.to_string();
    }
    if let Some(profile) = env.get("PAGENAV_PROFILE") {
        return profile;
    }
    if let Some(profile) = default_profile {
        return profile.to_string();
    }
    "default".to_string()
}

fn resolve_config_path(options: &LoadOptions, env: &Env) -> Result<Option<PathBuf>> {
    if let Some(path) = &options.cli.config_path {
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
        return Ok(Some(path.clone()));
    }

    if let Some(path) = env.get("PAGENAV_CONFIG") {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
        return Ok(Some(path));
    }

    if let Some(path) = find_local_config(&options.cwd, options.home_dir.as_deref()) {
        return Ok(Some(path));
    }

    if let Some(path) = find_global_config(options.xdg_config_dir.as_deref()) {
        return Ok(Some(path));
    }

    Ok(None)
}

fn find_local_config(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let candidates = [
        ".pagenav/config.yaml",
        ".pagenav/config.yml",
        ".pagenav/config.json",
    ];

    for dir in start.ancestors() {
        for candidate in &candidates {
            let path = dir.join(candidate);
            if path.is_file() {
                return Some(path);
            }
        }

        if let Some(home_dir) = home {
            if dir == home_dir {
                break;
            }
        }
    }

    None
}

fn find_global_config(xdg_config: Option<&Path>) -> Option<PathBuf> {
    let base = xdg_config?;
    let candidates = [
        "pagenav/config.yaml",
        "pagenav/config.yml",
        "pagenav/config.json",
    ];

    candidates
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.is_file())
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")
        }
        Some("json") => serde_json::from_str(&content).context("Failed to parse JSON config"),
        _ => Err(anyhow!("Unsupported config file extension")),
    }
}

fn apply_settings(
    paging: &mut PagingResolved,
    presentation: &mut PresentationConfig,
    settings: &mut SettingsResolved,
    overrides: &Settings,
) {
    if let Some(paging_cfg) = &overrides.paging {
        apply_paging_settings(paging, presentation, paging_cfg);
    }
    if let Some(labels) = &overrides.labels {
        apply_label_settings(presentation, labels);
    }
    if let Some(output) = &overrides.output {
        apply_output_settings(&mut settings.output, output);
    }
}

fn apply_paging_settings(
    paging: &mut PagingResolved,
    presentation: &mut PresentationConfig,
    overrides: &PagingSettings,
) {
    if let Some(per_page) = overrides.per_page {
        paging.per_page = per_page;
    }
    if let Some(window_size) = overrides.window_size {
        presentation.window_size = window_size;
    }
    if let Some(page_param) = &overrides.page_param {
        paging.page_param = page_param.clone();
    }
}

fn apply_label_settings(presentation: &mut PresentationConfig, labels: &LabelSettings) {
    let text_fields = [
        (&labels.total, &mut presentation.total_label),
        (&labels.pages, &mut presentation.pages_label),
        (&labels.first, &mut presentation.first_label),
        (&labels.prev, &mut presentation.prev_label),
        (&labels.next, &mut presentation.next_label),
        (&labels.last, &mut presentation.last_label),
        (&labels.go_page_text, &mut presentation.go_page_label),
        (&labels.placeholder, &mut presentation.placeholder),
    ];
    for (value, target) in text_fields {
        if let Some(value) = value {
            *target = value.clone();
        }
    }
    if let Some(size) = labels.go_page_size {
        presentation.go_page_size = size;
    }
}

fn apply_output_settings(settings: &mut OutputSettingsResolved, overrides: &OutputSettings) {
    if let Some(default_format) = overrides.default_format {
        settings.default_format = default_format;
    }
    if let Some(json) = &overrides.json {
        if let Some(pretty) = json.pretty {
            settings.json.pretty = pretty;
        }
    }
}

fn apply_env_overrides(
    paging: &mut PagingResolved,
    presentation: &mut PresentationConfig,
    settings: &mut SettingsResolved,
    env: &Env,
) {
    if let Some(per_page) = env.get_i64("PAGENAV_PER_PAGE") {
        paging.per_page = per_page;
    }
    if let Some(window_size) = env.get_i64("PAGENAV_WINDOW_SIZE") {
        presentation.window_size = window_size;
    }
    if let Some(page_param) = env.get("PAGENAV_PAGE_PARAM") {
        paging.page_param = page_param;
    }
    if let Some(pretty) = env.get("PAGENAV_JSON_PRETTY").and_then(|v| parse_bool(&v)) {
        settings.output.json.pretty = pretty;
    }
}

fn apply_cli_overrides(
    paging: &mut PagingResolved,
    presentation: &mut PresentationConfig,
    cli: &CliOverrides,
) {
    if let Some(per_page) = cli.per_page {
        paging.per_page = per_page;
    }
    if let Some(window_size) = cli.window_size {
        presentation.window_size = window_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options_for(config_path: Option<PathBuf>, cwd: PathBuf) -> LoadOptions {
        LoadOptions {
            cli: CliOverrides {
                config_path,
                ..CliOverrides::default()
            },
            cwd,
            home_dir: None,
            xdg_config_dir: None,
        }
    }

    #[test]
    fn defaults_without_config() {
        let tmp = TempDir::new().expect("temp dir");
        let dir = tmp.path().to_path_buf();
        let resolved =
            load_config(&options_for(None, dir), &Env::from_pairs(&[])).expect("load config");
        assert_eq!(resolved.profile_name, "default");
        assert!(resolved.config_path.is_none());
        assert_eq!(resolved.paging.per_page, 5);
        assert_eq!(resolved.paging.page_param, "page");
        assert_eq!(resolved.presentation.window_size, 9);
        assert_eq!(resolved.presentation, PresentationConfig::default());
    }

    #[test]
    fn loads_settings_and_profile_from_yaml() {
        let tmp = TempDir::new().expect("temp dir");
        let dir = tmp.path().to_path_buf();
        let config_path = dir.join("config.yaml");
        fs::write(
            &config_path,
            "defaultProfile: zh\nsettings:\n  paging:\n    perPage: 20\n  labels:\n    first: Start\nprofiles:\n  zh:\n    labels:\n      total: \"共?条记录\"\n    paging:\n      windowSize: 5\n",
        )
        .expect("write config");

        let resolved = load_config(&options_for(Some(config_path), dir), &Env::from_pairs(&[]))
            .expect("load config");
        assert_eq!(resolved.profile_name, "zh");
        assert_eq!(resolved.paging.per_page, 20);
        assert_eq!(resolved.presentation.window_size, 5);
        assert_eq!(resolved.presentation.first_label, "Start");
        assert_eq!(resolved.presentation.total_label, "共?条记录");
    }

    #[test]
    fn loads_json_config() {
        let tmp = TempDir::new().expect("temp dir");
        let dir = tmp.path().to_path_buf();
        let config_path = dir.join("config.json");
        fs::write(
            &config_path,
            r#"{"settings": {"labels": {"goPageText": "Jump", "goPageSize": 4}, "output": {"json": {"pretty": false}}}}"#,
        )
        .expect("write config");

        let resolved = load_config(&options_for(Some(config_path), dir), &Env::from_pairs(&[]))
            .expect("load config");
        assert_eq!(resolved.presentation.go_page_label, "Jump");
        assert_eq!(resolved.presentation.go_page_size, 4);
        assert!(!resolved.settings.output.json.pretty);
    }

    #[test]
    fn finds_local_config_in_ancestor() {
        let tmp = TempDir::new().expect("temp dir");
        let dir = tmp.path().to_path_buf();
        let nested = dir.join("a").join("b");
        fs::create_dir_all(&nested).expect("nested");
        fs::create_dir_all(dir.join(".pagenav")).expect("config dir");
        fs::write(
            dir.join(".pagenav").join("config.yml"),
            "settings:\n  paging:\n    perPage: 7\n",
        )
        .expect("write config");

        let resolved =
            load_config(&options_for(None, nested), &Env::from_pairs(&[])).expect("load config");
        assert_eq!(resolved.paging.per_page, 7);
    }

    #[test]
    fn env_and_cli_override_file() {
        let tmp = TempDir::new().expect("temp dir");
        let dir = tmp.path().to_path_buf();
        let config_path = dir.join("config.yml");
        fs::write(
            &config_path,
            "settings:\n  paging:\n    perPage: 20\n    windowSize: 11\n",
        )
        .expect("write config");

        let env = Env::from_pairs(&[
            ("PAGENAV_PER_PAGE", "30"),
            ("PAGENAV_WINDOW_SIZE", "7"),
            ("PAGENAV_PAGE_PARAM", "p"),
        ]);
        let mut options = options_for(Some(config_path), dir);
        let resolved = load_config(&options, &env).expect("load config");
        assert_eq!(resolved.paging.per_page, 30);
        assert_eq!(resolved.presentation.window_size, 7);
        assert_eq!(resolved.paging.page_param, "p");

        options.cli.per_page = Some(3);
        let resolved = load_config(&options, &env).expect("load config");
        assert_eq!(resolved.paging.per_page, 3);
        assert_eq!(resolved.presentation.window_size, 7);
    }

    #[test]
    fn missing_explicit_profile_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let dir = tmp.path().to_path_buf();
        let mut options = options_for(None, dir);
        options.cli.profile = Some("nope".to_string());
        assert!(load_config(&options, &Env::from_pairs(&[])).is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let dir = tmp.path().to_path_buf();
        let options = options_for(Some(dir.join("absent.yaml")), dir);
        assert!(load_config(&options, &Env::from_pairs(&[])).is_err());
    }
}
