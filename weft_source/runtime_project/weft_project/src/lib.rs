use std::{
    fmt::{Display, Formatter},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use toml::Value;

pub const PROJECT_FILE: &str = "project.toml";

/// What the binding engine does once it has met an attribute with no mapping row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMappingPolicy {
    /// Stop every further write for the engine's lifetime until the table is completed.
    #[default]
    SuspendAll,
    /// Only the current `apply_attributes` call stops writing.
    PerCall,
}

impl FromStr for MissingMappingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "suspend_all" => Ok(Self::SuspendAll),
            "per_call" => Ok(Self::PerCall),
            other => Err(format!(
                "unknown policy `{other}`, expected `suspend_all` or `per_call`"
            )),
        }
    }
}

impl Display for MissingMappingPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuspendAll => f.write_str("suspend_all"),
            Self::PerCall => f.write_str("per_call"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    /// Markup document loaded at start, relative to the project root.
    pub main_markup: String,
    pub assets_root: String,
    /// Sprite directory inside `assets_root`.
    pub sprites_dir: String,
    /// Binding mapping table (CSV), relative to the project root.
    pub mapping_table: String,
    pub missing_mapping: MissingMappingPolicy,
}

impl ProjectConfig {
    pub fn default_for_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            main_markup: "Main.xml".to_string(),
            assets_root: "assets".to_string(),
            sprites_dir: "Sprites".to_string(),
            mapping_table: "ConfigFile.csv".to_string(),
            missing_mapping: MissingMappingPolicy::default(),
        }
    }

    pub fn resolve(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            main_markup: root.join(&self.main_markup),
            assets_root: root.join(&self.assets_root),
            mapping_table: root.join(&self.mapping_table),
        }
    }
}

/// Config paths joined onto a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub main_markup: PathBuf,
    pub assets_root: PathBuf,
    pub mapping_table: PathBuf,
}

#[derive(Debug)]
pub enum ProjectError {
    Io(std::io::Error),
    ParseToml(toml::de::Error),
    MissingField(&'static str),
    InvalidField(&'static str, String),
}

impl Display for ProjectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::ParseToml(err) => write!(f, "{err}"),
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::InvalidField(field, reason) => write!(f, "invalid field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ProjectError {}

impl From<std::io::Error> for ProjectError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ProjectError {
    fn from(value: toml::de::Error) -> Self {
        Self::ParseToml(value)
    }
}

/// Writes a default `project.toml` if missing, creates the asset folders and
/// returns the parsed config.
pub fn bootstrap_project(
    project_root: &Path,
    default_name: &str,
) -> Result<ProjectConfig, ProjectError> {
    fs::create_dir_all(project_root)?;
    ensure_project_toml(project_root, default_name)?;
    let config = load_project_toml(project_root)?;
    fs::create_dir_all(
        project_root
            .join(&config.assets_root)
            .join(&config.sprites_dir),
    )?;
    Ok(config)
}

pub fn ensure_project_toml(root: &Path, default_name: &str) -> std::io::Result<()> {
    let project_toml = root.join(PROJECT_FILE);
    if project_toml.exists() {
        return Ok(());
    }
    fs::write(project_toml, default_project_toml(default_name))
}

pub fn default_project_toml(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
main_markup = "Main.xml"

[paths]
assets_root = "assets"
sprites_dir = "Sprites"
mapping_table = "ConfigFile.csv"

[binding]
missing_mapping = "suspend_all"
"#
    )
}

pub fn load_project_toml(root: &Path) -> Result<ProjectConfig, ProjectError> {
    let project_toml = fs::read_to_string(root.join(PROJECT_FILE))?;
    parse_project_toml(&project_toml)
}

fn optional_str<'a>(
    table: Option<&'a toml::Table>,
    key: &str,
    field: &'static str,
) -> Result<Option<&'a str>, ProjectError> {
    match table.and_then(|t| t.get(key)) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ProjectError::InvalidField(field, "must be a string".to_string())),
    }
}

fn validate_relative(field: &'static str, path: &str) -> Result<(), ProjectError> {
    if path.trim().is_empty() {
        return Err(ProjectError::InvalidField(field, "must not be empty".to_string()));
    }
    if Path::new(path).is_absolute() {
        return Err(ProjectError::InvalidField(
            field,
            "must be relative to the project root".to_string(),
        ));
    }
    Ok(())
}

/// Only `[project].name` and `[project].main_markup` are required; the
/// `[paths]` and `[binding]` tables fall back to defaults.
pub fn parse_project_toml(contents: &str) -> Result<ProjectConfig, ProjectError> {
    let value: Value = contents.parse::<Value>()?;
    let project_table = value
        .get("project")
        .and_then(Value::as_table)
        .ok_or(ProjectError::MissingField("project"))?;
    let paths_table = value.get("paths").and_then(Value::as_table);
    let binding_table = value.get("binding").and_then(Value::as_table);

    let name = project_table
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ProjectError::MissingField("project.name"))?
        .to_string();

    let main_markup = project_table
        .get("main_markup")
        .and_then(Value::as_str)
        .ok_or(ProjectError::MissingField("project.main_markup"))?
        .to_string();
    validate_relative("project.main_markup", &main_markup)?;

    let mut config = ProjectConfig {
        main_markup,
        ..ProjectConfig::default_for_name(name)
    };

    if let Some(v) = optional_str(paths_table, "assets_root", "paths.assets_root")? {
        validate_relative("paths.assets_root", v)?;
        config.assets_root = v.to_string();
    }
    if let Some(v) = optional_str(paths_table, "sprites_dir", "paths.sprites_dir")? {
        validate_relative("paths.sprites_dir", v)?;
        config.sprites_dir = v.to_string();
    }
    if let Some(v) = optional_str(paths_table, "mapping_table", "paths.mapping_table")? {
        validate_relative("paths.mapping_table", v)?;
        config.mapping_table = v.to_string();
    }
    if let Some(v) = optional_str(binding_table, "missing_mapping", "binding.missing_mapping")? {
        config.missing_mapping = v
            .parse()
            .map_err(|reason| ProjectError::InvalidField("binding.missing_mapping", reason))?;
    }

    Ok(config)
}
