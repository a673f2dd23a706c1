use std::env;
use std::path::{Path, PathBuf};

use weft_binding::{BindingEngine, MappingTable, ValueConverter};
use weft_io::{AssetPaths, DataFormat};
use weft_nodes::BehaviorRegistry;
use weft_project::{PROJECT_FILE, ProjectConfig, bootstrap_project, load_project_toml};
use weft_runtime_context::AppContext;
use weft_scene::{parse_document, serialize_tree};

const DEFAULT_PROJECT_NAME: &str = "Weft Project";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let Some(command) = args.get(1).map(String::as_str) else {
        print_usage();
        std::process::exit(2);
    };

    let result = match command {
        "init" => init_command(&args, &cwd),
        "load" => load_command(&args, &cwd),
        "mappings" => mappings_command(&args),
        "sort" => sort_command(&args),
        _ => {
            print_usage();
            Err(format!("unknown command `{command}`"))
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  weft_cli init [--path <project_dir>] [--name <project_name>]");
    eprintln!("  weft_cli load [<markup>] [--project <dir>] [--mapping <csv>] [--out <file>]");
    eprintln!("  weft_cli mappings <csv>                 # list mapping rows");
    eprintln!("  weft_cli sort <csv>                     # sort and rewrite a mapping table");
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1).cloned()
}

/// First argument after the command that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut iter = args.iter().skip(2);
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
            continue;
        }
        return Some(arg.as_str());
    }
    None
}

fn init_command(args: &[String], cwd: &Path) -> Result<(), String> {
    let project_dir = parse_flag_value(args, "--path")
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.to_path_buf());
    let name = parse_flag_value(args, "--name").unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

    let config = bootstrap_project(&project_dir, &name)
        .map_err(|err| format!("failed to set up project at {}: {err}", project_dir.display()))?;
    println!(
        "project `{}` ready at {} (mapping table: {})",
        config.name,
        project_dir.display(),
        config.mapping_table
    );
    Ok(())
}

fn project_config(root: &Path) -> Result<ProjectConfig, String> {
    if !root.join(PROJECT_FILE).exists() {
        log::info!("no {PROJECT_FILE} in {}, using defaults", root.display());
        return Ok(ProjectConfig::default_for_name(DEFAULT_PROJECT_NAME));
    }
    load_project_toml(root).map_err(|err| format!("failed to read {PROJECT_FILE}: {err}"))
}

fn load_command(args: &[String], cwd: &Path) -> Result<(), String> {
    let project_root = parse_flag_value(args, "--project")
        .map(|dir| cwd.join(dir))
        .unwrap_or_else(|| cwd.to_path_buf());
    let config = project_config(&project_root)?;
    let paths = config.resolve(&project_root);

    let mut engine = match parse_flag_value(args, "--mapping") {
        Some(mapping) => {
            let mut assets = AssetPaths::new(paths.assets_root.clone());
            assets.sprites_dir = config.sprites_dir.clone();
            BindingEngine::load(
                PathBuf::from(mapping),
                BehaviorRegistry::with_builtins(),
                ValueConverter::new(assets),
                config.missing_mapping,
            )
        }
        None => BindingEngine::for_project(&config, &project_root),
    };

    let markup_path = positional(args)
        .map(|p| cwd.join(p))
        .unwrap_or_else(|| paths.main_markup.clone());

    let ctx = AppContext::new(&project_root);
    let bytes = ctx
        .with_resources(|r| r.load(&markup_path.to_string_lossy()))
        .ok_or_else(|| format!("cannot read {}", markup_path.display()))?;
    let markup = std::str::from_utf8(&bytes)
        .map_err(|err| format!("{} is not UTF-8: {err}", markup_path.display()))?;

    let mut tree = parse_document(markup)
        .map_err(|err| format!("failed to load {}: {err}", markup_path.display()))?;
    let report = tree.bind_all(&mut engine);
    log::info!(
        "{} nodes, {} attributes written, {} suppressed, {} errors",
        tree.len(),
        report.written,
        report.suppressed,
        report.errors.len()
    );
    if !report.placeholders.is_empty() {
        log::warn!(
            "new unmapped attributes: {}",
            report.placeholders.join(", ")
        );
    }
    if !engine.shutdown() {
        return Err("failed to persist the mapping table".to_string());
    }

    let out = serialize_tree(&tree);
    match parse_flag_value(args, "--out") {
        Some(path) => {
            if !weft_io::save(&out, Path::new(&path), DataFormat::Text) {
                return Err(format!("failed to write {path}"));
            }
            println!("wrote {path}");
        }
        None => print!("{out}"),
    }
    Ok(())
}

fn mappings_command(args: &[String]) -> Result<(), String> {
    let path = positional(args).ok_or("usage: weft_cli mappings <csv>")?;
    if !Path::new(path).exists() {
        return Err(format!("{path} does not exist"));
    }
    let table = MappingTable::try_load(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    for entry in table.entries() {
        if entry.is_placeholder() {
            println!("{:<24} (unmapped)", entry.key);
        } else {
            println!(
                "{:<24} {}.{} : {}{}",
                entry.key,
                entry.component_type,
                entry.property_path,
                entry.value_type,
                if entry.allow_add_component { "" } else { " [no add]" }
            );
        }
    }
    println!(
        "{} rows, {} unmapped",
        table.len(),
        table.placeholders().count()
    );
    Ok(())
}

fn sort_command(args: &[String]) -> Result<(), String> {
    let path = positional(args).ok_or("usage: weft_cli sort <csv>")?;
    if !Path::new(path).exists() {
        return Err(format!("{path} does not exist"));
    }
    let mut table =
        MappingTable::try_load(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    if !table.save(path) {
        return Err(format!("failed to write {path}"));
    }
    println!("sorted {} rows in {path}", table.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli_args(command: &str, path: &Path) -> Vec<String> {
        vec![
            "weft_cli".to_string(),
            command.to_string(),
            path.to_string_lossy().into_owned(),
        ]
    }

    const HEADER: &[u8] = b"key,componentType,propertyPath,valueType,allowAddComponent\n";

    #[test]
    fn sort_refuses_to_rewrite_an_unreadable_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ConfigFile.csv");
        let mut bytes = HEADER.to_vec();
        bytes.extend_from_slice(b"bad,Te\xffxt,text,string,true\n");
        fs::write(&path, &bytes).unwrap();

        let args = cli_args("sort", &path);
        assert!(sort_command(&args).is_err());
        assert!(mappings_command(&cli_args("mappings", &path)).is_err());
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn sort_orders_rows_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ConfigFile.csv");
        let mut bytes = HEADER.to_vec();
        bytes.extend_from_slice(b"text,Text,text,string,true\ncolor,Image,tint,color,true\n");
        fs::write(&path, bytes).unwrap();

        let args = cli_args("sort", &path);
        sort_command(&args).unwrap();
        let table = MappingTable::try_load(&path).unwrap();
        let keys: Vec<&str> = table.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["color", "text"]);
    }
}
