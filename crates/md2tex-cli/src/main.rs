use anyhow::{Context, Result, bail};
use md2tex_config::Config;
use md2tex_engine::{
    convert_cheatsheets, convert_directory, convert_file, output_path, write_index,
};
use relative_path::RelativePath;
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Convert one file into the output directory under a new name
    ConvertFile { input: PathBuf, output: String },
    /// Convert every markdown file in the working directory
    ConvertAll,
    Index { root: PathBuf },
    /// Convert every `*CheatSheet.md` in `dir` next to itself
    CheatSheets { dir: PathBuf },
    InitConfig,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    match rest.as_slice() {
        [] => Ok(Command::ConvertAll),
        ["index"] => Ok(Command::Index {
            root: PathBuf::from("."),
        }),
        ["index", root] => Ok(Command::Index {
            root: PathBuf::from(root),
        }),
        ["cheatsheet"] => Ok(Command::CheatSheets {
            dir: PathBuf::from("."),
        }),
        ["cheatsheet", dir] => Ok(Command::CheatSheets {
            dir: PathBuf::from(dir),
        }),
        ["init-config"] => Ok(Command::InitConfig),
        [input, output] => Ok(Command::ConvertFile {
            input: PathBuf::from(input),
            output: output.to_string(),
        }),
        _ => bail!("{}", usage(args.first().map_or("md2tex", String::as_str))),
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [<input.md> <output.md>]\n       {program} index [vault-root]\n       {program} cheatsheet [dir]\n       {program} init-config"
    )
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::ConvertFile { input, output } => {
            let target = output_path(&config.output_dir, RelativePath::new(&output));
            convert_file(&input, &target, &config.convert)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
        }
        Command::ConvertAll => {
            convert_all(Path::new("."), config)?;
        }
        Command::Index { root } => {
            write_index(&root, &config.index)
                .with_context(|| format!("Failed to index {}", root.display()))?;
        }
        Command::CheatSheets { dir } => {
            let written = convert_cheatsheets(&dir, &config.convert)
                .with_context(|| format!("Failed to convert cheat sheets in {}", dir.display()))?;
            if written.is_empty() {
                log::warn!("No cheat sheets found in {}", dir.display());
            }
        }
        Command::InitConfig => {
            let path = Config::config_path();
            init_config(&path)?;
        }
    }
    Ok(())
}

fn convert_all(dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let written = convert_directory(dir, &config.output_dir, &config.convert)
        .with_context(|| format!("Failed to convert markdown files in {}", dir.display()))?;
    if written.is_empty() {
        log::warn!("No markdown files found in {}", dir.display());
    }
    Ok(written)
}

/// Writes the default config unless one already exists. Returns whether a
/// file was written.
fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        log::info!("Config already exists at {}", path.display());
        return Ok(false);
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(true)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let result = parse_args(&args).and_then(|command| {
        let config = match Config::load().context("Failed to load config file")? {
            Some(config) => config,
            None => {
                log::debug!(
                    "No config file found, using defaults (see {})",
                    Config::config_path().display()
                );
                Config::default()
            }
        };
        run(command, &config)
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
