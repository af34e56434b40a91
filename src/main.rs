use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use gmlview::commands::{config, create, edit, export, logs, scan, show};
use gmlview::util::expand_tilde;

#[derive(Parser, Debug)]
#[command(
    name = "gmlview",
    version,
    about = "Viewer and exporter for GameMaker Studio 2 project folders"
)]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a project folder and print its asset tree
    Scan { project: PathBuf },
    /// Summarize one asset: room or object metadata, sprite frame, or folder
    Show {
        project: PathBuf,
        /// Asset as <category>/<name>, e.g. rooms/rm_level1
        asset: String,
    },
    /// Print a GML code file
    Cat { file: PathBuf },
    /// Create a stub GML file inside an asset folder
    New {
        project: PathBuf,
        /// Asset as <category>/<name>, e.g. objects/obj_player
        asset: String,
        /// Filename for the new event/script body
        name: String,
    },
    /// Open a file in your code editor
    Edit {
        path: String,
        #[arg(long, help = "Editor command (defaults to $EDITOR, then code)")]
        editor: Option<String>,
    },
    /// Export all GML plus associated YY data to a single text file
    Export {
        project: PathBuf,
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// List recently opened projects
    Recent,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { project } => {
            let root = resolve(&project);
            let scan = scan::scan_project(&root)?;
            if !scan.has_yyp {
                eprintln!(
                    "warning: no .yyp file in {}, is this a GMS2 project?",
                    root.display()
                );
            }
            if let Some(mut logger) = logs::SessionLogger::new(&root) {
                logger.log("scan", &format!("found {} GML files", scan.gml_files.len()));
            }
            let _ = config::remember_project(&root);

            if cli.json {
                print_json(&scan)?;
            } else {
                println!("{}", scan::render_tree(&scan));
            }
        }
        Commands::Show { project, asset } => {
            let root = resolve(&project);
            let report = show::show_asset(&root, &asset)?;
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{report}");
            }
        }
        Commands::Cat { file } => {
            let path = resolve(&file);
            let content = std::fs::read_to_string(&path)?;
            if cli.json {
                print_json(&content)?;
            } else {
                print!("{content}");
            }
        }
        Commands::New {
            project,
            asset,
            name,
        } => {
            let root = resolve(&project);
            let folder = asset_folder(&root, &asset)?;
            let path = create::create_gml(&folder, &name)?;
            if let Some(mut logger) = logs::SessionLogger::new(&root) {
                logger.log("new", &format!("created {}", path.display()));
            }
            if cli.json {
                print_json(&path)?;
            } else {
                println!("created {}", path.display());
            }
        }
        Commands::Edit { path, editor } => {
            edit::open_in_editor(editor.as_deref(), &path)?;
            if cli.json {
                print_json(&"opened")?;
            } else {
                println!("opened {path}");
            }
        }
        Commands::Export { project, out } => {
            let root = resolve(&project);
            let scan = scan::scan_project(&root)?;
            let out_path = out.unwrap_or_else(|| export::default_out_path(&root));
            let summary = export::export_project(&scan, &out_path)?;
            if let Some(mut logger) = logs::SessionLogger::new(&root) {
                logger.log(
                    "export",
                    &format!(
                        "{} GML files, {} YY files -> {}",
                        summary.gml_count,
                        summary.yy_count,
                        summary.out_path.display()
                    ),
                );
            }
            if cli.json {
                print_json(&summary)?;
            } else {
                println!(
                    "exported {} GML files and {} YY files to {}",
                    summary.gml_count,
                    summary.yy_count,
                    summary.out_path.display()
                );
            }
        }
        Commands::Recent => {
            let config = config::load_config().unwrap_or_default();
            if cli.json {
                print_json(&config.projects)?;
            } else {
                for p in &config.projects {
                    let marker = if Some(&p.path) == config.last_active_project.as_ref() {
                        "*"
                    } else {
                        " "
                    };
                    println!("{marker} {}\t{}\t{}", p.name, p.path, p.last_opened);
                }
            }
        }
    }

    Ok(())
}

/// Resolves the asset folder for `<category>/<name>` within a project.
fn asset_folder(root: &Path, target: &str) -> anyhow::Result<PathBuf> {
    let (folder, name) = target
        .split_once('/')
        .ok_or_else(|| anyhow::anyhow!("expected <category>/<asset>, got '{target}'"))?;
    let scan = scan::scan_project(root)?;
    let asset = scan
        .find_asset(folder, name)
        .ok_or_else(|| anyhow::anyhow!("no asset '{name}' under '{folder}' in {}", root.display()))?;
    Ok(asset.path.clone())
}

fn resolve(path: &Path) -> PathBuf {
    PathBuf::from(expand_tilde(&path.to_string_lossy()))
}

fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
