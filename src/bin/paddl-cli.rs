use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paddl::core::config::{ConfigArgs, ExplorerConfig};
use paddl::core::telemetry::logging::init_logging;
use paddl::models::tree_node::TreeNode;
use paddl::services::fs::listing::{list_dir, ListParams};
use paddl::services::fs::tree::list_subdirs;
use paddl::services::fs::{FsBackend, LocalFs};
use std::path::{Path, PathBuf};

/// Headless access to the browser's listing and tree providers.
#[derive(Debug, Parser)]
#[command(name = "paddl-cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// List a directory the way the file pane shows it.
    List {
        path: PathBuf,
        /// Case-insensitive substring filter.
        #[arg(long, short, default_value = "")]
        query: String,
        #[arg(long)]
        hidden: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the directory tree below a path.
    Tree {
        path: PathBuf,
        #[arg(long, default_value_t = 2)]
        depth: usize,
        #[arg(long)]
        hidden: bool,
    },
    /// Print the effective configuration as JSON.
    Config {
        path: Option<PathBuf>,
        #[command(flatten)]
        args: ConfigArgs,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Cmd::List {
            path,
            query,
            hidden,
            json,
        } => {
            let entries = list_dir(
                &LocalFs,
                ListParams {
                    path: &path,
                    query: &query,
                    show_hidden: hidden,
                },
            )
            .with_context(|| format!("listing {}", path.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for e in &entries {
                    println!(
                        "{:<40} {:<8} {:>10} {}",
                        e.name, e.type_label, e.size, e.modified
                    );
                }
            }
        }
        Cmd::Tree {
            path,
            depth,
            hidden,
        } => {
            let root = LocalFs
                .canonicalize(&path)
                .with_context(|| format!("resolving {}", path.display()))?;
            println!("{}", TreeNode::root(root.clone()).label);
            print_tree(&LocalFs, &root, hidden, depth, 1);
        }
        Cmd::Config { path, args } => {
            let config = ExplorerConfig::from_args(path, &args);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn print_tree(fs: &dyn FsBackend, path: &Path, hidden: bool, max_depth: usize, depth: usize) {
    if depth > max_depth {
        return;
    }
    for child in list_subdirs(fs, path, hidden) {
        let node = TreeNode::child(child.clone());
        println!("{}{}", "  ".repeat(depth), node.label);
        print_tree(fs, &child, hidden, max_depth, depth + 1);
    }
}
