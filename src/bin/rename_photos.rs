use anyhow::Result;
use clap::Parser;
use log::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use zipukm::localization::{t_args_lang, t_lang};
use zipukm::renamer::{rename_photos_in_folders, RenameError, RenameOptions};

/// Rename photos in every subfolder to `<FolderName>_<n>.jpg`
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Folder containing one subfolder of photos per product (prompted for when omitted)
    root: Option<PathBuf>,

    /// Only report what would be renamed
    #[arg(long)]
    dry_run: bool,
}

fn prompt_for_root() -> Result<PathBuf> {
    print!("{} ", t_lang("renamer-prompt", None));
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let root = match args.root {
        Some(root) => root,
        None => prompt_for_root()?,
    };

    let options = RenameOptions {
        dry_run: args.dry_run,
    };

    match rename_photos_in_folders(&root, &options) {
        Ok(report) => {
            let renamed = report.renamed.len().to_string();
            let unchanged = report.already_named.len().to_string();
            let skipped = report.skipped().to_string();
            println!(
                "{}",
                t_args_lang(
                    "renamer-done",
                    &[
                        ("renamed", renamed.as_str()),
                        ("unchanged", unchanged.as_str()),
                        ("skipped", skipped.as_str()),
                    ],
                    None,
                )
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(RenameError::NotADirectory(path)) => {
            error!("Not a directory: {}", path.display());
            eprintln!("{}", t_lang("renamer-not-a-directory", None));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
