//! Build helpers for chat-metrics.
//!
//! Run with `cargo run -p xtask -- <command>`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "xtask", about = "chat-metrics build helpers")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand, Debug)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Only generate for this shell
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().command {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out, shell } => generate_completions(&out, shell),
    }
}

fn generate_man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = chat_metrics::command();
    let name = cmd.get_name().to_string();

    write_man_page(out, &name, clap_mangen::Man::new(cmd.clone()))?;
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let page = format!("{name}-{}", sub.get_name());
        let man = clap_mangen::Man::new(sub.clone()).title(page.clone());
        write_man_page(out, &page, man)?;
    }
    Ok(())
}

fn write_man_page(out: &Path, page: &str, man: clap_mangen::Man) -> io::Result<()> {
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    let path = out.join(format!("{page}.1"));
    fs::write(&path, buf)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn generate_completions(out: &Path, shell: Option<Shell>) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let shells = match shell {
        Some(shell) => vec![shell],
        None => vec![Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish],
    };

    let mut cmd = chat_metrics::command();
    let name = cmd.get_name().to_string();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtask_cli_is_consistent() {
        Xtask::command().debug_assert();
    }

    #[test]
    fn man_pages_written_for_subcommands() {
        let tmp = std::env::temp_dir().join(format!("chat-metrics-man-{}", std::process::id()));
        generate_man(&tmp).unwrap();
        assert!(tmp.join("chat-metrics.1").is_file());
        assert!(tmp.join("chat-metrics-analyze.1").is_file());
        fs::remove_dir_all(&tmp).unwrap();
    }
}
