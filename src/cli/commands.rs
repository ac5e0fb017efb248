//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::GenealogyView;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::{render_rows, render_tree};
use crate::config::{global_config_path, local_config_path, RenderStyle, Settings};
use crate::domain::StudentId;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::FileSystem;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.data_dir.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        settings.data_dir = dir.clone();
    }
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Show {
            id,
            style,
            no_links,
        }) => cmd_show(&container, StudentId(*id), *style, *no_links),
        Some(Commands::Search { name }) => cmd_search(&container, name),
        Some(Commands::Config { command }) => cmd_config(&container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(())
        }
    }
}

#[instrument(skip(container))]
fn cmd_show(
    container: &ServiceContainer,
    id: StudentId,
    style: Option<RenderStyle>,
    no_links: bool,
) -> CliResult<()> {
    let render = &container.settings.render;
    let style = style.unwrap_or(render.style);
    let show_links = render.show_links && !no_links;

    let mut view = GenealogyView::new();
    view.refresh(&container.genealogy, id)?;

    let family = view.family();
    if family.generations.is_empty() {
        output::warning(&format!("no family recorded for student {id}"));
        return Ok(());
    }
    if family.query.is_none() {
        output::warning(&format!("student {id} is not part of the family data"));
    }

    let rendered = match style {
        RenderStyle::Rows => render_rows(family, show_links),
        RenderStyle::Tree => render_tree(family),
    };
    output::info(&rendered);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_search(container: &ServiceContainer, name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArgs("search needs a name".to_string()));
    }
    let results = container.genealogy.search(name)?;

    if results.is_empty() {
        output::warning(&format!("no student matches {name:?}"));
        return Ok(());
    }
    for result in results {
        let mut line = format!("{:>6}  {}", result.id, result.name);
        match (result.rank, result.promotion.as_deref()) {
            (Some(rank), Some(promotion)) => line.push_str(&format!(" ({rank} · {promotion})")),
            (Some(rank), None) => line.push_str(&format!(" ({rank})")),
            (None, Some(promotion)) => line.push_str(&format!(" ({promotion})")),
            (None, None) => {}
        }
        output::info(&format!("{line}\n"));
    }
    Ok(())
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    let settings = &container.settings;
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                local_config_path(&settings.data_dir)
            };
            write_template(container, &path)?;
            output::action("Created", &path.display());
            Ok(())
        }
        ConfigCommands::Path => {
            let fs = container.fs.as_ref();
            output::header("Config files");
            match global_config_path() {
                Some(path) => output::detail(&format!(
                    "global: {} {}",
                    path.display(),
                    file_marker(fs, &path)
                )),
                None => output::detail("global: <unavailable>"),
            }
            let local = local_config_path(&settings.data_dir);
            output::detail(&format!("local:  {} {}", local.display(), file_marker(fs, &local)));
            output::detail(&format!(
                "data:   {} {}",
                settings.data_dir.display(),
                dir_marker(fs, &settings.data_dir)
            ));
            Ok(())
        }
    }
}

fn write_template(container: &ServiceContainer, path: &Path) -> CliResult<()> {
    if container.fs.exists(path) {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        container
            .fs
            .create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    container
        .fs
        .write(path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    Ok(())
}

fn file_marker(fs: &dyn FileSystem, path: &Path) -> &'static str {
    if fs.is_file(path) {
        "(exists)"
    } else {
        "(missing)"
    }
}

fn dir_marker(fs: &dyn FileSystem, path: &Path) -> &'static str {
    if fs.is_dir(path) {
        "(exists)"
    } else if fs.exists(path) {
        "(not a directory)"
    } else {
        "(missing)"
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::infrastructure::traits::RealFileSystem;

    #[test]
    fn given_existing_data_dir_when_marking_then_exists() {
        let temp = TempDir::new().unwrap();

        assert_eq!(dir_marker(&RealFileSystem, temp.path()), "(exists)");
    }

    #[test]
    fn given_file_in_place_of_data_dir_when_marking_then_not_a_directory() {
        // Arrange
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data");
        std::fs::write(&path, "").unwrap();

        // Act
        let marker = dir_marker(&RealFileSystem, &path);

        // Assert
        assert_eq!(marker, "(not a directory)");
        assert_eq!(file_marker(&RealFileSystem, &path), "(exists)");
    }

    #[test]
    fn given_missing_paths_when_marking_then_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nowhere");

        assert_eq!(dir_marker(&RealFileSystem, &path), "(missing)");
        assert_eq!(file_marker(&RealFileSystem, &path), "(missing)");
    }
}
