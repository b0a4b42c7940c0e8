//! Organization orchestration.
//!
//! Walks the configured source directories in order, classifies the files
//! found directly inside each one, and moves them into their category
//! subdirectories. A nonexistent source directory is reported and skipped;
//! a failed move aborts the run.

use crate::config::{CollisionPolicy, Config};
use crate::file_category::CategoryMap;
use crate::file_organizer::FileMover;
use crate::output::OutputFormatter;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A candidate file found directly inside a source directory.
#[derive(Debug, Clone)]
struct FileInfo {
    name: String,
    path: PathBuf,
}

/// Organize every configured source directory.
///
/// Sources are processed sequentially in list order. Each source is scanned
/// once, non-recursively; directories among its entries are never candidates,
/// so a second run over an already-organized source moves nothing.
///
/// With `dry_run` set, prints what would happen without touching the
/// filesystem.
///
/// # Errors
///
/// Returns an error when a source directory cannot be read or a move fails.
/// A source directory that does not exist is not an error: it is reported
/// and skipped, and the remaining sources are still processed.
pub fn run(config: &Config, dry_run: bool) -> Result<(), String> {
    let categories = CategoryMap::from_config(&config.file_types);

    for source in &config.sources {
        if !source.is_dir() {
            OutputFormatter::warning(&format!(
                "Directory {} does not exist. Skipping...",
                source.display()
            ));
            continue;
        }

        if dry_run {
            preview_source(source, &categories)?;
        } else {
            organize_source(source, &categories, config.on_collision)?;
        }
    }

    Ok(())
}

/// Classify and move every file directly inside `source`.
fn organize_source(
    source: &Path,
    categories: &CategoryMap,
    on_collision: CollisionPolicy,
) -> Result<(), String> {
    OutputFormatter::info(&format!("Organizing contents of: {}", source.display()));

    let files = list_candidate_files(source)?;
    if files.is_empty() {
        OutputFormatter::plain("No files found to organize.");
        return Ok(());
    }

    let pb = OutputFormatter::create_progress_bar(files.len() as u64);
    let mut category_counts: HashMap<String, usize> = HashMap::new();
    let mut moved = 0;

    for file in &files {
        if let Some(category) = categories.resolve(&file.name) {
            FileMover::move_to_category(source, &file.path, category, on_collision)
                .map_err(|e| e.to_string())?;

            pb.println(format!(" - {} → {}/", file.name, category));
            *category_counts.entry(category.to_string()).or_insert(0) += 1;
            moved += 1;
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    OutputFormatter::summary(&category_counts, moved);
    OutputFormatter::success("Organization complete!");

    Ok(())
}

/// Report what a run over `source` would do, without moving anything.
fn preview_source(source: &Path, categories: &CategoryMap) -> Result<(), String> {
    OutputFormatter::dry_run_notice(&format!("Analyzing contents of: {}", source.display()));

    let files = list_candidate_files(source)?;
    if files.is_empty() {
        OutputFormatter::plain("No files found to organize.");
        return Ok(());
    }

    let mut category_counts: HashMap<String, usize> = HashMap::new();
    let mut would_move = 0;

    for file in &files {
        if let Some(category) = categories.resolve(&file.name) {
            OutputFormatter::plain(&format!(" - {} → would move to {}/", file.name, category));
            *category_counts.entry(category.to_string()).or_insert(0) += 1;
            would_move += 1;
        }
    }

    OutputFormatter::summary(&category_counts, would_move);
    OutputFormatter::success("Dry run complete. No files were modified.");

    Ok(())
}

/// One non-recursive pass over the immediate entries of `source`.
///
/// Directories are skipped, never recursed into; only regular files come
/// back as candidates. Listing order is whatever the directory iterator
/// yields, not sorted.
fn list_candidate_files(source: &Path) -> Result<Vec<FileInfo>, String> {
    let entries = fs::read_dir(source)
        .map_err(|e| format!("Error reading directory {}: {}", source.display(), e))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        if let Ok(file_type) = entry.file_type()
            && file_type.is_file()
        {
            files.push(FileInfo {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
            });
        }
    }

    Ok(files)
}
