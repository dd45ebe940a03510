use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// A heading and the block of lines it introduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub level: usize,
    /// First line of the section (the heading itself).
    pub start: usize,
    /// One past the last line of the section.
    pub end: usize,
}

impl Section {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A text document shown one line per row.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
    sections: Vec<Section>,
}

impl Document {
    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read as UTF-8 text.
    pub fn read(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| AppError::ReadDocument {
            path: path.to_path_buf(),
            source: err,
        })?;
        Ok(Self::parse(path, &text))
    }

    #[must_use]
    pub fn parse(path: &Path, text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(|line| line.replace('\t', "    ")).collect();
        let sections = find_sections(&lines);
        Self {
            path: path.to_path_buf(),
            lines,
            sections,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Title shown in the header: the first heading, else the file name.
    #[must_use]
    pub fn title(&self) -> String {
        self.sections.first().map_or_else(
            || {
                self.path
                    .file_name()
                    .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
            },
            |section| section.title.clone(),
        )
    }

    /// Section containing `line`, if any.
    #[must_use]
    pub fn section_at(&self, line: usize) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.start <= line && line < section.end)
    }
}

fn find_sections(lines: &[String]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut in_fence = false;
    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let Some((level, title)) = parse_heading(trimmed) else {
            continue;
        };
        if let Some(previous) = sections.last_mut() {
            previous.end = index;
        }
        sections.push(Section {
            title,
            level,
            start: index,
            end: lines.len(),
        });
    }
    sections
}

fn parse_heading(line: &str) -> Option<(usize, String)> {
    let level = line.chars().take_while(|ch| *ch == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = line.get(level..)?;
    if !rest.starts_with(' ') {
        return None;
    }
    let title = rest.trim().trim_end_matches('#').trim_end();
    if title.is_empty() {
        return None;
    }
    Some((level, title.to_owned()))
}

/// Stable page path used to key stored checkpoints for a document.
#[must_use]
pub fn page_path(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_err| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
