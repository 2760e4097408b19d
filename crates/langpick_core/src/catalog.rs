//! Language option catalog, host-choice loading, and alias canonicalization.

use crate::constants::{AUTO_DETECT_LABEL, AUTO_DETECT_VALUE};
use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// A selectable language choice.
///
/// `value` is the stored key; `label` is what the rendering surface shows.
/// File sources may use `alias`/`displayname` for the same fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageOption {
    #[serde(alias = "alias")]
    pub value: String,
    #[serde(alias = "displayname")]
    pub label: String,
}

impl LanguageOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The auto-detect sentinel placed at the head of every loaded set.
    pub fn auto_detect() -> Self {
        Self::new(AUTO_DETECT_VALUE, AUTO_DETECT_LABEL)
    }

    /// Return `true` for the auto-detect sentinel.
    pub fn is_auto_detect(&self) -> bool {
        self.value == AUTO_DETECT_VALUE
    }
}

/// Built-in `(value, label)` table used when no external source is configured.
pub const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("c", "C"),
    ("cpp", "C++"),
    ("cs", "C#"),
    ("css", "CSS"),
    ("dart", "Dart"),
    ("elixir", "Elixir"),
    ("go", "Go"),
    ("haskell", "Haskell"),
    ("html", "HTML"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("json", "JSON"),
    ("kotlin", "Kotlin"),
    ("latex", "LaTeX"),
    ("lua", "Lua"),
    ("markdown", "Markdown"),
    ("objectivec", "Objective-C"),
    ("perl", "Perl"),
    ("php", "PHP"),
    ("text", "Plain text"),
    ("powershell", "PowerShell"),
    ("python", "Python"),
    ("ruby", "Ruby"),
    ("rust", "Rust"),
    ("scala", "Scala"),
    ("shell", "Shell Script"),
    ("sql", "SQL"),
    ("swift", "Swift"),
    ("toml", "TOML"),
    ("typescript", "TypeScript"),
    ("vb", "Visual Basic"),
    ("xml", "XML"),
    ("yaml", "YAML"),
    ("zig", "Zig"),
];

/// Convert aliases/legacy names to canonical option values.
///
/// # Returns
/// Canonical, lowercase value (or empty string for empty/whitespace input).
pub fn canonicalize(language: &str) -> String {
    let lowered = language.trim().to_ascii_lowercase();
    let canonical = match lowered.as_str() {
        "csharp" | "c#" => "cs",
        "c++" | "cxx" | "cc" => "cpp",
        "bash" | "sh" | "zsh" => "shell",
        "pwsh" | "ps1" => "powershell",
        "yml" => "yaml",
        "jsonl" => "json",
        "js" | "node" => "javascript",
        "ts" => "typescript",
        "md" => "markdown",
        "plaintext" | "plain text" | "plain" | "txt" => "text",
        "py" => "python",
        "rs" => "rust",
        "rb" => "ruby",
        "kt" => "kotlin",
        "hs" => "haskell",
        "m" | "mm" | "objc" | "objective-c" => "objectivec",
        "pl" => "perl",
        "ex" | "exs" => "elixir",
        "tex" => "latex",
        "vbnet" | "visual basic" => "vb",
        _ => return lowered,
    };
    canonical.to_string()
}

fn label_order(a: &LanguageOption, b: &LanguageOption) -> Ordering {
    a.label
        .to_lowercase()
        .cmp(&b.label.to_lowercase())
        .then_with(|| a.label.cmp(&b.label))
        .then_with(|| a.value.cmp(&b.value))
}

/// Immutable, display-ordered option list loaded once per session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet {
    options: Vec<LanguageOption>,
}

impl OptionSet {
    /// Build a display-ordered set from raw host choices.
    ///
    /// Choices with an empty value or the auto-detect value are skipped, labels
    /// are trimmed, duplicate values keep their first occurrence, and the rest
    /// are sorted by label. When `include_auto_detect` is set the sentinel is
    /// placed first.
    pub fn from_choices<I>(choices: I, include_auto_detect: bool) -> Self
    where
        I: IntoIterator<Item = LanguageOption>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut options: Vec<LanguageOption> = Vec::new();
        for choice in choices {
            let value = choice.value.trim();
            if value.is_empty() || value == AUTO_DETECT_VALUE {
                continue;
            }
            if !seen.insert(value.to_string()) {
                warn!(value = value, "dropping duplicate language option");
                continue;
            }
            let label = choice.label.trim();
            let label = if label.is_empty() { value } else { label };
            options.push(LanguageOption::new(value, label));
        }
        options.sort_by(label_order);
        if include_auto_detect {
            options.insert(0, LanguageOption::auto_detect());
        }
        Self { options }
    }

    /// Build the set from [`BUILTIN_LANGUAGES`].
    pub fn builtin(include_auto_detect: bool) -> Self {
        Self::from_choices(
            BUILTIN_LANGUAGES
                .iter()
                .map(|(value, label)| LanguageOption::new(*value, *label)),
            include_auto_detect,
        )
    }

    /// Load host choices from a JSON array of `{value, label}` objects.
    ///
    /// # Errors
    /// Returns [`PickerError`] when the file cannot be read or parsed, or when
    /// it yields no options besides the sentinel.
    pub fn from_json_path(path: &Path, include_auto_detect: bool) -> Result<Self, PickerError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PickerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let choices: Vec<LanguageOption> =
            serde_json::from_str(&raw).map_err(|source| PickerError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let set = Self::from_choices(choices, include_auto_detect);
        if set.options.iter().all(LanguageOption::is_auto_detect) {
            return Err(PickerError::EmptyOptionSet(path.to_path_buf()));
        }
        info!(path = %path.display(), options = set.len(), "loaded language options");
        Ok(set)
    }

    pub fn as_slice(&self) -> &[LanguageOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn first(&self) -> Option<&LanguageOption> {
        self.options.first()
    }

    /// Find an option by stored value, resolving aliases first.
    pub fn find(&self, value: &str) -> Option<&LanguageOption> {
        let trimmed = value.trim();
        if let Some(exact) = self.options.iter().find(|option| option.value == trimmed) {
            return Some(exact);
        }
        let canonical = canonicalize(trimmed);
        self.options.iter().find(|option| option.value == canonical)
    }
}
