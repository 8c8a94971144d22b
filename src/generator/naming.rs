//! Name normalization for generated records.

/// Words that cannot be used as a record or module name
pub const RESERVED_NAMES: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Whether `name` (or its last path segment) is reserved
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    let trimmed = name.trim();
    let last = trimmed
        .trim_matches(|c| c == '/' || c == '\\')
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed);
    let last = last.strip_suffix(".rs").unwrap_or(last);

    RESERVED_NAMES.contains(&trimmed)
        || RESERVED_NAMES.contains(&last)
        || RESERVED_NAMES.contains(&to_snake_case(last).as_str())
}

/// A requested record name split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    /// Subfolders below the output folder, `/`-separated
    pub sub_folders: Option<String>,
    /// The record's type name
    pub class: String,
}

impl TargetName {
    /// Normalize a requested name
    ///
    /// Surrounding slashes and a `.rs` extension are removed, everything
    /// before the last `/` becomes the subfolder path and the first letter
    /// of the type name is upper-cased. With `attach_dto` the type name ends
    /// in `Dto`.
    #[must_use]
    pub fn parse(raw: &str, attach_dto: bool) -> Self {
        let trimmed = raw.trim().trim_matches(|c| c == '/' || c == '\\');
        let trimmed = trimmed.strip_suffix(".rs").unwrap_or(trimmed);
        let normalized = trimmed.replace('\\', "/");

        let (sub_folders, stem) = match normalized.rsplit_once('/') {
            Some((folders, stem)) if !folders.is_empty() => (Some(folders.to_string()), stem),
            Some((_, stem)) => (None, stem),
            None => (None, normalized.as_str()),
        };

        let mut class = upper_first(stem);
        if attach_dto {
            class = attach_dto_suffix(&class);
        }

        Self { sub_folders, class }
    }

    /// File name of the generated source file
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.rs", to_snake_case(&self.class))
    }

    /// Module path segments contributed by the subfolders
    pub fn module_segments(&self) -> impl Iterator<Item = &str> {
        self.sub_folders
            .as_deref()
            .into_iter()
            .flat_map(|folders| folders.split('/'))
            .filter(|segment| !segment.is_empty())
    }
}

/// Upper-case the first character of `s`
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn attach_dto_suffix(class: &str) -> String {
    let cut = class.len().checked_sub(3).filter(|&cut| {
        class.is_char_boundary(cut) && class[cut..].eq_ignore_ascii_case("dto")
    });
    match cut {
        Some(cut) => format!("{}Dto", &class[..cut]),
        None => format!("{class}Dto"),
    }
}

/// Convert a `CamelCase` name to `snake_case`
///
/// Runs of capitals are kept together: `HTTPServer` gives `http_server`.
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (idx, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if c.is_uppercase() {
            let prev = idx.checked_sub(1).and_then(|i| chars.get(i));
            let next = chars.get(idx + 1);
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_names() {
        assert!(is_reserved("match"));
        assert!(is_reserved(" type "));
        assert!(is_reserved("videos/struct"));
        assert!(!is_reserved("image"));
        assert!(!is_reserved("matcher"));
        // The file name is lower-cased, so capitalised keywords clash too
        assert!(is_reserved("Match"));
        assert!(is_reserved("videos/Struct.rs"));
        assert!(!is_reserved("MatchDto"));
    }

    #[test]
    fn test_parse_plain() {
        let target = TargetName::parse("image", false);
        assert_eq!(target.sub_folders, None);
        assert_eq!(target.class, "Image");
        assert_eq!(target.file_name(), "image.rs");
    }

    #[test]
    fn test_parse_subfolders_and_suffix() {
        let target = TargetName::parse("/videos/clips/videoFile.rs/", true);
        assert_eq!(target.sub_folders.as_deref(), Some("videos/clips"));
        assert_eq!(target.class, "VideoFileDto");
        assert_eq!(target.file_name(), "video_file_dto.rs");
        assert_eq!(target.module_segments().collect::<Vec<_>>(), vec!["videos", "clips"]);
    }

    #[test]
    fn test_parse_backslashes() {
        let target = TargetName::parse("videos\\clip", false);
        assert_eq!(target.sub_folders.as_deref(), Some("videos"));
        assert_eq!(target.class, "Clip");
    }

    #[test]
    fn test_attach_normalizes_existing_suffix() {
        assert_eq!(TargetName::parse("imageDTO", true).class, "ImageDto");
        assert_eq!(TargetName::parse("imagedto", true).class, "ImageDto");
        assert_eq!(TargetName::parse("imageDTO", false).class, "ImageDTO");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("VideoFileDto"), "video_file_dto");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("Image2Dto"), "image2_dto");
        assert_eq!(to_snake_case("Image"), "image");
    }
}
