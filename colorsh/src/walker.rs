// colorsh/src/walker.rs
//! Directory traversal and ignore-list filtering.
//!
//! Collects the files a run should read: explicit arguments, a recursive
//! walk with `-R`, or a working-directory walk when only a file pattern was
//! given. Editor droppings, version-control metadata, dot directories, and
//! binary media/archive extensions are skipped unless explicitly included.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use colorsh_core::ColorshError;

use crate::options::RunOptions;

lazy_static! {
    static ref EDITOR_DROPPINGS: Regex = Regex::new(r"^(\.#.+|.+~|#.*#)$").unwrap();
    static ref IMAGE_EXTENSIONS: Regex = Regex::new(
        r"(?i)\.(jpe?g|png|gif|bmp|raw2?|tiff?|p[pgbn]m|hei[fc]|bpg|webp|ico|psd|xcf|svg|swf|pdf|ai|cgm|gbr)$"
    )
    .unwrap();
    static ref VIDEO_EXTENSIONS: Regex = Regex::new(
        r"(?i)\.(webm|flv|vob|ogv|ogg|drc|gifv|mng|avi|mov|qt|wmv|yuv|rm|rmvb|asf|amv|mp4|m4[pv]|mp[g2v]|mpeg?|svi|3g[2p]|mxf|roq|nsv|f[l4]v|f4[pab])$"
    )
    .unwrap();
    static ref AUDIO_EXTENSIONS: Regex = Regex::new(
        r"(?i)\.(3gp|aa[cx]?|act|aiff|amr|ape|au|awb|dct|dss|dvf|flac?|gsm|iklax|m4[abp]|mmf|mp[3c]|msv|m?og[ga]|opus|r[am]|raw|sln|tta|vox|wav|wma|wv)$"
    )
    .unwrap();
    static ref ARCHIVE_EXTENSIONS: Regex = Regex::new(
        r"(?i)\.(ar?|cpio|shar|lbr|iso|mar|tar|bz2|gz|lz(?:ma|o)?|rz|sfark|sz|xz|z|s?7z|ace|afa|alz|apk|arc|arj|b[1ah]|ca[br]|cfs|cpt|dar|dd|dgc|dmg|ear|gca|ha|hki|ice|jar|kgb|lz[ha]|pak|partimg|pag|pea|pim|pit|qda|rar|rk|sda|sea|sen|sfx|shk|si|sitx|sqx|uc\d?|uca|uha|war|wim|xar|xp3|yz1|zipx?|zoo|zpaq|zz)$"
    )
    .unwrap();
}

const VCS_FILES: &[&str] = &[
    "=RELEASE-ID",
    "=meta-update",
    "=update",
    ".gitignore",
    ".gitmodules",
    ".gitattributes",
    ".cvsignore",
    ".bzr",
    ".bzrignore",
    ".bzrtags",
    ".hg",
    ".hgignore",
    ".hgtags",
    "_darcs",
];

const VCS_DIRS: &[&str] = &["CVS", ".svn", ".git", "RCS", "SCCS", ".arch-ids", "{arch}"];

/// Translates a file glob (`*.log`) into an anchored path regex.
pub fn glob_to_regex(glob: &str) -> Result<Regex, ColorshError> {
    let pattern = glob.replace('.', r"\.").replace('*', ".*");
    let anchored = format!("(^|/){}$", pattern);
    Regex::new(&anchored).map_err(|e| ColorshError::PatternCompile(anchored, e))
}

/// Collects every file the run should read, in walk order.
///
/// With `-R`, directory arguments are walked recursively; with only a file
/// pattern, the working directory is walked. Finding nothing is fatal: the
/// user named inputs that do not exist.
pub fn collect_files(opts: &RunOptions) -> Result<Vec<PathBuf>> {
    let name_filter = opts
        .file_pattern
        .as_deref()
        .map(glob_to_regex)
        .transpose()?;

    let mut files: Vec<PathBuf> = Vec::new();

    if opts.files.is_empty() {
        // No explicit files: walk the working directory (recursing only
        // with -R).
        seek_dir(Path::new("."), &mut files, name_filter.as_ref(), opts);
    } else {
        for path in &opts.files {
            let metadata = match fs::metadata(path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Error on stat file {}: {}", path.display(), e);
                    continue;
                }
            };
            if metadata.is_dir() {
                if opts.recursive {
                    seek_dir(path, &mut files, name_filter.as_ref(), opts);
                } else {
                    warn!("{} is a directory (use -R to recurse)", path.display());
                }
            } else {
                files.push(path.clone());
            }
        }
    }

    if files.is_empty() {
        return Err(anyhow!("Files are not given or found"));
    }
    debug!("Collected {} file(s)", files.len());
    Ok(files)
}

fn seek_dir(dir: &Path, files: &mut Vec<PathBuf>, name_filter: Option<&Regex>, opts: &RunOptions) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Error on reading dir {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            if opts.recursive && !is_ignored_dir(&name, opts) {
                debug!("Seek dir: {}", path.display());
                seek_dir(&path, files, name_filter, opts);
            }
            continue;
        }

        if is_ignored_file(&name, opts) {
            continue;
        }
        if let Some(filter) = name_filter {
            if !filter.is_match(&path.to_string_lossy()) {
                continue;
            }
        }
        files.push(path);
    }
}

fn is_ignored_file(name: &str, opts: &RunOptions) -> bool {
    if EDITOR_DROPPINGS.is_match(name) {
        return true;
    }
    if !opts.include_vcs && VCS_FILES.contains(&name) {
        return true;
    }
    if !opts.include_ext
        && (IMAGE_EXTENSIONS.is_match(name)
            || VIDEO_EXTENSIONS.is_match(name)
            || AUDIO_EXTENSIONS.is_match(name)
            || ARCHIVE_EXTENSIONS.is_match(name))
    {
        return true;
    }
    false
}

fn is_ignored_dir(name: &str, opts: &RunOptions) -> bool {
    if !opts.include_dot && name.len() > 1 && name.starts_with('.') {
        return true;
    }
    if !opts.include_vcs && VCS_DIRS.contains(&name) {
        return true;
    }
    false
}
