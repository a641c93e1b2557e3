use std::ffi::OsStr;

/// File name endings produced by a LaTeX build (latexmk, pdflatex, synctex, biber)
pub const TARGET_SUFFIXES: &[&str] = &[
    ".aux",
    ".log",
    ".synctex.gz",
    ".fdb_latexmk",
    ".fls",
    ".pre",
];

/// Return the first suffix in [`TARGET_SUFFIXES`] that `name` ends with.
///
/// Only the final name component is tested, case-sensitively, as a plain
/// string ending. `paper.AUX` and `aux` do not match; `.aux` does.
pub fn matched_suffix(name: &OsStr) -> Option<&'static str> {
    let name = name.to_string_lossy();
    TARGET_SUFFIXES
        .iter()
        .copied()
        .find(|suffix| name.ends_with(suffix))
}

/// Check if a file name marks a temporary build file
pub fn is_temp_file_name(name: &OsStr) -> bool {
    matched_suffix(name).is_some()
}
