//! Output file naming

use std::path::{Path, PathBuf};

/// `<dir>/<prefix><input file name>`
///
/// `dir` is `output_dir` when given, else the user's Downloads directory, else
/// the input file's own directory.
pub fn suggested_output_path(input: &Path, output_dir: Option<&Path>, prefix: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.wav".to_string());

    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(dirs_next::download_dir)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    dir.join(format!("{}{}", prefix, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_dir() {
        let path = suggested_output_path(
            Path::new("/recordings/take1.wav"),
            Some(Path::new("/exports")),
            "cleaned_",
        );
        assert_eq!(path, PathBuf::from("/exports/cleaned_take1.wav"));
    }

    #[test]
    fn test_default_dir_keeps_file_name() {
        let path = suggested_output_path(Path::new("/recordings/take2.wav"), None, "cleaned_");
        assert_eq!(path.file_name().unwrap(), "cleaned_take2.wav");
    }

    #[test]
    fn test_missing_file_name() {
        let path = suggested_output_path(Path::new("/"), Some(Path::new("/out")), "x_");
        assert_eq!(path, PathBuf::from("/out/x_output.wav"));
    }
}
