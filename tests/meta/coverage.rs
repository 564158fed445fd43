//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Harness roots and module declaration files carry no tests of their own
    fn is_exempt(relative: &str) -> bool {
        let file_name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn layout() -> (BTreeSet<String>, BTreeSet<String>) {
        let src_dir = Path::new("src");
        let unit_dir = Path::new("tests/unit");

        assert!(src_dir.is_dir(), "run from the package root");
        let src = rust_paths(src_dir, src_dir).unwrap_or_default();
        let unit = rust_paths(unit_dir, unit_dir).unwrap_or_default();
        (src, unit)
    }

    // Relative paths of every directory and `.rs` file below `dir`
    fn rust_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("path outside scanned directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(rust_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (src, unit) = layout();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_exempt(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let (src, unit) = layout();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_exempt(path) && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let tests_dir = Path::new("tests");
        let files = rust_paths(tests_dir, tests_dir).unwrap_or_default();

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !is_exempt(path))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path.as_str()))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
