//! Rerun directive — which failed tests to run again, and where.

/// Instruction to re-execute only previously failed tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RerunDirective {
    /// Complete run filter token, e.g. `-run=TestOne|TestTwo`. Emitted verbatim.
    pub run_flag: String,
    /// The single package holding the failures.
    pub pkg: String,
}

impl RerunDirective {
    pub fn new(run_flag: impl Into<String>, pkg: impl Into<String>) -> Self {
        Self {
            run_flag: run_flag.into(),
            pkg: pkg.into(),
        }
    }

    /// Rerun a single test, which may be a subtest (`TestA/case_1`).
    ///
    /// The Go tool splits `-run` on `/` and matches each level separately,
    /// so every level gets its own anchors.
    pub fn for_test(pkg: impl Into<String>, name: &str) -> Self {
        let pattern = name
            .split('/')
            .map(|part| format!("^{}$", regex::escape(part)))
            .collect::<Vec<_>>()
            .join("/");
        Self::new(format!("-run={pattern}"), pkg)
    }

    /// Rerun several tests from one package.
    ///
    /// Subtests collapse to their root test, since an alternation can only
    /// express the top level. Returns `None` for an empty list.
    pub fn for_tests<S: AsRef<str>>(pkg: impl Into<String>, names: &[S]) -> Option<Self> {
        match names {
            [] => None,
            [only] => Some(Self::for_test(pkg, only.as_ref())),
            _ => {
                let mut roots: Vec<&str> = Vec::new();
                for name in names {
                    let root = root_test_name(name.as_ref());
                    if !roots.contains(&root) {
                        roots.push(root);
                    }
                }
                if let [root] = roots.as_slice() {
                    tracing::debug!(root, "all failures share one root test");
                    return Some(Self::for_test(pkg, root));
                }
                let alternation = roots
                    .iter()
                    .map(|r| regex::escape(r))
                    .collect::<Vec<_>>()
                    .join("|");
                Some(Self::new(format!("-run=^({alternation})$"), pkg))
            }
        }
    }
}

fn root_test_name(name: &str) -> &str {
    name.split_once('/').map_or(name, |(root, _)| root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_top_level_test() {
        let d = RerunDirective::for_test("./pkg", "TestFoo");
        assert_eq!(d.run_flag, "-run=^TestFoo$");
        assert_eq!(d.pkg, "./pkg");
    }

    #[test]
    fn subtest_anchors_each_level() {
        let d = RerunDirective::for_test("./pkg", "TestFoo/case_1");
        assert_eq!(d.run_flag, "-run=^TestFoo$/^case_1$");
    }

    #[test]
    fn metacharacters_are_escaped() {
        let d = RerunDirective::for_test("./pkg", "TestFoo/a+b(c)");
        assert_eq!(d.run_flag, r"-run=^TestFoo$/^a\+b\(c\)$");
    }

    #[test]
    fn several_tests_use_alternation_of_roots() {
        let d = RerunDirective::for_tests("./pkg", &["TestOne", "TestTwo/sub", "TestOne/other"])
            .unwrap();
        assert_eq!(d.run_flag, "-run=^(TestOne|TestTwo)$");
    }

    #[test]
    fn shared_root_reruns_the_root() {
        let d = RerunDirective::for_tests("./pkg", &["TestOne/a", "TestOne/b"]).unwrap();
        assert_eq!(d.run_flag, "-run=^TestOne$");
    }

    #[test]
    fn empty_list_is_none() {
        let names: [&str; 0] = [];
        assert!(RerunDirective::for_tests("./pkg", &names).is_none());
    }
}
