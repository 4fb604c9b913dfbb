//! Integration tests for the glob, grep and literal-path dialects.

use treequery::query::{Dialect, Query, QueryError, Step};

#[test]
fn test_glob_star() {
    let query = Query::glob("*.exe").unwrap();
    assert!(query.matches("calc.exe"));
    assert!(query.matches(".exe"));
    assert!(!query.matches("calc.ini"));
    assert!(!query.matches("calc.exe.bak"));
}

#[test]
fn test_glob_question_mark() {
    let query = Query::glob("?.exe").unwrap();
    assert!(query.matches("a.exe"));
    assert!(!query.matches("ab.exe"));
    assert!(!query.matches(".exe"));
}

#[test]
fn test_glob_regex_characters_are_literal() {
    let query = Query::glob("report(1)+[draft].txt").unwrap();
    assert!(query.matches("report(1)+[draft].txt"));
    assert!(!query.matches("report1.txt"));
}

#[test]
fn test_glob_star_does_not_cross_segments() {
    let query = Query::glob("windows/*.exe").unwrap();
    assert!(query.matches("windows/calc.exe"));
    assert!(!query.matches("windows/system32/calc.exe"));
}

#[test]
fn test_glob_directives_still_apply() {
    let query = Query::glob("windows/**/c*.exe").unwrap();
    assert_eq!(query.steps()[1], Step::DescendantOf);
    assert!(query.matches("windows/foo/bar/calc.exe"));
    assert!(query.matches("windows/cmd.exe"));
    assert!(!query.matches("windows/foo/notepad.exe"));
}

#[test]
fn test_glob_ignore_case() {
    let query = Query::with_ignore_case("*.EXE", Dialect::Glob, true).unwrap();
    assert!(query.matches("calc.exe"));
    assert!(query.matches("CALC.Exe"));
}

#[test]
fn test_grep_dot_is_any_character() {
    let query = Query::grep("a.c").unwrap();
    assert!(query.matches("abc"));
    assert!(query.matches("a.c"));
    assert!(!query.matches("abbc"));
}

#[test]
fn test_grep_anchors() {
    let query = Query::grep("^calc.*$").unwrap();
    assert!(query.matches("calc.exe"));
    assert!(!query.matches("mycalc"));
}

#[test]
fn test_grep_groups_and_alternation() {
    let query = Query::grep(r"\(foo\|bar\)\{2\}").unwrap();
    assert!(query.matches("foobar"));
    assert!(query.matches("barbar"));
    assert!(!query.matches("foo"));
    assert!(!query.matches("foobaz"));
}

#[test]
fn test_grep_escaped_parens_group() {
    let query = Query::grep(r"f\(x\)").unwrap();
    assert!(query.matches("fx"));
    assert!(!query.matches("f(x)"));

    // An unescaped `(` is not a group in a basic regular expression, but
    // it is passed to the regex engine as-is and so must be balanced.
    let query = Query::grep("f(x)").unwrap();
    assert!(query.matches("fx"));
}

#[test]
fn test_grep_negated_bracket_expression() {
    let query = Query::grep(r"[^x]\+").unwrap();
    assert!(query.matches("abc"));
    assert!(!query.matches("axc"));
    assert!(!query.matches(""));
}

#[test]
fn test_grep_dollar_in_bracket_is_literal() {
    let query = Query::grep("a[$]").unwrap();
    assert!(query.matches("a$"));
    assert!(!query.matches("a"));

    let query = Query::grep("^price[$0-9]*$").unwrap();
    assert!(query.matches("price$42"));
    assert!(!query.matches("price-42"));
}

#[test]
fn test_grep_word_boundaries() {
    let query = Query::grep(r"\<log\>.*").unwrap();
    assert!(query.matches("log file"));
    assert!(!query.matches("logs"));
}

#[test]
fn test_grep_repetition_operators() {
    let query = Query::grep(r"ab\+c\?").unwrap();
    assert!(query.matches("ab"));
    assert!(query.matches("abbbc"));
    assert!(!query.matches("ac"));
}

#[test]
fn test_grep_in_path() {
    let query = Query::grep("usr/*/lib.*").unwrap();
    assert!(query.matches("usr/local/lib64"));
    assert!(!query.matches("usr/local/bin"));
}

#[test]
fn test_literal_dialect() {
    let query = Query::literal("etc/a+b (1).conf").unwrap();
    assert!(query.matches("etc/a+b (1).conf"));
    assert!(!query.matches("etc/aab (1)Xconf"));
}

#[test]
fn test_literal_dialect_keeps_directives() {
    let query = Query::literal("home/**/.bashrc").unwrap();
    assert!(query.matches("home/alice/.bashrc"));
    assert!(query.matches("home/.bashrc"));
    assert!(!query.matches("home/alice/.profile"));

    // a bare `*` segment is still any one child
    let query = Query::literal("a/*/c").unwrap();
    assert!(query.matches("a/b/c"));
    assert!(query.matches("a/*x/c"));

    // inside a longer segment it is plain text
    let query = Query::literal("a/b*/c").unwrap();
    assert!(query.matches("a/b*/c"));
    assert!(!query.matches("a/bx/c"));
}

#[test]
fn test_literal_dialect_ignore_case() {
    let query = Query::with_ignore_case("ReadMe.MD", Dialect::Literal, true).unwrap();
    assert!(query.matches("README.md"));
}

#[test]
fn test_malformed_grep_pattern() {
    let err = Query::grep(r"ok/\(open").unwrap_err();
    assert!(matches!(
        err,
        QueryError::MalformedPattern {
            index: 1,
            offset: 3,
            ..
        }
    ));
}

#[test]
fn test_glob_never_malformed() {
    for pattern in ["[", "(", "{1,", "\\", "a**b"] {
        assert!(Query::glob(pattern).is_ok(), "glob {:?}", pattern);
    }
}

#[test]
fn test_dialect_names() {
    let names: Vec<&str> = Dialect::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["regex", "glob", "grep", "literal"]);
    assert_eq!(Dialect::default(), Dialect::Regex);
    assert!("fnmatch".parse::<Dialect>().is_err());
}
