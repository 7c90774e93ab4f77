// compat_preg.rs - Integration tests for preg pattern syntax and matching.
//
// Each helper compiles a delimited pattern and runs a forward search from
// offset 0: `x2` checks the bounds of the whole match, `x3` the bounds of one
// capture group, `n` expects no match and `e` a compile error.

use pregex::error::CompileError;
use pregex::pattern::Pattern;

fn compile(pattern: &str) -> Pattern {
    Pattern::new(pattern)
        .unwrap_or_else(|e| panic!("compile failed for {:?}: {}", pattern, e))
}

fn x3(pattern: &str, input: &str, from: usize, to: usize, mem: usize) {
    let reg = compile(pattern);
    let mut m = reg.matcher(input.as_bytes());
    let found = m
        .find()
        .unwrap_or_else(|e| panic!("match of {:?} failed: {}", pattern, e));
    assert!(
        found,
        "x: expected match for {:?} against {:?}",
        pattern, input
    );
    assert_eq!(
        (m.group_start(mem), m.group_end(mem)),
        (Some(from), Some(to)),
        "x: wrong bounds of group {} for {:?} against {:?}",
        mem,
        pattern,
        input
    );
}

fn x2(pattern: &str, input: &str, from: usize, to: usize) {
    x3(pattern, input, from, to, 0);
}

fn n(pattern: &str, input: &str) {
    let reg = compile(pattern);
    let found = reg.is_match(input.as_bytes()).unwrap();
    assert!(
        !found,
        "n: expected no match for {:?} against {:?}",
        pattern, input
    );
}

fn e(pattern: &str) -> CompileError {
    match Pattern::new(pattern) {
        Ok(_) => panic!("e: expected compile error for {:?}", pattern),
        Err(err) => err,
    }
}

// === Delimiters and flags ===

#[test]
fn delimiters() {
    x2("/abc/", "xabcx", 1, 4);
    x2("#a#i", "A", 0, 1);
    x2("{a+}", "baa", 1, 3);
    x2("(a(b))", "ab", 0, 2);
    x2("  !x!", "x", 0, 1);
    e("abc");
    e("/abc");
    e("/");
    e("\\abc\\");
}

#[test]
fn unknown_flag_is_syntax_error() {
    let err = e("/abc/k");
    assert!(matches!(err, CompileError::Syntax { pos: 5, .. }));
}

#[test]
fn extended_flag() {
    x2("/a b # comment\n c/x", "abc", 0, 3);
    x2("/a[ ]b/x", "a b", 0, 3);
    n("/a b/x", "a b");
}

#[test]
fn anchored_flag() {
    n("/b/A", "ab");
    x2("/a|b/A", "bx", 0, 1);
}

#[test]
fn strict_escapes() {
    x2("/\\q/", "q", 0, 1);
    e("/\\q/X");
    x2("/\\./X", ".", 0, 1);
}

// === Literals and escapes ===

#[test]
fn literals() {
    x2("//", "abc", 0, 0);
    x2("/abc/", "abc", 0, 3);
    n("/abc/", "abd");
    x2("/a.c/", "abc", 0, 3);
    n("/a.c/", "a\nc");
    x2("/a.c/s", "a\nc", 0, 3);
}

#[test]
fn escapes() {
    x2("/\\x41\\x{42}/", "AB", 0, 2);
    x2("/\\cA/", "\u{1}", 0, 1);
    x2("/\\t\\n\\r\\f/", "\t\n\r\u{c}", 0, 4);
    x2("/\\e\\a/", "\u{1b}\u{7}", 0, 2);
    x2("/\\101/", "A", 0, 1);
    // the zero of `\10` stays part of the octal number
    x2("/\\10x/", "\u{8}x", 0, 2);
    x2("/a\\10/", "a\u{8}", 0, 2);
    x2("/\\0/", "a\0", 1, 2);
    x2("/\\Qa.b\\E+/", "a.bb", 0, 4);
    n("/\\Qa.b\\E/", "axb");
    x2("/\\d+\\s\\w+/", "x 12 ab!", 2, 7);
}

// === Classes ===

#[test]
fn bracket_classes() {
    x2("/[a-c]+/", "xxbcay", 2, 5);
    x2("/[^a-c]+/", "abxyc", 2, 4);
    x2("/[]a]+/", "x]a]", 1, 4);
    x2("/[a-]+/", "x-a-", 1, 4);
    x2("/[\\d.]+/", "v1.25x", 1, 5);
    x2("/[[:digit:]]+/", "ab123", 2, 5);
    x2("/[[:^alpha:]]+/", "ab12c", 2, 4);
    x2("/[[:xdigit:]]+/", "xyzBEEFg", 3, 7);
}

#[test]
fn bracket_class_errors() {
    assert!(matches!(e("/[[:foo:]]/"), CompileError::UnknownClass(name) if name == "foo"));
    assert!(matches!(e("/[z-a]/"), CompileError::BadRange { .. }));
    e("/[abc/");
}

#[test]
fn case_insensitive() {
    x2("/HeLLo/i", "say hello", 4, 9);
    x2("/[a-c]+/i", "xABCx", 1, 4);
    x2("/(?i)ab(?-i)c/", "ABc", 0, 3);
    n("/(?i)ab(?-i)c/", "ABC");
    x2("/a(?i:b)c/", "aBc", 0, 3);
    n("/a(?i:b)c/", "aBC");
    x2("/x(?i)y/", "xY", 0, 2);
    n("/(?:(?i)a)b/", "AB");
}

// === Anchors ===

#[test]
fn anchors() {
    x2("/^abc$/", "abc", 0, 3);
    x2("/abc$/", "abc\n", 0, 3);
    n("/abc$/D", "abc\n");
    x2("/^b/m", "a\nb", 2, 3);
    n("/^b/", "a\nb");
    x2("/a$/m", "a\nb", 0, 1);
    x2("/\\Aab/", "ab", 0, 2);
    x2("/ab\\z/", "xab", 1, 3);
    n("/ab\\z/", "ab\n");
    x2("/ab\\Z/", "ab\n", 0, 2);
}

#[test]
fn word_boundaries() {
    x2("/\\bfoo\\b/", "a foo b", 2, 5);
    n("/\\bfoo\\b/", "afoo");
    x2("/\\Boo/", "foo", 1, 3);
}

// === Quantifiers ===

#[test]
fn greedy_and_lazy() {
    x2("/a*/", "aaab", 0, 3);
    x2("/a*?/", "aaa", 0, 0);
    x2("/a+?/", "aaa", 0, 1);
    x2("/a??b/", "ab", 0, 2);
    x2("/<.+>/", "<a><b>", 0, 6);
    x2("/<.+?>/", "<a><b>", 0, 3);
    x2("/a+/U", "aaa", 0, 1);
    x2("/a+?/U", "aaa", 0, 3);
}

#[test]
fn intervals() {
    x2("/a{2}/", "aaaa", 0, 2);
    x2("/a{2,}/", "aaaa", 0, 4);
    x2("/a{1,3}/", "aaaa", 0, 3);
    x2("/a{1,3}?/", "aaaa", 0, 1);
    x2("/a{,3}/", "a{,3}", 0, 5);
    x2("/x{/", "x{", 0, 2);
    x2("/(?:ab){2}/", "abababx", 0, 4);
    e("/a{3,2}/");
    e("/a{2/");
}

#[test]
fn quantifier_applies_to_last_char() {
    x2("/abc+/", "abccc", 0, 5);
    x2("/abc+/", "abcabc", 0, 3);
    x2("/abc{2}/", "abcabcc", 3, 7);
}

#[test]
fn quantifier_without_target() {
    e("/*a/");
    e("/a|+/");
}

#[test]
fn group_loops() {
    x2("/(?:ab)+/", "ababx", 0, 4);
    x2("/(?:ab)*?c/", "ababc", 0, 5);
    x2("/(a|ab)(c|bcd)(d*)/", "abcd", 0, 4);
    x2("/(?:a|b)*c/", "abbac", 0, 5);
    x2("/(?:x?)*y/", "xxy", 0, 3);
    x2("/(a|ab){2}c/", "abac", 0, 4);
}

#[test]
fn possessive() {
    n("/a++a/", "aaa");
    x2("/a*+b/", "aab", 0, 3);
    n("/(?:ab)++ab/", "ababab");
    x2("/(?:ab)++c/", "ababc", 0, 5);
    n("/\\d?+5/", "5");
    x2("/\\d?5/", "5", 0, 1);
}

#[test]
fn atomic_groups() {
    n("/(?>a+)a/", "aaa");
    x2("/(?>a+)b/", "aab", 0, 3);
    x2("/(?>ab|a)c/", "abc", 0, 3);
    n("/(?>a|ab)c/", "abc");
}

// === Groups and captures ===

#[test]
fn captures() {
    x3("/(a)(b)/", "ab", 1, 2, 2);
    x3("/(a|b)+/", "abb", 2, 3, 1);
    x3("/(?:a(b))+/", "abab", 3, 4, 1);
    x3("/(?<n>\\d+)-(?P<m>\\d+)/", "12-345", 3, 6, 2);
    x3("/(?'w'\\w)x/", "yx", 0, 1, 1);
    x3("/(a(b(c)))/", "abc", 2, 3, 3);
}

#[test]
fn group_errors() {
    e("/(a/");
    e("/a)/");
    e("/(?Q)/");
    e("/(?<>a)/");
    e("/(?<a>x)(?<a>y)/");
    e("/(?#unterminated/");
}

#[test]
fn backreferences() {
    x2("/(a+)b\\1/", "aabaa", 0, 5);
    n("/(a)\\1/i", "aA");
    x2("/(?<q>['\"]).*?\\k<q>/", "say 'hi' now", 4, 8);
    x2("/(a)\\g{1}/", "aa", 0, 2);
    x2("/(a)\\g{-1}/", "aa", 0, 2);
    x2("/(a)\\g1/", "aa", 0, 2);
    x2("/(?P<x>b)(?P=x)/", "abb", 1, 3);
    n("/(a)|\\1b/", "b");
    e("/\\k<nope>/");
    // inside a literal run only octal digits may follow the backslash
    x2("/(a)b\\1/", "aba", 0, 3);
    assert!(matches!(e("/ab\\8/"), CompileError::Syntax { .. }));
    assert!(matches!(e("/ab\\9c/"), CompileError::Syntax { .. }));
}

// === Lookaround ===

#[test]
fn lookahead() {
    x2("/foo(?=bar)/", "foobar", 0, 3);
    n("/foo(?=bar)/", "foobaz");
    x2("/foo(?!bar)/", "foobarfoobaz", 6, 9);
    x3("/(?=(a))a/", "a", 0, 1, 1);
}

#[test]
fn lookbehind() {
    x2("/(?<=\\$)\\d+/", "cost $42", 6, 8);
    x2("/(?<!\\$)\\b\\d+/", "$1 22", 3, 5);
    x2("/(?<=a|bc)d/", "bcd", 2, 3);
    x2("/(?<!^)x/", "xx", 1, 2);
    // every alternative is its own negative assertion
    x2("/(?<!a|b)x/", "ax", 1, 2);
    x2("/(?<!a|b)x/", "bx", 1, 2);
    n("/(?<!a|\\w)x/", "ax");
    x2("/(?<!a|\\w)x/", "1x", 1, 2);
    x2("/(?<!a|\\w)x/", "x", 0, 1);
}

// === Conditionals and recursion ===

#[test]
fn conditionals() {
    x2("/(a)?(?(1)b|c)/", "ab", 0, 2);
    x2("/(a)?(?(1)b|c)/", "c", 0, 1);
    x2("/(?<q>\\()?x(?(q)\\))/", "(x)", 0, 3);
    x2("/(?<q>\\()?x(?(q)\\))/", "x)", 0, 1);
    x2("/^(<)?\\w+(?(1)>)$/", "<tag>", 0, 5);
    n("/^(<)?\\w+(?(1)>)$/", "<tag");
    e("/(a)(?(1)b|c|d)/");
    e("/(?(2)a)/");
}

#[test]
fn recursion() {
    x2("/\\((?:[^()]|(?R))*\\)/", "x(a(b)c)y", 1, 8);
    x2("/a(?R)?b/", "aaabbb", 0, 6);
    x2("/^a(?R)?b/", "aabb", 0, 4);
}

// === UTF-8 ===

#[test]
fn utf8_mode() {
    x2("/./u", "é", 0, 2);
    x2("/./", "é", 0, 1);
    x2("/é+/u", "ééx", 0, 4);
    x2("/[^a]/u", "é", 0, 2);
    x2("/\\p{Lu}+/u", "abcÉCOLE", 3, 9);
    x2("/\\p{Greek}+/", "abc αβγ", 4, 10);
    x2("/\\x{e9}/u", "café", 3, 5);
    assert!(matches!(e("/\\p{Foo}/"), CompileError::UnknownProperty(_)));
}
