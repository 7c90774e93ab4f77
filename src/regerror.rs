// regerror.rs - Compile error message texts.
//
// Every message the parser can raise lives here so the wording stays
// consistent between the preg and ereg front ends and the tests.

// Delimiters and flags
pub const ERR_PATTERN_TOO_SHORT: &str = "pattern must have opening and closing delimiters";
pub const ERR_DELIMITER_ALNUM: &str = "delimiter must not be alphanumeric or backslash";
pub const ERR_NO_END_DELIMITER: &str = "no ending delimiter found";
pub const ERR_UNKNOWN_MODIFIER: &str = "unknown modifier";
pub const ERR_INVALID_UTF8_PATTERN: &str = "pattern is not valid UTF-8";

// Quantifiers
pub const ERR_TARGET_OF_REPEAT: &str = "quantifier does not follow a repeatable item";
pub const ERR_UNTERMINATED_REPEAT: &str = "expected '}' to close repeat range";
pub const ERR_REPEAT_RANGE_ORDER: &str = "numbers out of order in {} quantifier";
pub const ERR_REPEAT_TOO_BIG: &str = "number too big in {} quantifier";

// Groups
pub const ERR_UNMATCHED_OPEN_PAREN: &str = "missing closing parenthesis";
pub const ERR_UNMATCHED_CLOSE_PAREN: &str = "unmatched closing parenthesis";
pub const ERR_UNKNOWN_GROUP_CODE: &str = "unrecognized character after (? or (?-";
pub const ERR_UNTERMINATED_COMMENT: &str = "missing ) after comment";
pub const ERR_EMPTY_GROUP_NAME: &str = "group name must not be empty";
pub const ERR_INVALID_GROUP_NAME: &str = "group name must start with a non-digit word character";
pub const ERR_DUPLICATE_GROUP_NAME: &str = "two named subpatterns have the same name";
pub const ERR_UNKNOWN_GROUP_NAME: &str = "reference to non-existent subpattern";
pub const ERR_NON_EXISTENT_GROUP: &str = "reference to non-existent subpattern";
pub const ERR_CONDITION_GROUP: &str = "malformed number or name after (?(";
pub const ERR_CONDITION_BRANCHES: &str = "conditional group contains more than two branches";
pub const ERR_RECURSION_SYNTAX: &str = "(?R or (?[+-]digits must be followed by )";
pub const ERR_UNTERMINATED_NAME: &str = "syntax error in subpattern name (missing terminator)";
pub const ERR_NESTED_TOO_DEEP: &str = "parentheses are too deeply nested";

// Escapes
pub const ERR_END_AT_ESCAPE: &str = "\\ at end of pattern";
pub const ERR_UNRECOGNIZED_ESCAPE: &str = "unrecognized character follows \\";
pub const ERR_EXPECTED_HEX: &str = "expected hex digit";
pub const ERR_EXPECTED_OCTAL: &str = "expected octal digit";
pub const ERR_CODE_POINT_TOO_BIG: &str = "character code point value is too large";
pub const ERR_CONTROL_ESCAPE: &str = "\\c at end of pattern";
pub const ERR_BACKREF_SYNTAX: &str = "\\k or \\g is not followed by a group name or number";

// Classes and properties
pub const ERR_MISSING_BRACKET: &str = "missing terminating ] for character class";
pub const ERR_PROPERTY_SYNTAX: &str = "malformed \\P or \\p sequence";
