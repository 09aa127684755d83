//! Words generated identifiers must avoid: Haxe keywords, the standard
//! library names the emitted code calls, and host globals.

pub const RESERVED_WORDS: &[&str] = &[
    // Keywords
    "abstract", "break", "case", "cast", "catch", "class", "continue", "default", "do",
    "dynamic", "else", "enum", "extends", "extern", "false", "final", "for", "function",
    "if", "implements", "import", "in", "inline", "interface", "macro", "new", "null",
    "operator", "overload", "override", "package", "private", "public", "return", "static",
    "super", "switch", "this", "throw", "true", "try", "typedef", "untyped", "using", "var",
    "while",
    // Standard library
    "Any", "Array", "Bool", "Class", "Date", "Dynamic", "EReg", "Enum", "Float", "Int",
    "IntIterator", "Lambda", "List", "Map", "Math", "Null", "Reflect", "Std", "String",
    "StringBuf", "StringTools", "Sys", "Type", "UInt", "Void", "haxe", "trace",
    // Host globals used by emitted code
    "Infinity", "NaN", "Number", "isNaN", "window",
];
