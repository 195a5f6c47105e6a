#![allow(dead_code)]

/// A spread of EVR strings covering epochs, separators, tildes, carets and odd input
pub const EVRS: &[&str] = &[
    "",
    "0",
    "1",
    "1.0",
    "1_0",
    "1.0.",
    "1.0-1",
    "0:1.0-1",
    "1:1.0-1",
    "x:1.0-1",
    "1.0~rc1",
    "1.0~rc1-1",
    "1.0~~",
    "1.0^",
    "1.0^git1",
    "1.0a",
    "1.0.a",
    "1.0.1",
    "1.0010",
    "1.9",
    "10.0001",
    "10.1",
    "5.5p1",
    "5.5p10",
    "xyz.4",
    "abc",
    "~",
    "^",
    "_+",
    "2:0.1",
    "1.1Á1",
    "20240521-3.fc40",
];
