use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    combinator::{map, value},
    sequence::preceded,
};

/// A maximal run of comparable characters within a version or release string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Numeric(&'a str),
    Alpha(&'a str),
    /// `~`, sorts before anything, including the end of the string
    Tilde,
    /// `^`, sorts after the end of the string but before anything else
    Caret,
}

/// Anything that doesn't start a segment. Non-ASCII characters are separators too.
fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric() && c != '~' && c != '^'
}

fn segment(input: &str) -> IResult<&str, Segment<'_>> {
    alt((
        map(take_while1(|c: char| c.is_ascii_digit()), Segment::Numeric),
        map(take_while1(|c: char| c.is_ascii_alphabetic()), Segment::Alpha),
        value(Segment::Tilde, tag("~")),
        value(Segment::Caret, tag("^")),
    ))
    .parse(input)
}

/// Lazily splits a string into segments, discarding separators.
#[derive(Clone, Debug)]
pub(crate) struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (rest, segment) = preceded(take_while(is_separator), segment)
            .parse(self.rest)
            .ok()?;
        self.rest = rest;
        Some(segment)
    }
}

pub(crate) fn segments(version: &str) -> Segments<'_> {
    Segments { rest: version }
}

/// Numeric runs compare by value: leading zeroes are dropped, then the longer run wins,
/// then the digits are compared lexically.
fn compare_numeric(digits1: &str, digits2: &str) -> Ordering {
    let digits1 = digits1.trim_start_matches('0');
    let digits2 = digits2.trim_start_matches('0');

    digits1
        .len()
        .cmp(&digits2.len())
        .then_with(|| digits1.cmp(digits2))
}

fn compare_segments(segment1: Segment<'_>, segment2: Segment<'_>) -> Ordering {
    use Segment::*;

    match (segment1, segment2) {
        (Tilde, Tilde) | (Caret, Caret) => Ordering::Equal,
        (Tilde, _) => Ordering::Less,
        (_, Tilde) => Ordering::Greater,
        (Caret, _) => Ordering::Less,
        (_, Caret) => Ordering::Greater,
        (Numeric(n1), Numeric(n2)) => compare_numeric(n1, n2),
        (Alpha(a1), Alpha(a2)) => a1.cmp(a2),
        // numeric segments are always newer than alpha segments
        (Numeric(_), Alpha(_)) => Ordering::Greater,
        (Alpha(_), Numeric(_)) => Ordering::Less,
    }
}

/// How a leftover segment compares against a string that has already run out.
fn compare_leftover(segment: Segment<'_>) -> Ordering {
    match segment {
        Segment::Tilde => Ordering::Less,
        _ => Ordering::Greater,
    }
}

/// Compare two version (or release) strings the way `rpmvercmp` does.
///
/// Both strings are split into runs of digits, runs of ASCII letters, and the special
/// `~` and `^` markers; everything else only separates runs and is otherwise ignored.
/// The runs are then compared pairwise from left to right:
///
/// * `~` sorts lower than anything, even the end of the string (`1.0~rc1 < 1.0`)
/// * `^` sorts higher than the end of the string but lower than any other run
///   (`1.0 < 1.0^git1 < 1.0.1`)
/// * numeric runs are compared by value and always beat alphabetic runs
/// * alphabetic runs are compared byte-wise
/// * when one string runs out first, the longer one is newer
///
/// ```
/// use std::cmp::Ordering;
/// use rpm_vercmp::compare_versions;
///
/// assert_eq!(compare_versions("1.0010", "1.9"), Ordering::Greater);
/// assert_eq!(compare_versions("1.0~rc1", "1.0"), Ordering::Less);
/// assert_eq!(compare_versions("4_0", "4.0"), Ordering::Equal);
/// ```
pub fn compare_versions(version1: &str, version2: &str) -> Ordering {
    if version1 == version2 {
        return Ordering::Equal;
    }

    segments(version1)
        .zip_longest(segments(version2))
        .map(|pair| match pair {
            EitherOrBoth::Both(s1, s2) => compare_segments(s1, s2),
            EitherOrBoth::Left(s1) => compare_leftover(s1),
            EitherOrBoth::Right(s2) => compare_leftover(s2).reverse(),
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .inspect(|ordering| log::trace!("{:?} vs {:?}: {:?}", version1, version2, ordering))
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(version: &str) -> Vec<Segment<'_>> {
        segments(version).collect()
    }

    #[test]
    fn test_segments() {
        use Segment::*;

        assert!(tokens("").is_empty());
        assert!(tokens("..-_+").is_empty());
        assert_eq!(
            tokens("1.2.3"),
            vec![Numeric("1"), Numeric("2"), Numeric("3")]
        );
        assert_eq!(
            tokens("10abc20"),
            vec![Numeric("10"), Alpha("abc"), Numeric("20")]
        );
        assert_eq!(
            tokens("1.0~rc1"),
            vec![Numeric("1"), Numeric("0"), Tilde, Alpha("rc"), Numeric("1")]
        );
        assert_eq!(
            tokens("1.0^git1~pre"),
            vec![
                Numeric("1"),
                Numeric("0"),
                Caret,
                Alpha("git"),
                Numeric("1"),
                Tilde,
                Alpha("pre")
            ]
        );
        assert_eq!(tokens("~~"), vec![Tilde, Tilde]);
        assert_eq!(tokens("_007_"), vec![Numeric("007")]);
        // non-ascii letters separate runs but never form one
        assert_eq!(
            tokens("1Á1.Êb"),
            vec![Numeric("1"), Numeric("1"), Alpha("b")]
        );
    }

    #[test]
    fn test_compare_numeric() {
        assert_eq!(Ordering::Equal, compare_numeric("0", "000"));
        assert_eq!(Ordering::Equal, compare_numeric("0010", "10"));
        assert_eq!(Ordering::Greater, compare_numeric("0010", "9"));
        assert_eq!(Ordering::Less, compare_numeric("99", "100"));
        assert_eq!(Ordering::Less, compare_numeric("123", "124"));
        assert_eq!(
            Ordering::Greater,
            compare_numeric("18446744073709551616", "18446744073709551615")
        );
    }

    #[test]
    fn test_compare_segments() {
        use Segment::*;

        assert_eq!(Ordering::Equal, compare_segments(Tilde, Tilde));
        assert_eq!(Ordering::Equal, compare_segments(Caret, Caret));
        assert_eq!(Ordering::Less, compare_segments(Tilde, Caret));
        assert_eq!(Ordering::Less, compare_segments(Tilde, Alpha("a")));
        assert_eq!(Ordering::Less, compare_segments(Caret, Numeric("0")));
        assert_eq!(Ordering::Greater, compare_segments(Alpha("a"), Caret));
        assert_eq!(Ordering::Greater, compare_segments(Numeric("0"), Alpha("z")));
        assert_eq!(Ordering::Less, compare_segments(Alpha("z"), Numeric("0")));
        assert_eq!(Ordering::Less, compare_segments(Alpha("Z"), Alpha("a")));
        assert_eq!(Ordering::Less, compare_segments(Alpha("a"), Alpha("aa")));

        assert_eq!(Ordering::Less, compare_leftover(Tilde));
        assert_eq!(Ordering::Greater, compare_leftover(Caret));
        assert_eq!(Ordering::Greater, compare_leftover(Alpha("a")));
    }

    /// Cases from the upstream rpmvercmp test suite
    #[test]
    fn test_compare_versions() {
        let cases = [
            ("1.0", "1.0", Ordering::Equal),
            ("1.0", "2.0", Ordering::Less),
            ("2.0.1", "2.0", Ordering::Greater),
            ("2.0.1a", "2.0.1", Ordering::Greater),
            ("5.5p1", "5.5p2", Ordering::Less),
            ("5.5p1", "5.5p10", Ordering::Less),
            ("10xyz", "10.1xyz", Ordering::Less),
            ("xyz10", "xyz10.1", Ordering::Less),
            ("xyz.4", "8", Ordering::Less),
            ("2", "xyz.4", Ordering::Greater),
            ("5.5p2", "5.6p1", Ordering::Less),
            ("6.5p1", "5.6p1", Ordering::Greater),
            ("6.0.rc1", "6.0", Ordering::Greater),
            ("10b2", "10a1", Ordering::Greater),
            ("1.0a", "1.0aa", Ordering::Less),
            ("10.0001", "10.1", Ordering::Equal),
            ("10.0001", "10.0039", Ordering::Less),
            ("4.999.9", "5.0", Ordering::Less),
            ("20101122", "20101121", Ordering::Greater),
            ("2_0", "2.0", Ordering::Equal),
            ("a+", "a_", Ordering::Equal),
            ("_+", "+_", Ordering::Equal),
            ("+", "_", Ordering::Equal),
        ];

        for (v1, v2, expected) in cases {
            assert_eq!(expected, compare_versions(v1, v2), "{v1} vs {v2}");
            assert_eq!(expected.reverse(), compare_versions(v2, v1), "{v2} vs {v1}");
        }
    }

    #[test]
    fn test_compare_versions_tilde_and_caret() {
        let cases = [
            ("1.0~rc1", "1.0~rc1", Ordering::Equal),
            ("1.0~rc1", "1.0", Ordering::Less),
            ("1.0~rc1", "1.0~rc2", Ordering::Less),
            ("1.0~rc1~git123", "1.0~rc1", Ordering::Less),
            ("1.0^", "1.0", Ordering::Greater),
            ("1.0^git1", "1.0", Ordering::Greater),
            ("1.0^git1", "1.0^git2", Ordering::Less),
            ("1.0^git1", "1.01", Ordering::Less),
            ("1.0^20160101", "1.0.1", Ordering::Less),
            ("1.0^20160102", "1.0^20160101^git1", Ordering::Greater),
            ("1.0~rc1^git1", "1.0~rc1", Ordering::Greater),
            ("1.0^git1~pre", "1.0^git1", Ordering::Less),
            ("~", "", Ordering::Less),
            ("^", "", Ordering::Greater),
        ];

        for (v1, v2, expected) in cases {
            assert_eq!(expected, compare_versions(v1, v2), "{v1} vs {v2}");
            assert_eq!(expected.reverse(), compare_versions(v2, v1), "{v2} vs {v1}");
        }
    }

    #[test]
    fn test_compare_versions_empty() {
        assert_eq!(Ordering::Equal, compare_versions("", ""));
        assert_eq!(Ordering::Less, compare_versions("", "1"));
        assert_eq!(Ordering::Less, compare_versions("", "a"));
        // separators alone produce no segments
        assert_eq!(Ordering::Equal, compare_versions("", "._+"));
        assert_eq!(Ordering::Equal, compare_versions("1.0.", "1.0"));
    }
}
