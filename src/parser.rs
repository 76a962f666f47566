/// Logical operator joining two segments of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `&&`: run the right segment only if the left one succeeded.
    And,
    /// `||`: run the right segment only if the left one failed.
    Or,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::And => "&&",
            Operator::Or => "||",
        }
    }

    fn at_start_of(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"&&") {
            Some(Operator::And)
        } else if bytes.starts_with(b"||") {
            Some(Operator::Or)
        } else {
            None
        }
    }
}

/// A raw line split at its logical operators.
///
/// Segments are borrowed, untokenized slices of the line. The chain is
/// evaluated strictly left to right with no precedence:
/// `a && b || c` means `(a && b) || c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<'a> {
    /// The segment before the first operator (the whole line if there is none).
    pub first: &'a str,
    /// Every following operator with the segment to its right.
    pub rest: Vec<(Operator, &'a str)>,
}

/// Split `line` at every `&&` and `||`, scanning left to right.
///
/// Operators are recognised anywhere in the line, even without surrounding
/// whitespace. Matching is greedy and non-overlapping, so `&&&` is an `&&`
/// followed by a segment starting with `&`.
pub fn parse_chain(line: &str) -> Chain<'_> {
    let bytes = line.as_bytes();
    let mut rest = Vec::new();
    let mut pending: Option<Operator> = None;
    let mut start = 0;
    let mut first = None;
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(op) = Operator::at_start_of(&bytes[pos..]) else {
            pos += 1;
            continue;
        };
        // Both operator bytes are ASCII, so `pos` is a char boundary.
        let segment = &line[start..pos];
        match pending {
            None => first = Some(segment),
            Some(prev) => rest.push((prev, segment)),
        }
        pending = Some(op);
        pos += 2;
        start = pos;
    }

    let tail = &line[start..];
    match pending {
        None => first = Some(tail),
        Some(prev) => rest.push((prev, tail)),
    }

    Chain {
        first: first.unwrap_or(line),
        rest,
    }
}
